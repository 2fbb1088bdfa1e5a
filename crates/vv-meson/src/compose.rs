//! Assembly of the `meson setup` argument list.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;
use vv_devshell::{Arch, DevShell};

use crate::args::MesonArg;
use crate::error::Result;
use crate::flags::ToolFlags;
use crate::request::{BuildRequest, Configuration, Platform};

/// Minimum Windows version for 32-bit x86 builds.
const X86_MIN_WINDOWS_VERSION: &str = "7";

/// Fixed feature selection for a Venus-only build: no EGL, LLVM, codecs or
/// Gallium drivers; the virtio Vulkan driver only.
const FEATURE_DEFINES: &[(&str, &str)] = &[
    ("egl", "disabled"),
    ("llvm", "disabled"),
    ("platforms", "windows"),
    ("video-codecs", ""),
    ("gallium-drivers", ""),
    ("vulkan-drivers", "virtio"),
    ("werror", "false"),
    ("zlib", "disabled"),
];

/// `{root}/build/vv_{platform}_{configuration}`.
pub fn build_dir(root: &Path, platform: Platform, configuration: Configuration) -> PathBuf {
    root.join(format!("build/vv_{platform}_{configuration}"))
}

/// `{root}/build/out_vv_{platform}_{configuration}`.
pub fn install_prefix(root: &Path, platform: Platform, configuration: Configuration) -> PathBuf {
    root.join(format!("build/out_vv_{platform}_{configuration}"))
}

/// `{root}/build-{platform}.txt`. Not checked for existence.
pub fn cross_file_path(root: &Path, platform: Platform) -> PathBuf {
    root.join(format!("build-{platform}.txt"))
}

/// Everything derived for one build request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Composition {
    pub request: BuildRequest,
    /// Architecture the platform builds for.
    pub target_arch: Arch,
    pub cross_file: Option<PathBuf>,
    pub min_windows_version: Option<&'static str>,
    pub flags: ToolFlags,
    pub args: Vec<MesonArg>,
}

/// Cross-check `request` against `shell` and derive the Meson arguments.
///
/// `root` is the directory build outputs and cross files are placed under.
pub fn compose(request: BuildRequest, shell: &DevShell, root: &Path) -> Result<Composition> {
    request.check_environment(shell)?;

    let BuildRequest {
        platform,
        configuration,
        vcrt,
    } = request;
    let target_arch = request.target_arch();

    let cross_file = (target_arch != shell.host_arch).then(|| cross_file_path(root, platform));
    let min_windows_version = (target_arch == Arch::X86).then_some(X86_MIN_WINDOWS_VERSION);
    let flags = ToolFlags::for_platform(platform);
    debug!(
        cross = cross_file.is_some(),
        min_windows_version, "derived target settings"
    );

    let mut args = vec![
        MesonArg::positional(build_dir(root, platform, configuration).display().to_string()),
        MesonArg::positional("."),
        MesonArg::switch("backend", "vs"),
        MesonArg::switch("default-library", "static"),
        MesonArg::switch(
            "prefix",
            install_prefix(root, platform, configuration)
                .display()
                .to_string(),
        ),
        MesonArg::define("buildtype", configuration.to_string()),
        MesonArg::define("b_ndebug", configuration.disables_assertions().to_string()),
        MesonArg::define("b_vscrt", vcrt.to_string()),
        MesonArg::define("c_args", flags.c_args.join()),
        MesonArg::define("cpp_args", flags.cpp_args.join()),
        MesonArg::define("c_link_args", flags.c_link_args.join()),
        MesonArg::define("cpp_link_args", flags.cpp_link_args.join()),
    ];
    args.extend(
        FEATURE_DEFINES
            .iter()
            .map(|&(name, value)| MesonArg::define(name, value)),
    );
    if let Some(path) = &cross_file {
        args.push(MesonArg::switch("cross-file", path.display().to_string()));
    }
    if let Some(version) = min_windows_version {
        args.push(MesonArg::define("min-windows-version", version));
    }

    Ok(Composition {
        request,
        target_arch,
        cross_file,
        min_windows_version,
        flags,
        args,
    })
}

impl Composition {
    /// The first argument with the given option name.
    pub fn option(&self, name: &str) -> Option<&MesonArg> {
        self.args.iter().find(|a| a.name() == Some(name))
    }

    /// Whether `b_ndebug` is on.
    pub fn disables_assertions(&self) -> bool {
        self.request.configuration.disables_assertions()
    }

    /// Arguments as plain strings, in order.
    pub fn arg_strings(&self) -> Vec<String> {
        self.args.iter().map(ToString::to_string).collect()
    }
}
