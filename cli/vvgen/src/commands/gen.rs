//! `vvgen gen` — compose and print the `meson setup` command line.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use vv_devshell::env::{VCINSTALLDIR, VSCMD_ARG_HOST_ARCH, VSCMD_ARG_TGT_ARCH};
use vv_devshell::{DevShell, EnvSnapshot};
use vv_meson::{compose, render_invocation, BuildOptions, BuildRequest, Composition, Invocation};

use crate::config::VvgenConfig;

/// Output format of `vvgen gen`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Settings summary, argument list and the command to copy.
    #[default]
    Human,
    /// One JSON object; nothing else is written to stdout.
    Json,
}

/// Options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct GenOptions {
    pub build: BuildOptions,
    pub root: Option<PathBuf>,
    pub format: Format,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    shell: &'a DevShell,
    #[serde(flatten)]
    composition: &'a Composition,
    command: Invocation,
}

/// Validate the shell, merge options with config defaults and print the result.
pub fn run(
    env: &EnvSnapshot,
    cwd: &Path,
    config: Option<(VvgenConfig, PathBuf)>,
    options: GenOptions,
) -> Result<()> {
    let shell = super::check::run(env)?;

    let (defaults, config_dir) = match config {
        Some((config, dir)) => (config.defaults, Some(dir)),
        None => (BuildOptions::default(), None),
    };
    let root = match options.root.or(config_dir) {
        Some(root) => root,
        None => tool_dir()?,
    };
    let request = BuildRequest::resolve(options.build.or(defaults), &shell);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    generate(&mut out, &shell, request, &root, cwd, options.format)
}

/// Directory holding the `vvgen` executable, where `build/` and the
/// `build-{platform}.txt` cross files live by default.
pub fn tool_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the vvgen executable")?;
    let dir = exe
        .parent()
        .with_context(|| format!("{} has no parent directory", exe.display()))?;
    Ok(dir.to_path_buf())
}

/// Write the report for `request` to `out`.
///
/// In human format the settings summary is written before the architecture
/// cross-check, so it remains visible when the check fails.
pub fn generate<W: Write>(
    out: &mut W,
    shell: &DevShell,
    request: BuildRequest,
    root: &Path,
    cwd: &Path,
    format: Format,
) -> Result<()> {
    match format {
        Format::Human => {
            write_summary(out, shell, &request)?;
            let composition = compose(request, shell, root)?;
            write_command(out, &composition, cwd)?;
        }
        Format::Json => {
            let composition = compose(request, shell, root)?;
            let report = JsonReport {
                shell,
                composition: &composition,
                command: render_invocation(cwd, &composition.arg_strings()),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, shell: &DevShell, request: &BuildRequest) -> Result<()> {
    writeln!(out, "  Target Settings")?;
    writeln!(out, "    Platform     : {}", request.platform)?;
    writeln!(out, "    Architecture : {}", request.target_arch())?;
    writeln!(out, "    Configuration: {}", request.configuration)?;
    writeln!(out, "    VCRT         : {}", request.vcrt)?;
    writeln!(out)?;

    writeln!(out, "  Environment")?;
    writeln!(out, "    {VCINSTALLDIR:<19}: {}", shell.vc_install_dir.display())?;
    writeln!(out, "    {VSCMD_ARG_HOST_ARCH:<19}: {}", shell.host_arch)?;
    writeln!(out, "    {VSCMD_ARG_TGT_ARCH:<19}: {}", shell.target_arch)?;
    writeln!(out)?;
    Ok(())
}

fn write_command<W: Write>(out: &mut W, composition: &Composition, cwd: &Path) -> Result<()> {
    let args = composition.arg_strings();

    writeln!(out, "  Meson arguments")?;
    for arg in &args {
        writeln!(out, "    {arg}")?;
    }
    writeln!(out)?;

    let invocation = render_invocation(cwd, &args);
    writeln!(out, "meson command:")?;
    for line in invocation.lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use vv_devshell::env::VSINSTALLDIR;
    use vv_devshell::Arch;
    use vv_meson::{Configuration, Platform};

    use super::*;

    fn shell(host: Arch, target: Arch) -> DevShell {
        DevShell {
            vs_install_dir: PathBuf::from("C:/VS"),
            vc_install_dir: PathBuf::from("C:/VS/VC"),
            host_arch: host,
            target_arch: target,
        }
    }

    fn render(sh: &DevShell, options: BuildOptions, format: Format) -> (Result<()>, String) {
        let mut out = Vec::new();
        let request = BuildRequest::resolve(options, sh);
        let result = generate(
            &mut out,
            sh,
            request,
            Path::new("root"),
            Path::new("/work"),
            format,
        );
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn human_report_layout() {
        let sh = shell(Arch::X64, Arch::X86);
        let (result, text) = render(
            &sh,
            BuildOptions {
                configuration: Some(Configuration::Debug),
                ..Default::default()
            },
            Format::Human,
        );
        result.unwrap();
        assert!(text.starts_with("  Target Settings\n    Platform     : x86\n"));
        assert!(text.contains("    Architecture : x86\n"));
        assert!(text.contains("    VCRT         : mt\n"));
        assert!(text.contains("    VSCMD_ARG_HOST_ARCH: x64\n"));
        assert!(text.contains("    VSCMD_ARG_TGT_ARCH : x86\n"));
        assert!(text.contains("    VCINSTALLDIR       : C:/VS/VC\n"));
        assert!(text.contains("  Meson arguments\n"));
        assert!(text.contains("    -Dmin-windows-version=7\n"));
        assert!(text.contains("meson command:\ncd /work\nmeson setup "));
        assert!(text.contains(" '-Dc_args=/Zi /FS /WX- /wd4189' "));
    }

    #[test]
    fn mismatch_keeps_summary_but_stops_before_arguments() {
        let sh = shell(Arch::X64, Arch::X64);
        let (result, text) = render(
            &sh,
            BuildOptions {
                platform: Some(Platform::Arm),
                ..Default::default()
            },
            Format::Human,
        );
        let err = result.unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("'arm'") && msg.contains("'x64'"));
        assert!(text.contains("  Target Settings"));
        assert!(!text.contains("Meson arguments"));
        assert!(!text.contains("meson setup"));
    }

    #[test]
    fn json_report_is_single_object() {
        let sh = shell(Arch::Arm64, Arch::Arm64);
        let (result, text) = render(
            &sh,
            BuildOptions {
                platform: Some(Platform::Arm64ec),
                ..Default::default()
            },
            Format::Json,
        );
        result.unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["request"]["platform"], "arm64ec");
        assert_eq!(value["target_arch"], "arm64");
        assert_eq!(value["shell"]["host_arch"], "arm64");
        assert_eq!(value["command"]["cd"], "cd /work");
        assert!(value["cross_file"].is_null());
        assert!(value["flags"]["c_args"]
            .as_array()
            .unwrap()
            .iter()
            .any(|t| t == "-D_ARM64EC_"));
    }

    #[test]
    fn json_mismatch_writes_nothing() {
        let sh = shell(Arch::X64, Arch::X64);
        let (result, text) = render(
            &sh,
            BuildOptions {
                platform: Some(Platform::X86),
                ..Default::default()
            },
            Format::Json,
        );
        assert!(result.is_err());
        assert!(text.is_empty());
    }

    #[test]
    fn run_uses_config_defaults_and_dir() {
        let vs = tempfile::tempdir().unwrap();
        let path = vs.path().to_string_lossy().into_owned();
        let env = EnvSnapshot::from_pairs([
            (VSINSTALLDIR, path.clone()),
            (VCINSTALLDIR, path),
            (VSCMD_ARG_HOST_ARCH, "x64".into()),
            (VSCMD_ARG_TGT_ARCH, "x64".into()),
        ]);
        let config: VvgenConfig = toml::from_str("[defaults]\nplatform = \"arm\"\n").unwrap();
        let err = run(
            &env,
            Path::new("/work"),
            Some((config, PathBuf::from("/proj"))),
            GenOptions::default(),
        )
        .unwrap_err();
        // The config asked for arm while the shell targets x64.
        assert!(format!("{err:#}").contains("'arm'"));
    }

    #[test]
    fn tool_dir_is_executable_parent() {
        let exe = std::env::current_exe().unwrap();
        assert_eq!(tool_dir().unwrap(), exe.parent().unwrap());
    }

    #[test]
    fn default_root_is_tool_dir_not_cwd() {
        let cwd = tempfile::tempdir().unwrap();
        let root = tool_dir().unwrap();
        assert_ne!(root, cwd.path());

        let sh = shell(Arch::X64, Arch::X86);
        let request = BuildRequest::resolve(
            BuildOptions {
                configuration: Some(Configuration::Debug),
                ..Default::default()
            },
            &sh,
        );
        let mut out = Vec::new();
        generate(&mut out, &sh, request, &root, cwd.path(), Format::Human).unwrap();
        let text = String::from_utf8(out).unwrap();

        let cross = format!("--cross-file={}", root.join("build-x86.txt").display());
        let build = root.join("build/vv_x86_debug").display().to_string();
        assert!(text.contains(&cross));
        assert!(text.contains(&build));
        assert!(!text.contains(&format!(
            "--cross-file={}",
            cwd.path().join("build-x86.txt").display()
        )));
        assert!(text.contains(&format!("cd {}", cwd.path().display())));
    }

    #[test]
    fn run_rejects_missing_dev_shell() {
        let err = run(
            &EnvSnapshot::default(),
            Path::new("/work"),
            None,
            GenOptions::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("Developer PowerShell for VS"));
    }
}
