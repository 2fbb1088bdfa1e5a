//! Build request: platform, configuration and C runtime selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vv_devshell::{Arch, DevShell};

use crate::error::{ComposeError, ParamError, Result};

/// A closed set of named values accepted on the command line.
pub trait Choice: Copy + Sized + 'static {
    /// Parameter name used in diagnostics.
    const PARAM: &'static str;
    /// All values, in display order.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }

    /// Parse a value, naming the allowed set on failure.
    fn parse_choice(s: &str) -> std::result::Result<Self, ParamError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParamError::Invalid {
                param: Self::PARAM,
                value: s.to_string(),
                valid: Self::names(),
            })
    }
}

/// Target platform. `arm64ec` is an execution mode of `arm64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Arm,
    Arm64,
    Arm64ec,
    X64,
    X86,
}

impl Platform {
    /// The architecture the developer shell must target for this platform.
    pub fn arch(self) -> Arch {
        match self {
            Platform::Arm => Arch::Arm,
            Platform::Arm64 | Platform::Arm64ec => Arch::Arm64,
            Platform::X64 => Arch::X64,
            Platform::X86 => Arch::X86,
        }
    }
}

impl Choice for Platform {
    const PARAM: &'static str = "platform";
    const ALL: &'static [Self] = &[
        Platform::Arm,
        Platform::Arm64,
        Platform::Arm64ec,
        Platform::X64,
        Platform::X86,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Platform::Arm => "arm",
            Platform::Arm64 => "arm64",
            Platform::Arm64ec => "arm64ec",
            Platform::X64 => "x64",
            Platform::X86 => "x86",
        }
    }
}

impl From<Arch> for Platform {
    fn from(arch: Arch) -> Self {
        match arch {
            Arch::Arm => Platform::Arm,
            Arch::Arm64 => Platform::Arm64,
            Arch::X64 => Platform::X64,
            Arch::X86 => Platform::X86,
        }
    }
}

/// Build configuration; maps onto Meson's `buildtype`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Configuration {
    Debug,
    #[default]
    Release,
}

impl Configuration {
    /// Whether assertions are compiled out (`b_ndebug`).
    pub fn disables_assertions(self) -> bool {
        self == Configuration::Release
    }
}

impl Choice for Configuration {
    const PARAM: &'static str = "configuration";
    const ALL: &'static [Self] = &[Configuration::Debug, Configuration::Release];

    fn as_str(self) -> &'static str {
        match self {
            Configuration::Debug => "debug",
            Configuration::Release => "release",
        }
    }
}

/// C runtime linkage: dynamic (`md`) or static (`mt`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vcrt {
    Md,
    #[default]
    Mt,
}

impl Choice for Vcrt {
    const PARAM: &'static str = "vcrt";
    const ALL: &'static [Self] = &[Vcrt::Md, Vcrt::Mt];

    fn as_str(self) -> &'static str {
        match self {
            Vcrt::Md => "md",
            Vcrt::Mt => "mt",
        }
    }
}

macro_rules! choice_str_impls {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParamError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Self::parse_choice(s)
            }
        }
    )*};
}

choice_str_impls!(Platform, Configuration, Vcrt);

/// Operator choices before defaults are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub configuration: Option<Configuration>,
    #[serde(default)]
    pub vcrt: Option<Vcrt>,
}

impl BuildOptions {
    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: BuildOptions) -> BuildOptions {
        BuildOptions {
            platform: self.platform.or(fallback.platform),
            configuration: self.configuration.or(fallback.configuration),
            vcrt: self.vcrt.or(fallback.vcrt),
        }
    }
}

/// A fully defaulted build request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildRequest {
    pub platform: Platform,
    pub configuration: Configuration,
    pub vcrt: Vcrt,
}

impl BuildRequest {
    /// Apply defaults: the platform falls back to the shell's target
    /// architecture, the rest to their `Default`.
    pub fn resolve(options: BuildOptions, shell: &DevShell) -> Self {
        let request = Self {
            platform: options
                .platform
                .unwrap_or_else(|| Platform::from(shell.target_arch)),
            configuration: options.configuration.unwrap_or_default(),
            vcrt: options.vcrt.unwrap_or_default(),
        };
        debug!(
            platform = %request.platform,
            configuration = %request.configuration,
            vcrt = %request.vcrt,
            "build request resolved"
        );
        request
    }

    /// Architecture implied by the platform.
    pub fn target_arch(&self) -> Arch {
        self.platform.arch()
    }

    /// Ensure the shell targets the architecture this request builds for.
    pub fn check_environment(&self, shell: &DevShell) -> Result<()> {
        let detected = self.target_arch();
        if detected != shell.target_arch {
            return Err(ComposeError::ArchMismatch {
                detected,
                environment: shell.target_arch,
            });
        }
        Ok(())
    }
}
