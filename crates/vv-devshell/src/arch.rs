//! CPU architecture codes reported by the developer shell.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Architecture code as exported in `VSCMD_ARG_HOST_ARCH` / `VSCMD_ARG_TGT_ARCH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Arm,
    Arm64,
    X64,
    /// 32-bit x86.
    X86,
}

impl Arch {
    /// Every supported architecture, in display order.
    pub const ALL: [Arch; 4] = [Arch::Arm, Arch::Arm64, Arch::X64, Arch::X86];

    /// The code used by the developer shell (`arm`, `arm64`, `x64`, `x86`).
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Arm => "arm",
            Arch::Arm64 => "arm64",
            Arch::X64 => "x64",
            Arch::X86 => "x86",
        }
    }

    /// Codes of all supported architectures.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.as_str()).collect()
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string is not a known architecture code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown architecture '{0}'")]
pub struct UnknownArch(pub String);

impl FromStr for Arch {
    type Err = UnknownArch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownArch(s.to_string()))
    }
}
