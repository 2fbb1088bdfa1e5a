//! Immutable snapshot of the process environment.

use std::collections::BTreeMap;

/// Installation directory of Visual Studio.
pub const VSINSTALLDIR: &str = "VSINSTALLDIR";
/// Installation directory of the VC toolset.
pub const VCINSTALLDIR: &str = "VCINSTALLDIR";
/// Host architecture selected by the developer shell.
pub const VSCMD_ARG_HOST_ARCH: &str = "VSCMD_ARG_HOST_ARCH";
/// Target architecture selected by the developer shell.
pub const VSCMD_ARG_TGT_ARCH: &str = "VSCMD_ARG_TGT_ARCH";

/// Variables every developer shell exports, in the order they are checked.
pub const REQUIRED_VARS: [&str; 4] = [
    VSINSTALLDIR,
    VCINSTALLDIR,
    VSCMD_ARG_HOST_ARCH,
    VSCMD_ARG_TGT_ARCH,
];

/// A read-only name → value view of an environment, captured once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped; none of the
    /// variables this tool reads are affected by that.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Whether the variable is present (an empty value still counts).
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Number of captured variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables were captured.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
