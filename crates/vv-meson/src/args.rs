//! Individual `meson setup` arguments.

use std::fmt;

use serde::{Serialize, Serializer};

/// One argument of a `meson setup` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MesonArg {
    /// A bare argument such as the build or source directory.
    Positional(String),
    /// `--name=value`.
    Switch { name: &'static str, value: String },
    /// `-Dname=value`; the value may be empty.
    Define { name: &'static str, value: String },
}

impl MesonArg {
    /// A bare argument.
    pub fn positional(value: impl Into<String>) -> Self {
        MesonArg::Positional(value.into())
    }

    /// A `--name=value` argument.
    pub fn switch(name: &'static str, value: impl Into<String>) -> Self {
        MesonArg::Switch {
            name,
            value: value.into(),
        }
    }

    /// A `-Dname=value` build option.
    pub fn define(name: &'static str, value: impl Into<String>) -> Self {
        MesonArg::Define {
            name,
            value: value.into(),
        }
    }

    /// Option name for switches and defines.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            MesonArg::Positional(_) => None,
            MesonArg::Switch { name, .. } | MesonArg::Define { name, .. } => Some(*name),
        }
    }

    /// The argument's value; the whole text for positionals.
    pub fn value(&self) -> &str {
        match self {
            MesonArg::Positional(value)
            | MesonArg::Switch { value, .. }
            | MesonArg::Define { value, .. } => value.as_str(),
        }
    }
}

impl fmt::Display for MesonArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MesonArg::Positional(value) => f.write_str(value),
            MesonArg::Switch { name, value } => write!(f, "--{name}={value}"),
            MesonArg::Define { name, value } => write!(f, "-D{name}={value}"),
        }
    }
}

impl Serialize for MesonArg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(MesonArg::positional(".").to_string(), ".");
        assert_eq!(MesonArg::switch("backend", "vs").to_string(), "--backend=vs");
        assert_eq!(
            MesonArg::define("vulkan-drivers", "virtio").to_string(),
            "-Dvulkan-drivers=virtio"
        );
        assert_eq!(MesonArg::define("video-codecs", "").to_string(), "-Dvideo-codecs=");
    }

    #[test]
    fn name_and_value() {
        let arg = MesonArg::define("b_vscrt", "mt");
        assert_eq!(arg.name(), Some("b_vscrt"));
        assert_eq!(arg.value(), "mt");
        assert_eq!(MesonArg::positional("build").name(), None);
    }
}
