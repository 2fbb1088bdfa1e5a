//! Error types for developer shell validation.

use crate::arch::Arch;

/// Errors raised while validating the developer shell environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DevShellError {
    /// A required variable is absent: the process was not launched from the
    /// developer shell.
    #[error("environment variable '{var}' is not set. Please run me through \"Developer PowerShell for VS [version]\".")]
    NotInDevShell {
        /// The first missing variable.
        var: &'static str,
    },

    /// A directory-valued variable points somewhere that is not a directory.
    #[error("The environment variable '{var}' is set (value: {value}), but the folder it points to does not exist.")]
    PathNotFound {
        /// Variable name.
        var: &'static str,
        /// Its current value.
        value: String,
    },

    /// An architecture-valued variable holds an unrecognized code.
    #[error("{var}({value}) is invalid! Valid values are: {}", Arch::names().join(", "))]
    InvalidArch {
        /// Variable name.
        var: &'static str,
        /// Its current value.
        value: String,
    },
}

/// Result type for developer shell operations.
pub type Result<T> = std::result::Result<T, DevShellError>;
