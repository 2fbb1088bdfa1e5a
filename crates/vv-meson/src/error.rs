//! Error types for command composition.

use vv_devshell::Arch;

/// An enumerated parameter received a value outside its allowed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("Invalid {param}: \"{value}\". Valid values are: {}", valid.join(", "))]
    Invalid {
        /// Parameter name (`platform`, `configuration`, `vcrt`).
        param: &'static str,
        /// The rejected value.
        value: String,
        /// The allowed values.
        valid: Vec<&'static str>,
    },
}

/// Errors that stop composition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// The requested platform builds for a different architecture than the
    /// developer shell targets.
    #[error(
        "Detected target architecture '{detected}' does not match current environment's target architecture '{environment}'\n\
         Please launch Developer PowerShell for VS with parameter: -DevCmdArguments '-arch={detected} ...'"
    )]
    ArchMismatch {
        /// Architecture implied by the requested platform.
        detected: Arch,
        /// `VSCMD_ARG_TGT_ARCH` of the running shell.
        environment: Arch,
    },
}

/// Result type for composition.
pub type Result<T> = std::result::Result<T, ComposeError>;
