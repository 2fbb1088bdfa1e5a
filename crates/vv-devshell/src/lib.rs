//! Visual Studio developer shell validation.
//!
//! A Venus build must be configured from inside a "Developer PowerShell for
//! VS" session. That shell exports the toolchain locations and the host and
//! target architectures; this crate checks that those variables are present
//! and sane before anything is derived from them.
//!
//! The environment is never read implicitly. Callers capture an
//! [`EnvSnapshot`] (usually via [`EnvSnapshot::from_process`]) and hand it to
//! [`validate`], which yields a typed [`DevShell`].

pub mod arch;
pub mod env;
pub mod error;
pub mod validate;

pub use arch::Arch;
pub use env::EnvSnapshot;
pub use error::{DevShellError, Result};
pub use validate::{validate, DevShell};
