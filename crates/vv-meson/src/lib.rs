//! Meson setup command composition for the Venus Vulkan driver on Windows.
//!
//! Given a validated [`DevShell`](vv_devshell::DevShell) and the operator's
//! choice of platform, configuration and C runtime linkage, this crate derives
//! the MSVC compiler/linker flags and Meson options for a Venus-only build and
//! renders a `meson setup` command line. Nothing is executed.
//!
//! The pipeline is:
//! 1. [`BuildRequest::resolve`] applies defaults from the shell,
//! 2. [`compose`] cross-checks the request against the shell and assembles
//!    the ordered [`MesonArg`] list,
//! 3. [`render_invocation`] turns the list into copy/paste-ready text.

pub mod args;
pub mod compose;
pub mod error;
pub mod flags;
pub mod render;
pub mod request;

pub use args::MesonArg;
pub use compose::{build_dir, compose, cross_file_path, install_prefix, Composition};
pub use error::{ComposeError, ParamError, Result};
pub use flags::{FlagList, ToolFlags};
pub use render::{quote_arg, render_invocation, Invocation};
pub use request::{BuildOptions, BuildRequest, Choice, Configuration, Platform, Vcrt};
