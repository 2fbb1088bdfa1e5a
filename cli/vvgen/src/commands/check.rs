//! `vvgen check` — developer shell validation.

use anyhow::Result;
use vv_devshell::{DevShell, EnvSnapshot};

/// Validate the developer shell. Prints nothing on success.
pub fn run(env: &EnvSnapshot) -> Result<DevShell> {
    Ok(vv_devshell::validate(env)?)
}
