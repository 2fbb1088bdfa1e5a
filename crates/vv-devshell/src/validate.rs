//! Developer shell validation.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::arch::{Arch, UnknownArch};
use crate::env::{
    EnvSnapshot, REQUIRED_VARS, VCINSTALLDIR, VSCMD_ARG_HOST_ARCH, VSCMD_ARG_TGT_ARCH,
    VSINSTALLDIR,
};
use crate::error::{DevShellError, Result};

/// A validated developer shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevShell {
    pub vs_install_dir: PathBuf,
    pub vc_install_dir: PathBuf,
    pub host_arch: Arch,
    pub target_arch: Arch,
}

impl DevShell {
    /// Whether the shell compiles for a different architecture than it runs on.
    pub fn is_cross(&self) -> bool {
        self.host_arch != self.target_arch
    }
}

/// Validate that `env` comes from a usable developer shell.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. all of [`REQUIRED_VARS`] are present,
/// 2. `VSINSTALLDIR` then `VCINSTALLDIR` name existing directories,
/// 3. `VSCMD_ARG_HOST_ARCH` then `VSCMD_ARG_TGT_ARCH` are known [`Arch`] codes.
///
/// Only existence is checked for the directories, not readability.
pub fn validate(env: &EnvSnapshot) -> Result<DevShell> {
    for var in REQUIRED_VARS {
        if !env.contains(var) {
            debug!(var, "required variable missing");
            return Err(DevShellError::NotInDevShell { var });
        }
    }

    let vs_install_dir = existing_dir(env, VSINSTALLDIR)?;
    let vc_install_dir = existing_dir(env, VCINSTALLDIR)?;
    let host_arch = arch(env, VSCMD_ARG_HOST_ARCH)?;
    let target_arch = arch(env, VSCMD_ARG_TGT_ARCH)?;

    debug!(%host_arch, %target_arch, "developer shell validated");
    Ok(DevShell {
        vs_install_dir,
        vc_install_dir,
        host_arch,
        target_arch,
    })
}

fn value<'a>(env: &'a EnvSnapshot, var: &'static str) -> Result<&'a str> {
    env.get(var).ok_or(DevShellError::NotInDevShell { var })
}

fn existing_dir(env: &EnvSnapshot, var: &'static str) -> Result<PathBuf> {
    let value = value(env, var)?;
    if !Path::new(value).is_dir() {
        return Err(DevShellError::PathNotFound {
            var,
            value: value.to_string(),
        });
    }
    debug!(var, value, "directory exists");
    Ok(PathBuf::from(value))
}

fn arch(env: &EnvSnapshot, var: &'static str) -> Result<Arch> {
    value(env, var)?
        .parse::<Arch>()
        .map_err(|UnknownArch(value)| DevShellError::InvalidArch { var, value })
}
