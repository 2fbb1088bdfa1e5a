//! `vvgen.toml` discovery and parsing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vv_meson::BuildOptions;

/// File name searched for by [`VvgenConfig::find_and_load`].
pub const CONFIG_FILE: &str = "vvgen.toml";

/// Project-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VvgenConfig {
    /// Defaults used when an option is not given on the command line.
    #[serde(default)]
    pub defaults: BuildOptions,
}

impl VvgenConfig {
    /// Search upward from `start_dir` for a `vvgen.toml` file, parse and return
    /// it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let config: VvgenConfig = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                tracing::debug!(path = %candidate.display(), "loaded config");
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a config from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing vvgen.toml")
    }

    /// Default contents written by `vvgen init`.
    pub fn template() -> &'static str {
        r#"# Defaults for `vvgen gen`. Command-line options take precedence.
[defaults]
# platform = "x64"        # arm, arm64, arm64ec, x64, x86 (default: shell target)
configuration = "release" # debug, release
vcrt = "mt"               # md, mt
"#
    }
}
