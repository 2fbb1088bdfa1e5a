//! `vvgen init` — write a starter `vvgen.toml`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{VvgenConfig, CONFIG_FILE};

/// Create `vvgen.toml` in `dir`.
pub fn run(dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }
    fs::write(&path, VvgenConfig::template())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
