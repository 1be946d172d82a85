//! XDG-style path utilities for the configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for ryomen.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/ryomen` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/ryomen` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join("ryomen"));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join("ryomen"))
}
