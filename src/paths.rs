//! XDG-style location of the configuration file.
//!
//! `$XDG_CONFIG_HOME` wins over the platform default so the same layout is
//! used on every OS.

use std::path::PathBuf;

use crate::error::{Result, TzhError};

const APP_DIR: &str = "tzh";
const CONFIG_FILE: &str = "config.toml";

/// Returns the configuration directory for tzh.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/tzh` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/tzh` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

/// Full path of `config.toml`.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        TzhError::io(
            "Failed to determine home directory",
            std::io::Error::new(std::io::ErrorKind::NotFound, "HOME is not set"),
        )
    })
}
