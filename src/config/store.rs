use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Config;
use crate::error::{Result, TzhError};
use crate::{fs as tzh_fs, paths};

/// Loads and saves `config.toml`.
pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    /// Store at the default location (`$XDG_CONFIG_HOME/tzh/config.toml`
    /// or `~/.config/tzh/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::at(paths::config_file()?))
    }

    /// Store backed by an explicit file.
    pub fn at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the saved config.
    ///
    /// Fails with [`TzhError::ConfigMissing`] when nothing has been saved.
    pub fn load(&self) -> Result<Config> {
        self.load_optional()?.ok_or_else(|| TzhError::ConfigMissing {
            path: self.config_path.clone(),
        })
    }

    /// Like [`load`](Self::load), but a missing file is `Ok(None)`.
    pub fn load_optional(&self) -> Result<Option<Config>> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(TzhError::io(
                    format!("Failed to read config file {}", self.config_path.display()),
                    e,
                ));
            }
        };

        let config: Config = toml::from_str(&contents).map_err(|e| self.invalid(e.message()))?;
        config.validate().map_err(|message| self.invalid(&message))?;

        debug!(path = %self.config_path.display(), "loaded config");
        Ok(Some(config))
    }

    /// Writes `config`, replacing whatever was saved before.
    pub fn save(&self, config: &Config) -> Result<()> {
        let contents = toml::to_string_pretty(config)
            .map_err(|e| self.invalid(&format!("cannot serialize: {e}")))?;

        tzh_fs::atomic_write(&self.config_path, &contents)?;

        debug!(path = %self.config_path.display(), "saved config");
        Ok(())
    }

    fn invalid(&self, message: &str) -> TzhError {
        TzhError::ConfigInvalid {
            path: self.config_path.clone(),
            message: message.to_string(),
        }
    }
}
