use super::defaults::{default_config, get_config_file_path};
use super::Config;
use crate::utils::{GitridError, Result};
use std::fs;
use std::path::Path;

pub struct ConfigManager;

impl ConfigManager {
    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Config> {
        Self::load_with_path(None)
    }

    pub fn load_with_path(config_path: Option<&Path>) -> Result<Config> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => get_config_file_path(),
        };

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(default_config())
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            GitridError::config_error(format!("Invalid config file '{}': {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
