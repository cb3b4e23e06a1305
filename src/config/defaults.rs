use super::{Config, OutputConfig, PruneConfig};
use crate::core::git::DEFAULT_REMOTE;
use crate::ui::LogLevel;
use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "GITRID_CONFIG_PATH";

pub fn default_config() -> Config {
    Config {
        output: default_output_config(),
        prune: default_prune_config(),
    }
}

pub fn default_output_config() -> OutputConfig {
    OutputConfig {
        log_level: default_log_level(),
        plain_text: false,
    }
}

pub fn default_prune_config() -> PruneConfig {
    PruneConfig {
        assume_yes: false,
        remote: default_remote(),
    }
}

pub fn default_log_level() -> LogLevel {
    LogLevel::Info
}

pub fn default_remote() -> String {
    DEFAULT_REMOTE.to_string()
}

pub fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "gitrid") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("gitrid")
    }
}

pub fn get_config_file_path() -> PathBuf {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
