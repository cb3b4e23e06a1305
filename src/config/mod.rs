use crate::ui::LogLevel;
use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub prune: PruneConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default)]
    pub plain_text: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PruneConfig {
    #[serde(default)]
    pub assume_yes: bool,
    #[serde(default = "defaults::default_remote")]
    pub remote: String,
}

impl Default for Config {
    fn default() -> Self {
        defaults::default_config()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        defaults::default_output_config()
    }
}

impl Default for PruneConfig {
    fn default() -> Self {
        defaults::default_prune_config()
    }
}

impl Config {
    pub fn validate(&self) -> crate::utils::Result<()> {
        validation::validate_config(self)
    }

    pub fn remote(&self) -> &str {
        &self.prune.remote
    }

    pub fn log_level(&self) -> LogLevel {
        self.output.log_level
    }

    pub fn is_plain_text(&self) -> bool {
        self.output.plain_text
    }

    pub fn should_assume_yes(&self) -> bool {
        self.prune.assume_yes
    }
}
