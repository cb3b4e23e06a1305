pub mod cli;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use crate::config::Config;
pub use crate::core::git::{
    BranchClassifier, CommandRunner, GitCommandRunner, ZombieCandidate, ZombieReport,
};
pub use crate::ui::{LogLevel, Logger};
pub use crate::utils::{GitridError, Result};
