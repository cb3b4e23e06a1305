pub mod commands;
pub mod parser;

pub use parser::Cli;

use crate::config::{Config, ConfigManager};
use crate::ui::Logger;
use crate::utils::{GitridError, Result};
use commands::prune::{self, PruneOutcome};
use std::path::PathBuf;

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub working_directory: PathBuf,
    pub assume_yes: bool,
    pub remote: String,
    pub logger: Logger,
}

impl RunContext {
    pub fn from_config(working_directory: PathBuf, config: &Config) -> Self {
        Self {
            working_directory,
            assume_yes: config.should_assume_yes(),
            remote: config.remote().to_string(),
            logger: logger_for(config),
        }
    }
}

/// Plain text is forced when stdout is not a terminal or `NO_COLOR` is set.
pub fn logger_for(config: &Config) -> Logger {
    let plain_text = config.is_plain_text()
        || std::env::var_os("NO_COLOR").is_some()
        || !atty::is(atty::Stream::Stdout);
    Logger::new(config.log_level(), plain_text)
}

/// Load configuration, merge command-line flags and resolve the directory.
pub fn prepare(cli: &Cli) -> std::result::Result<RunContext, (Logger, GitridError)> {
    let mut fallback = Config::default();
    cli.apply_to(&mut fallback);

    let mut config = ConfigManager::load().map_err(|e| (logger_for(&fallback), e))?;
    cli.apply_to(&mut config);
    let logger = logger_for(&config);

    let current_dir = std::env::current_dir().map_err(|e| (logger, GitridError::from(e)))?;
    let working_directory = cli
        .resolve_working_directory(&current_dir)
        .map_err(|e| (logger, e))?;

    Ok(RunContext::from_config(working_directory, &config))
}

pub async fn execute_command(context: &RunContext) -> Result<PruneOutcome> {
    prune::execute(context).await
}

/// Human-readable description of a fatal error, naming the failing command
/// and carrying its raw output.
pub fn failure_message(error: &GitridError) -> String {
    match error {
        GitridError::RepositoryValidation {
            directory,
            command,
            output,
        } => format!(
            "{{color:red}}Failed{{color}} Could not get repository URL for folder '{{color:cyan}}{}{{color}}' ({{color:yellow}}{}{{color}})\n{{color:red}}{}",
            directory, command, output
        ),
        GitridError::CommandFailure { command, output } => format!(
            "{{color:red}}Failed{{color}} Command did not succeed ({{color:yellow}}{}{{color}})\n{{color:red}}{}",
            command, output
        ),
        GitridError::ProcessLaunch { command, message } => format!(
            "{{color:red}}Failed{{color}} Could not start ({{color:yellow}}{}{{color}})\n{{color:red}}{}",
            command, message
        ),
        GitridError::PathNotFound { path } => format!(
            "{{color:red}}Failed{{color}} Path not found '{{color:yellow}}{}{{color}}'",
            path
        ),
        other => format!("{{color:red}}Failed{{color}} {}", other),
    }
}
