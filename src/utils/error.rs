use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitridError {
    #[error("Not a usable repository '{directory}' ({command}): {output}")]
    RepositoryValidation {
        directory: String,
        command: String,
        output: String,
    },

    #[error("Could not launch '{command}': {message}")]
    ProcessLaunch { command: String, message: String },

    #[error("Command failed ({command}): {output}")]
    CommandFailure { command: String, output: String },

    #[error("Could not delete branch '{branch}': {output}")]
    Deletion { branch: String, output: String },

    #[error("Path not found '{path}'")]
    PathNotFound { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, GitridError>;

impl GitridError {
    pub fn repository_validation(
        directory: impl Into<String>,
        command: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self::RepositoryValidation {
            directory: directory.into(),
            command: command.into(),
            output: output.into(),
        }
    }

    pub fn process_launch(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProcessLaunch {
            command: command.into(),
            message: message.into(),
        }
    }

    pub fn command_failure(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self::CommandFailure {
            command: command.into(),
            output: output.into(),
        }
    }

    pub fn deletion(branch: impl Into<String>, output: impl Into<String>) -> Self {
        Self::Deletion {
            branch: branch.into(),
            output: output.into(),
        }
    }

    pub fn path_not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
