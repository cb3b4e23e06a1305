use super::Config;
use crate::ui::LogLevel;
use crate::utils::{GitridError, Result};

pub fn validate_config(config: &Config) -> Result<()> {
    if config.output.log_level == LogLevel::Fail {
        return Err(GitridError::config_error(
            "log_level must be one of verbose, info or error",
        ));
    }

    validate_remote_name(&config.prune.remote)
}

pub fn validate_remote_name(remote: &str) -> Result<()> {
    if remote.is_empty() {
        return Err(GitridError::config_error("Remote name cannot be empty"));
    }

    if remote.chars().any(char::is_whitespace) {
        return Err(GitridError::config_error(format!(
            "Remote name '{}' cannot contain whitespace",
            remote
        )));
    }

    if remote.starts_with('-') {
        return Err(GitridError::config_error(format!(
            "Remote name '{}' cannot start with '-'",
            remote
        )));
    }

    Ok(())
}
