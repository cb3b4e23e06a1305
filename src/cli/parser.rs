use crate::config::Config;
use crate::ui::LogLevel;
use crate::utils::{GitridError, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gitrid")]
#[command(about = "\"Git rid\" of those lingering local branches")]
#[command(
    version,
    long_about = "Finds local branches that no longer exist on the remote and offers to delete them. \
                  Branches that are checked out or have unpushed commits are never deleted."
)]
pub struct Cli {
    /// Git directory to check instead of the current working directory
    pub folder: Option<PathBuf>,

    /// Delete found zombie branches without asking for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Log in more detail what is done
    #[arg(long, conflicts_with = "silent")]
    pub verbose: bool,

    /// Log nothing but errors (must be used together with --yes)
    #[arg(long, requires = "yes")]
    pub silent: bool,

    /// Strip console colors from all output
    #[arg(long)]
    pub plain_text: bool,
}

impl Cli {
    /// Apply command-line flags on top of the file configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if self.yes {
            config.prune.assume_yes = true;
        }
        if self.verbose {
            config.output.log_level = LogLevel::Verbose;
        }
        if self.silent {
            config.output.log_level = LogLevel::Error;
        }
        if self.plain_text {
            config.output.plain_text = true;
        }
    }

    /// Absolute, canonical path of the directory to inspect.
    pub fn resolve_working_directory(&self, current_dir: &Path) -> Result<PathBuf> {
        let candidate = match &self.folder {
            Some(folder) => current_dir.join(folder),
            None => current_dir.to_path_buf(),
        };

        if !candidate.exists() {
            return Err(GitridError::path_not_found(
                candidate.to_string_lossy().to_string(),
            ));
        }

        Ok(candidate.canonicalize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::default_config;
    use clap::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gitrid"]).unwrap();
        assert!(cli.folder.is_none());
        assert!(!cli.yes);
        assert!(!cli.verbose);
        assert!(!cli.silent);
        assert!(!cli.plain_text);
    }

    #[test]
    fn test_folder_and_flags() {
        let cli =
            Cli::try_parse_from(["gitrid", "../repo", "-y", "--verbose", "--plain-text"]).unwrap();
        assert_eq!(cli.folder, Some(PathBuf::from("../repo")));
        assert!(cli.yes);
        assert!(cli.verbose);
        assert!(cli.plain_text);
    }

    #[test]
    fn test_verbose_and_silent_conflict() {
        let err = Cli::try_parse_from(["gitrid", "--verbose", "--silent", "--yes"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_silent_requires_yes() {
        let err = Cli::try_parse_from(["gitrid", "--silent"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        assert!(Cli::try_parse_from(["gitrid", "--silent", "--yes"]).is_ok());
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(Cli::try_parse_from(["gitrid", "one", "two"]).is_err());
    }

    #[test]
    fn test_apply_to_overrides_config() {
        let cli = Cli::try_parse_from(["gitrid", "--silent", "--yes", "--plain-text"]).unwrap();
        let mut config = default_config();
        cli.apply_to(&mut config);

        assert!(config.prune.assume_yes);
        assert_eq!(config.output.log_level, LogLevel::Error);
        assert!(config.output.plain_text);
    }

    #[test]
    fn test_apply_to_keeps_config_when_flags_absent() {
        let cli = Cli::try_parse_from(["gitrid"]).unwrap();
        let mut config = default_config();
        config.prune.assume_yes = true;
        config.output.log_level = LogLevel::Verbose;
        cli.apply_to(&mut config);

        assert!(config.prune.assume_yes);
        assert_eq!(config.output.log_level, LogLevel::Verbose);
    }

    #[test]
    fn test_resolve_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("repo")).unwrap();

        let cli = Cli::try_parse_from(["gitrid", "repo"]).unwrap();
        let resolved = cli.resolve_working_directory(temp_dir.path()).unwrap();
        assert_eq!(resolved, temp_dir.path().join("repo").canonicalize().unwrap());

        let cli = Cli::try_parse_from(["gitrid"]).unwrap();
        let resolved = cli.resolve_working_directory(temp_dir.path()).unwrap();
        assert_eq!(resolved, temp_dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let cli = Cli::try_parse_from(["gitrid", "missing"]).unwrap();

        let err = cli.resolve_working_directory(temp_dir.path()).unwrap_err();
        assert!(matches!(err, GitridError::PathNotFound { .. }));
        assert!(err.to_string().contains("missing"));
    }
}
