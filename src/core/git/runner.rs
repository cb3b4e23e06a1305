//! The single point where gitrid talks to the `git` binary.

use crate::ui::Logger;
use crate::utils::error::{GitridError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

pub const GIT_BINARY: &str = "git";

/// Exit code and combined stdout/stderr of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub output: String,
}

impl CommandOutput {
    pub fn new(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs git commands bound to one working directory.
///
/// A non-zero exit code is returned as data; only a failure to launch the
/// process is an error.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[&str]) -> Result<CommandOutput>;

    fn working_directory(&self) -> &Path;
}

#[derive(Debug, Clone)]
pub struct GitCommandRunner {
    binary: String,
    working_directory: PathBuf,
    logger: Logger,
}

impl GitCommandRunner {
    pub fn new(working_directory: impl Into<PathBuf>, logger: Logger) -> Self {
        Self {
            binary: GIT_BINARY.to_string(),
            working_directory: working_directory.into(),
            logger,
        }
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Full argument list as passed to git, with `-C <dir>` injected unless
    /// the caller already chose a directory.
    pub fn build_args(&self, args: &[&str]) -> Vec<String> {
        let mut full_args = Vec::with_capacity(args.len() + 2);
        if !args.contains(&"-C") {
            full_args.push("-C".to_string());
            full_args.push(self.working_directory.to_string_lossy().to_string());
        }
        full_args.extend(args.iter().map(|arg| arg.to_string()));
        full_args
    }
}

#[async_trait]
impl CommandRunner for GitCommandRunner {
    async fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let full_args = self.build_args(args);
        let command_line = format!("{} {}", self.binary, full_args.join(" "));
        self.logger.verbose(format!("{{color:yellow}}{}", command_line));

        let output = Command::new(&self.binary)
            .args(&full_args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                self.logger.verbose(format!(
                    "{{color:red}}ERR{{color}} Could not launch {}: {}",
                    self.binary, e
                ));
                GitridError::process_launch(command_line.clone(), e.to_string())
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        // Killed by a signal.
        let exit_code = output.status.code().unwrap_or(-1);

        if exit_code == 0 {
            self.logger.verbose(format!(
                "{{color:green}}OK{{color}} Child process exited with code ({})",
                exit_code
            ));
        } else {
            self.logger.verbose(format!(
                "{{color:red}}ERR{{color}} Child process exited with code ({})",
                exit_code
            ));
        }
        if !combined.is_empty() {
            self.logger.verbose(&combined);
        }

        Ok(CommandOutput::new(exit_code, combined))
    }

    fn working_directory(&self) -> &Path {
        &self.working_directory
    }
}
