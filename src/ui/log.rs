//! Leveled console logger.
//!
//! Every line is prefixed with `[gitrid] H:MM:SS`. Messages may carry
//! `{color:NAME}` markup which is rendered or stripped depending on the
//! plain-text flag.

use super::colorize::colorize;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Verbose,
    Info,
    Error,
    Fail,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Verbose => "verbose",
            LogLevel::Info => "info",
            LogLevel::Error => "error",
            LogLevel::Fail => "fail",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    level: LogLevel,
    plain_text: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info, false)
    }
}

impl Logger {
    pub fn new(level: LogLevel, plain_text: bool) -> Self {
        Self { level, plain_text }
    }

    /// A logger that only lets `fail` through. Used by tests and library callers
    /// that do not want console noise.
    pub fn quiet() -> Self {
        Self::new(LogLevel::Fail, true)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn is_plain_text(&self) -> bool {
        self.plain_text
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn verbose(&self, message: impl AsRef<str>) {
        self.write(LogLevel::Verbose, message.as_ref());
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.write(LogLevel::Info, message.as_ref());
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.write(LogLevel::Error, message.as_ref());
    }

    /// Log and terminate the process with exit code 1.
    pub fn fail(&self, message: impl AsRef<str>) -> ! {
        self.write(LogLevel::Fail, message.as_ref());
        std::process::exit(1)
    }

    /// Empty line at info level.
    pub fn blank(&self) {
        if self.enabled(LogLevel::Info) {
            println!();
        }
    }

    pub fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%-H:%M:%S");
        format!(
            "[gitrid] {} {}",
            timestamp,
            colorize(message, self.plain_text)
        )
    }

    fn write(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let line = self.format_line(message);
        match level {
            LogLevel::Verbose | LogLevel::Info => println!("{}", line),
            LogLevel::Error | LogLevel::Fail => eprintln!("{}", line),
        }
    }
}
