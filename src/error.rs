// std imports
use std::io::{self, IsTerminal, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("file {filename:?} not found")]
    FileNotFound { filename: String },
    #[error("pattern has {count} '*' wildcards, the limit is {limit}")]
    TooManyWildcards { count: usize, limit: usize },
}

impl Error {
    /// Reports the error to stderr.
    pub fn log(&self) {
        let stderr = io::stderr();
        let color = stderr.is_terminal();
        self.log_to(&mut stderr.lock(), color).ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W, color: bool) -> io::Result<()> {
        if color {
            writeln!(target, "{} {}", "error:".bright_red().bold(), self)
        } else {
            writeln!(target, "error: {}", self)
        }
    }

    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
