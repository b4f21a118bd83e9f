//! CLI error types.

use std::error::Error as _;
use std::fmt::Write;

use forum_board::BoardError;
use forum_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("{0}")]
    Validation(String),
}

impl CliError {
    /// One-line message with every underlying cause appended.
    pub(crate) fn report(&self) -> String {
        let mut message = format!("Error: {self}");
        let mut source = self.source();
        while let Some(cause) = source {
            write!(message, ": {cause}").unwrap();
            source = cause.source();
        }
        message
    }
}
