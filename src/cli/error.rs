//! Error types for CLI operations

use crate::account::{AccountError, ValidationError};
use crate::chat::SubmitError;
use crate::session::SessionError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur during CLI command execution
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A form was rejected
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Session store failure
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// A chat message was refused
    #[error("Message not sent: {0}")]
    Submit(#[from] SubmitError),

    /// Transcript or other glue failure
    #[error("Execution error: {0}")]
    ExecutionError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<AccountError> for CliError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Validation(e) => CliError::Validation(e),
            AccountError::Session(e) => CliError::Session(e),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ExecutionError(format!("{:#}", err))
    }
}
