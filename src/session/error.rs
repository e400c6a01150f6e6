//! Error types for the session store.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised while reading or writing session flags.
#[derive(Error, Debug)]
pub enum SessionError {
    /// IO error while touching the store file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Flag values could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store file exists but is not a JSON object of strings
    #[error("Corrupted session store {path}: {message}")]
    Corrupted {
        /// Store file.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// Generic storage error
    #[error("Storage error: {message}")]
    Storage {
        /// Description.
        message: String,
    },
}

impl SessionError {
    /// Create a storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
