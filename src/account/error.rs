//! Error types for account forms.

use crate::session::SessionError;
use thiserror::Error;

/// Result type for account operations
pub type AccountResult<T> = Result<T, AccountError>;

/// A form that cannot be submitted. The message is shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is blank.
    #[error("Please fill in all fields")]
    MissingFields,

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// A counselor picked no specialization.
    #[error("Please select at least one specialization")]
    MissingSpecialization,

    /// An admin used a non-institutional email address.
    #[error("Please use an institutional email address (.edu, .ac., etc.)")]
    InstitutionalEmailRequired,
}

/// Failure of a register or login operation.
#[derive(Error, Debug)]
pub enum AccountError {
    /// The form was rejected; nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The session store failed.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}
