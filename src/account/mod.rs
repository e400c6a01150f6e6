//! Role registration and login forms.
//!
//! Forms are validated before anything is stored; a successful submission
//! signs the user in on the given [`SessionContext`](crate::session::SessionContext).

pub mod error;
pub mod forms;
pub mod service;

pub use error::{AccountError, AccountResult, ValidationError};
pub use forms::{
    is_institutional_email, LoginForm, RegistrationForm, INSTITUTIONAL_EMAIL_MARKERS,
    SPECIALIZATION_OPTIONS,
};
pub use service::{login, logout, register};
