//! Role session flag.
//!
//! A [`SessionContext`] keeps the signed-in role in a [`SessionStore`] and
//! routes visitors to the dashboard of that role.

pub mod context;
pub mod error;
pub mod role;
pub mod store;

pub use context::{Route, SessionContext, USER_DATA_KEY, USER_ROLE_KEY};
pub use error::{SessionError, SessionResult};
pub use role::Role;
pub use store::{FileStore, MemoryStore, SessionStore};
