//! Test utilities and mock implementations for CLI testing
//!
//! Provides a command context rooted in a temporary directory, for unit
//! testing CLI commands without touching the user's data directory.

pub mod mocks;

pub use mocks::{MockCommandContext, ScriptedProvider};
