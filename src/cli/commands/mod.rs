//! CLI command implementations
//!
//! Commands work through [`CommandContext`](crate::cli::CommandContext) and
//! write to any `std::io::Write`, so they run the same against a terminal and
//! a test buffer.

pub mod account;
pub mod chat;
pub mod text;
