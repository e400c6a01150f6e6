//! Observability utilities.
//!
//! Conversation transcripts are written as markdown by [`Logger`];
//! diagnostics go through `tracing` and are rendered by whatever subscriber
//! the host installs.
//!
//! # Example
//!
//! ```no_run
//! use career_compass::observability::Logger;
//!
//! let logger = Logger::new(None, Some("DEBUG")).unwrap();
//! logger.log_session_start("panel-1", "gemini").unwrap();
//! logger.log_user_message(2, "How do I prepare for an interview?").unwrap();
//! logger.log_completion("done").unwrap();
//! ```

pub mod logger;

// Re-export main types for convenience
pub use logger::Logger;
