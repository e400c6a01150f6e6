//! Configuration management.
//!
//! This module provides configuration loading through TOML files and
//! environment variable management via `.env` files.
//!
//! # Example
//!
//! ```no_run
//! use career_compass::config::{ConfigurationLoader, EnvironmentLoader};
//! use std::path::Path;
//!
//! let env = EnvironmentLoader::new(None);
//! let loader = ConfigurationLoader::new(Some(Path::new("config/compass.toml"))).unwrap();
//!
//! println!("Provider: {}", loader.config.provider.kind);
//! println!("API key set: {}", env.gemini_api_key().is_some());
//! ```

pub mod config;
pub mod environment;

// Re-export main types for convenience
pub use self::config::{
    AssistantConfig, Configuration, ConfigurationLoader, LoggingConfig, ProviderConfig,
    ProviderKind, SessionConfig, DEFAULT_GREETING, DEFAULT_PREAMBLE,
};
pub use self::environment::EnvironmentLoader;
