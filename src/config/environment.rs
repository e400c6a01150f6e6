//! Environment variable loading and management.
//!
//! Secrets (the Gemini API key) never live in the TOML file; they come from
//! the process environment, optionally seeded from a `.env` file.

use std::env;
use std::path::Path;

/// Loads environment variables from .env file and system environment.
#[derive(Debug, Clone)]
pub struct EnvironmentLoader {
    env_file: Option<String>,
}

impl EnvironmentLoader {
    /// Initialize the environment loader.
    ///
    /// # Arguments
    /// * `env_file` - Path to .env file. Only an explicit path is loaded, so
    ///   tests never pick up a stray `.env` from the working directory.
    pub fn new(env_file: Option<&Path>) -> Self {
        if let Some(path) = env_file {
            if path.exists() {
                if let Err(e) = dotenv::from_path(path) {
                    eprintln!("Warning: Failed to load .env file: {}", e);
                }
            }
        }

        Self {
            env_file: env_file.map(|p| p.to_string_lossy().to_string()),
        }
    }

    /// The `.env` file this loader was created with, if any.
    pub fn env_file(&self) -> Option<&str> {
        self.env_file.as_deref()
    }

    /// Provider override (`gemini`, `http`, `none`) from `COMPASS_PROVIDER`.
    pub fn compass_provider(&self) -> Option<String> {
        non_empty_var("COMPASS_PROVIDER")
    }

    /// API key for the Gemini provider.
    pub fn gemini_api_key(&self) -> Option<String> {
        non_empty_var("GEMINI_API_KEY")
    }

    /// Endpoint override for the plain HTTP provider.
    pub fn completion_endpoint(&self) -> Option<String> {
        non_empty_var("COMPASS_COMPLETION_ENDPOINT")
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Default for EnvironmentLoader {
    fn default() -> Self {
        Self::new(None)
    }
}
