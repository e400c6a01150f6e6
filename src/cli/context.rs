//! Command context: configuration, provider, transcript and session access.
//!
//! Commands only talk to a [`CommandContext`], so tests can run them against
//! a temporary directory and a scripted provider.

use crate::chat::ChatPanel;
use crate::cli::error::{CliError, CliResult};
use crate::config::{Configuration, ConfigurationLoader, EnvironmentLoader};
use crate::observability::Logger;
use crate::provider::{CompletionProvider, ProviderFactory};
use crate::session::{FileStore, SessionContext};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Provides context for CLI command execution
pub trait CommandContext {
    /// Loaded configuration.
    fn config(&self) -> &Configuration;

    /// Completion provider for new chat panels.
    fn provider(&self) -> Arc<dyn CompletionProvider>;

    /// Open the transcript logger configured under `[logging]`.
    fn logger(&self) -> CliResult<Logger> {
        let logging = &self.config().logging;
        Logger::new(
            Some(Path::new(&logging.log_file)),
            Some(logging.log_level.as_str()),
        )
        .map_err(CliError::from)
    }

    /// Session context over the configured store file.
    fn session(&self) -> SessionContext<FileStore> {
        SessionContext::new(FileStore::new(PathBuf::from(
            &self.config().session.store_path,
        )))
    }

    /// New chat panel with the configured greeting and a transcript.
    fn open_panel(&self) -> CliResult<ChatPanel> {
        Ok(ChatPanel::builder(self.provider())
            .greeting(self.config().assistant.greeting.clone())
            .logger(self.logger()?)
            .build())
    }
}

/// Context built from the config file and the environment.
pub struct CompassContext {
    loader: ConfigurationLoader,
    provider: Arc<dyn CompletionProvider>,
}

impl CompassContext {
    /// Load configuration and pick the completion provider.
    pub fn load(config_path: Option<&Path>, env_file: Option<&Path>) -> CliResult<Self> {
        let env = EnvironmentLoader::new(env_file);
        let loader = ConfigurationLoader::new(config_path)
            .map_err(|e| CliError::ConfigError(format!("{:#}", e)))?;
        let provider = ProviderFactory::create(&loader.config.provider, &env);

        tracing::debug!(
            config = %loader.config_path.display(),
            provider = provider.provider_name(),
            "command context ready"
        );

        Ok(Self { loader, provider })
    }

    /// Path the configuration was looked up at.
    pub fn config_path(&self) -> &Path {
        &self.loader.config_path
    }
}

impl CommandContext for CompassContext {
    fn config(&self) -> &Configuration {
        &self.loader.config
    }

    fn provider(&self) -> Arc<dyn CompletionProvider> {
        self.provider.clone()
    }
}
