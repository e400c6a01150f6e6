//! Mock implementations for testing

use crate::cli::context::CommandContext;
use crate::config::{Configuration, ConfigurationLoader};
use crate::provider::{
    CompletionProvider, CompletionRequest, CompletionResponse, ProviderError, ProviderResult,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Provider that answers every prompt with a fixed reply, or fails when it
/// has none, and records the prompts it saw.
#[derive(Default)]
pub struct ScriptedProvider {
    /// Answer to give; `None` fails every call.
    pub reply: Option<String>,
    /// Prompts received so far.
    pub prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<CompletionResponse> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        match &self.reply {
            Some(reply) => Ok(CompletionResponse::new(reply.clone())),
            None => Err(ProviderError::Network("connection refused".to_string())),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

/// Command context whose transcript and session store live in a temp dir.
pub struct MockCommandContext {
    /// Configuration pointing into the temp dir.
    pub config: Configuration,
    /// Provider handed to every panel.
    pub provider: Arc<ScriptedProvider>,
    _dir: TempDir,
}

impl MockCommandContext {
    /// Context whose provider always fails.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Context whose provider always answers `reply`.
    pub fn with_reply(reply: &str) -> Self {
        Self::build(Some(reply.to_string()))
    }

    fn build(reply: Option<String>) -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = ConfigurationLoader::get_default_config();
        config.logging.log_file = dir
            .path()
            .join("transcript.md")
            .to_string_lossy()
            .to_string();
        config.session.store_path = dir
            .path()
            .join("session.json")
            .to_string_lossy()
            .to_string();

        Self {
            config,
            provider: Arc::new(ScriptedProvider {
                reply,
                prompts: Arc::new(Mutex::new(Vec::new())),
            }),
            _dir: dir,
        }
    }

    /// Prompts the provider has been asked so far.
    pub fn prompts(&self) -> Vec<String> {
        self.provider.prompts.lock().unwrap().clone()
    }
}

impl Default for MockCommandContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandContext for MockCommandContext {
    fn config(&self) -> &Configuration {
        &self.config
    }

    fn provider(&self) -> Arc<dyn CompletionProvider> {
        self.provider.clone()
    }
}
