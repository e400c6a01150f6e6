//! Provider factory for creating completion providers from configuration.
//!
//! Selection order:
//! 1. `COMPASS_PROVIDER` environment override
//! 2. `[provider] kind` from the configuration file
//!
//! A provider that cannot be built (missing API key, empty endpoint) degrades
//! to [`DisabledProvider`] so the chat panel still answers from its templates.

use crate::config::{EnvironmentLoader, ProviderConfig, ProviderKind};
use crate::provider::gemini::GeminiProvider;
use crate::provider::http::HttpCompletionProvider;
use crate::provider::traits::{CompletionProvider, DisabledProvider};
use crate::provider::ProviderResult;
use std::sync::Arc;
use std::time::Duration;

/// Values the factory reads from the environment.
#[derive(Debug, Clone, Default)]
pub struct ProviderOverrides {
    /// Replaces `[provider] kind`.
    pub kind: Option<String>,
    /// API key for Gemini.
    pub api_key: Option<String>,
    /// Replaces `[provider] endpoint`.
    pub endpoint: Option<String>,
}

impl ProviderOverrides {
    /// Collect overrides from the environment loader.
    pub fn from_env(env: &EnvironmentLoader) -> Self {
        Self {
            kind: env.compass_provider(),
            api_key: env.gemini_api_key(),
            endpoint: env.completion_endpoint(),
        }
    }
}

/// Factory for creating completion providers
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider based on configuration and environment.
    pub fn create(
        config: &ProviderConfig,
        env: &EnvironmentLoader,
    ) -> Arc<dyn CompletionProvider> {
        Self::create_with(config, &ProviderOverrides::from_env(env))
    }

    /// Create a provider from configuration and explicit overrides.
    pub fn create_with(
        config: &ProviderConfig,
        overrides: &ProviderOverrides,
    ) -> Arc<dyn CompletionProvider> {
        let kind = Self::resolve_kind(config, overrides);

        match Self::try_create(kind, config, overrides) {
            Ok(provider) => {
                tracing::debug!(provider = provider.provider_name(), "completion provider ready");
                provider
            }
            Err(e) => {
                tracing::warn!("remote completions disabled: {}", e);
                Arc::new(DisabledProvider::new(e.to_string()))
            }
        }
    }

    fn resolve_kind(config: &ProviderConfig, overrides: &ProviderOverrides) -> ProviderKind {
        match overrides.kind.as_deref() {
            Some(raw) => raw.parse::<ProviderKind>().unwrap_or_else(|_| {
                tracing::warn!(
                    "unknown COMPASS_PROVIDER '{}', using '{}' from configuration",
                    raw,
                    config.kind
                );
                config.kind
            }),
            None => config.kind,
        }
    }

    fn try_create(
        kind: ProviderKind,
        config: &ProviderConfig,
        overrides: &ProviderOverrides,
    ) -> ProviderResult<Arc<dyn CompletionProvider>> {
        match kind {
            ProviderKind::Gemini => {
                let api_key = overrides.api_key.clone().ok_or_else(|| {
                    crate::provider::ProviderError::config("GEMINI_API_KEY is not set")
                })?;
                Ok(Arc::new(GeminiProvider::from_config(config, api_key)?))
            }
            ProviderKind::Http => {
                let endpoint = overrides
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| config.endpoint.clone());
                Ok(Arc::new(HttpCompletionProvider::new(
                    endpoint,
                    Duration::from_secs(config.timeout_seconds),
                )?))
            }
            ProviderKind::None => Ok(Arc::new(DisabledProvider::new(
                "remote completions turned off in configuration",
            ))),
        }
    }
}
