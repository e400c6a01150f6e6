//! Completion provider abstraction.
//!
//! The chat panel talks to exactly one remote service per round trip. This
//! trait hides whether that service is the Gemini API, a plain JSON endpoint
//! or nothing at all.

use crate::provider::error::{ProviderError, ProviderResult};
use crate::provider::types::{CompletionRequest, CompletionResponse};

/// Core trait that all completion providers must implement
///
/// # Example
///
/// ```ignore
/// use career_compass::provider::{CompletionProvider, CompletionRequest};
///
/// async fn ask(provider: &dyn CompletionProvider) {
///     match provider.complete(&CompletionRequest::new("How do I negotiate?")).await {
///         Ok(reply) => println!("{}", reply.response),
///         Err(e) => println!("falling back: {}", e),
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Request one text completion for the prompt.
    ///
    /// Implementations do not retry.
    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<CompletionResponse>;

    /// Provider identifier for logging (e.g., "gemini", "http").
    fn provider_name(&self) -> &str;
}

/// Provider that never answers; every request falls back to canned replies.
#[derive(Debug, Clone)]
pub struct DisabledProvider {
    reason: String,
}

impl DisabledProvider {
    /// Create a disabled provider, remembering why it is disabled.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Why remote completions are off.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Default for DisabledProvider {
    fn default() -> Self {
        Self::new("no remote provider configured")
    }
}

#[async_trait::async_trait]
impl CompletionProvider for DisabledProvider {
    async fn complete(&self, _request: &CompletionRequest) -> ProviderResult<CompletionResponse> {
        Err(ProviderError::Disabled(self.reason.clone()))
    }

    fn provider_name(&self) -> &str {
        "none"
    }
}
