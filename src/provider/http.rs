//! Plain JSON completion endpoint: `{prompt}` in, `{response}` out.

use crate::provider::error::{ProviderError, ProviderResult};
use crate::provider::traits::CompletionProvider;
use crate::provider::types::{CompletionRequest, CompletionResponse};
use std::time::Duration;

/// Provider for a self-hosted completion endpoint.
#[derive(Debug, Clone)]
pub struct HttpCompletionProvider {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpCompletionProvider {
    /// Create a provider posting to `endpoint` with the given request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> ProviderResult<Self> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(ProviderError::config("completion endpoint is empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    /// Endpoint requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl CompletionProvider for HttpCompletionProvider {
    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<CompletionResponse> {
        tracing::debug!(endpoint = %self.endpoint, "posting completion request");

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                code: status.as_u16(),
                body: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let reply: CompletionResponse = response.json().await?;
        if reply.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(reply)
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
