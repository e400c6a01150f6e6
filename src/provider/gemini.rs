//! Google generative-language (`generateContent`) provider.

use crate::config::ProviderConfig;
use crate::provider::error::{ProviderError, ProviderResult};
use crate::provider::traits::CompletionProvider;
use crate::provider::types::{CompletionRequest, CompletionResponse};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MAX_ERROR_BODY: usize = 512;

/// Sampling options sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    pub temperature: f32,
    /// Top-k cutoff.
    pub top_k: u32,
    /// Nucleus sampling cutoff.
    pub top_p: f32,
    /// Upper bound on answer length.
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Provider backed by the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    preamble: String,
    generation: GenerationConfig,
}

impl GeminiProvider {
    /// Create a provider with default model, sampling and preamble.
    pub fn new(api_key: impl Into<String>) -> ProviderResult<Self> {
        let config = ProviderConfig::default();
        Self::from_config(&config, api_key)
    }

    /// Create a provider from the `[provider]` configuration section.
    pub fn from_config(config: &ProviderConfig, api_key: impl Into<String>) -> ProviderResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ProviderError::config("Gemini API key is empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            preamble: config.preamble.clone(),
            generation: GenerationConfig {
                temperature: config.temperature,
                top_k: config.top_k,
                top_p: config.top_p,
                max_output_tokens: config.max_output_tokens,
            },
        })
    }

    /// Point the provider at another host (used against local stand-ins).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Model the requests are sent to.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn prompt_text(&self, prompt: &str) -> String {
        format!("{}{}", self.preamble, prompt)
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
fn extract_text(body: GenerateContentResponse) -> ProviderResult<String> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::malformed("response has no candidates"))?;

    let content = candidate
        .content
        .ok_or_else(|| ProviderError::malformed("candidate has no content"))?;

    content
        .parts
        .into_iter()
        .next()
        .and_then(|part| part.text)
        .ok_or_else(|| ProviderError::malformed("candidate content has no text part"))
}

#[async_trait::async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<CompletionResponse> {
        let text = self.prompt_text(&request.prompt);
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &text }],
            }],
            generation_config: &self.generation,
        };

        tracing::debug!(model = %self.model, "sending generateContent request");

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|i| body.is_char_boundary(*i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(ProviderError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = extract_text(parsed)?;
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(CompletionResponse::new(text))
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::test_support::serve_once;

    #[test]
    fn test_request_body_shape() {
        let generation = GenerationConfig::default();
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hello" }],
            }],
            generation_config: &generation,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn test_extract_text_paths() {
        let ok: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "Focus on SQL."}]}}]
        }))
        .unwrap();
        assert_eq!(extract_text(ok).unwrap(), "Focus on SQL.");

        let no_candidates: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(matches!(
            extract_text(no_candidates),
            Err(ProviderError::MalformedResponse(_))
        ));

        let no_parts: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": []}}]
        }))
        .unwrap();
        assert!(extract_text(no_parts).is_err());
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(
            GeminiProvider::new("  "),
            Err(ProviderError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_complete_against_local_server() {
        let body = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "Negotiate on total compensation."}]}}]
        })
        .to_string();
        let (base_url, server) = serve_once("200 OK", body).await;

        let provider = GeminiProvider::new("test-key").unwrap().with_base_url(base_url);
        let reply = provider
            .complete(&CompletionRequest::new("salary tips"))
            .await
            .unwrap();
        assert_eq!(reply.response, "Negotiate on total compensation.");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/gemini-1.5-flash:generateContent?key=test-key"));
        assert!(request.contains("You are a career advisor assistant."));
        assert!(request.contains("salary tips"));
    }

    #[tokio::test]
    async fn test_error_status_is_a_failure() {
        let (base_url, _server) =
            serve_once("403 Forbidden", r#"{"error":{"message":"bad key"}}"#.to_string()).await;

        let provider = GeminiProvider::new("bad-key").unwrap().with_base_url(base_url);
        let err = provider
            .complete(&CompletionRequest::new("hello"))
            .await
            .unwrap_err();

        match err {
            ProviderError::Status { code, body } => {
                assert_eq!(code, 403);
                assert!(body.contains("bad key"));
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_text_is_a_failure() {
        let body = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": ""}]}}]
        })
        .to_string();
        let (base_url, _server) = serve_once("200 OK", body).await;

        let provider = GeminiProvider::new("test-key").unwrap().with_base_url(base_url);
        let err = provider
            .complete(&CompletionRequest::new("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResponse));
    }
}
