//! Request and response shapes of the completion boundary.

use serde::{Deserialize, Serialize};

/// A single prompt sent to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The user's message, unmodified.
    pub prompt: String,
}

impl CompletionRequest {
    /// Create a request for the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// The single text completion returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Answer text; may be empty.
    pub response: String,
}

impl CompletionResponse {
    /// Wrap a completion text.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    /// True when the completion carries no text at all.
    pub fn is_empty(&self) -> bool {
        self.response.is_empty()
    }
}
