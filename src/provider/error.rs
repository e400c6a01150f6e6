//! Error types for completion providers.

use thiserror::Error;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Reasons a remote completion did not produce a usable answer.
///
/// None of these reach the user; the chat panel answers from its canned
/// templates instead.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport failure: DNS, connect, TLS, timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("HTTP {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The body was not the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The answer was present but empty.
    #[error("Empty response")]
    EmptyResponse,

    /// Remote completions are switched off.
    #[error("Remote completion disabled: {0}")]
    Disabled(String),

    /// The provider could not be built from configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The provider panicked while serving the request.
    #[error("Provider panicked: {0}")]
    Panicked(String),
}

impl ProviderError {
    /// Create a malformed response error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Short machine-friendly tag, used in transcripts.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::MalformedResponse(_) => "malformed",
            Self::EmptyResponse => "empty",
            Self::Disabled(_) => "disabled",
            Self::Config(_) => "config",
            Self::Panicked(_) => "panicked",
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::Status {
            code: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: overloaded");
        assert_eq!(err.kind(), "status");

        let err = ProviderError::malformed("no candidates");
        assert!(err.to_string().contains("no candidates"));
        assert_eq!(err.kind(), "malformed");

        assert_eq!(ProviderError::EmptyResponse.to_string(), "Empty response");
    }
}
