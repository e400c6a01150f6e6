//! Remote completion boundary.
//!
//! This module provides the provider trait, its error type, the Gemini and
//! plain-HTTP implementations, and a factory that picks one from
//! configuration.

pub mod error;
pub mod factory;
pub mod gemini;
pub mod http;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types
pub use error::{ProviderError, ProviderResult};
pub use factory::{ProviderFactory, ProviderOverrides};
pub use gemini::{GeminiProvider, GenerationConfig};
pub use http::HttpCompletionProvider;
pub use traits::{CompletionProvider, DisabledProvider};
pub use types::{CompletionRequest, CompletionResponse};
