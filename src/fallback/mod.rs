//! External conversational fallback.
//!
//! When no dataset rule answers a question, the router forwards the original
//! text to a [`FallbackService`]. The production implementation is
//! [`OpenRouterClient`]; tests substitute their own.

use async_trait::async_trait;

pub mod error;
pub mod openrouter;
pub mod types;

pub use error::FallbackError;
pub use openrouter::OpenRouterClient;

/// A generative model that answers free-text questions.
///
/// Object-safe; used as `Arc<dyn FallbackService>`.
#[async_trait]
pub trait FallbackService: Send + Sync + 'static {
    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Whether a credential is available. Without one every call fails.
    fn is_configured(&self) -> bool {
        true
    }

    /// Ask the model a single question and return its answer text.
    ///
    /// Exactly one request is made; there is no retry.
    async fn complete(&self, question: &str) -> Result<String, FallbackError>;
}
