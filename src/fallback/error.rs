//! Error types for fallback service calls.

use thiserror::Error;

/// Errors that can occur while asking the conversational model.
#[derive(Error, Debug)]
pub enum FallbackError {
    /// No API key was provisioned for the service.
    #[error("API key not configured (set {0})")]
    MissingCredential(String),

    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded deadline.
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// Service returned an error response (4xx, 5xx, or an error body).
    #[error("Service error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Response doesn't match the chat-completions format.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Response parsed but carried no message text.
    #[error("Response contained no answer")]
    EmptyResponse,
}
