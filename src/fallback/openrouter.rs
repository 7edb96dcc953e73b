//! OpenRouter (OpenAI-compatible) fallback client.

use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use super::{FallbackError, FallbackService};
use crate::config::FallbackConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Sends unmatched questions to a chat-completions endpoint:
/// POST `{base_url}/chat/completions` with a Bearer token and a single user
/// message.
pub struct OpenRouterClient {
    /// Base URL (e.g., "https://openrouter.ai/api/v1")
    base_url: String,
    model: String,
    /// Absent when the credential was never provisioned
    api_key: Option<String>,
    /// Name of the variable the key is read from, for error messages
    api_key_env: String,
    timeout: Duration,
    /// Shared HTTP client for connection pooling
    client: Arc<Client>,
}

impl OpenRouterClient {
    pub fn new(
        base_url: String,
        model: String,
        api_key: Option<String>,
        api_key_env: String,
        timeout: Duration,
        client: Arc<Client>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            api_key_env,
            timeout,
            client,
        }
    }

    /// Build a client from configuration, reading the key from the environment.
    pub fn from_config(config: &FallbackConfig, client: Arc<Client>) -> Self {
        Self::new(
            config.base_url.clone(),
            config.model.clone(),
            config.api_key(),
            config.api_key_env.clone(),
            Duration::from_secs(config.timeout_seconds),
            client,
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl FallbackService for OpenRouterClient {
    fn model(&self) -> &str {
        &self.model
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, question: &str) -> Result<String, FallbackError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| FallbackError::MissingCredential(self.api_key_env.clone()))?;

        let request = ChatCompletionRequest::single_turn(&self.model, question);
        let timeout_ms = self.timeout.as_millis() as u64;

        tracing::debug!(model = %self.model, url = %self.endpoint(), "Calling fallback service");

        let response = self
            .client
            .post(self.endpoint())
            .header("authorization", format!("Bearer {}", api_key))
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FallbackError::Timeout(timeout_ms)
                } else {
                    FallbackError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FallbackError::Upstream {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            FallbackError::InvalidResponse(format!("Failed to parse completion response: {}", e))
        })?;

        if let Some(error) = completion.error {
            let code = error
                .code
                .as_ref()
                .and_then(|c| c.as_u64())
                .and_then(|c| u16::try_from(c).ok())
                .unwrap_or(status.as_u16());
            return Err(FallbackError::Upstream {
                status: code,
                message: error.message,
            });
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or(FallbackError::EmptyResponse)
    }
}
