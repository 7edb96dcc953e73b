//! Fallback service configuration

use serde::{Deserialize, Serialize};

/// Conversational model used when no dataset rule matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`)
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub timeout_seconds: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "deepseek/deepseek-chat-v3-0324:free".to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            timeout_seconds: 120,
        }
    }
}

impl FallbackConfig {
    /// Read the API key from the configured environment variable.
    ///
    /// Empty values count as absent.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
