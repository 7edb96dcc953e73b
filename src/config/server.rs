//! HTTP server configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where `vitalis serve` listens.
///
/// The default port matches the one the dashboard has always used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on a whole request, fallback call included
    pub request_timeout_seconds: u64,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
            request_timeout_seconds: 300,
        }
    }
}
