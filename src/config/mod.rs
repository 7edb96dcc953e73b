//! Configuration module for Vitalis
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`VITALIS_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use vitalis::config::VitalisConfig;
//!
//! let config = VitalisConfig::default();
//! assert_eq!(config.server.port, 8501);
//!
//! let toml = r#"
//! [fallback]
//! model = "openai/gpt-4o-mini"
//! "#;
//! let config: VitalisConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.fallback.model, "openai/gpt-4o-mini");
//! assert_eq!(config.fallback.api_key_env, "OPENROUTER_API_KEY");
//! ```

pub mod dataset;
pub mod error;
pub mod fallback;
pub mod logging;
pub mod server;

pub use dataset::DatasetConfig;
pub use error::ConfigError;
pub use fallback::FallbackConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Example configuration written by `vitalis config init`.
pub const EXAMPLE_CONFIG: &str = include_str!("../../vitalis.example.toml");

/// Unified configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VitalisConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Reference dataset location
    pub dataset: DatasetConfig,
    /// Conversational fallback service
    pub fallback: FallbackConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl VitalisConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string().trim_end().to_string(),
        })
    }

    /// Load from `path` when it exists, otherwise start from defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(Some(path))
        } else {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply `VITALIS_*` environment variable overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any `VITALIS_*` key lookup.
    ///
    /// Unparseable values are ignored and the previous value is kept.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("VITALIS_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(host) = lookup("VITALIS_HOST") {
            self.server.host = host;
        }

        if let Some(level) = lookup("VITALIS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("VITALIS_LOG_FORMAT").and_then(|f| f.parse().ok()) {
            self.logging.format = format;
        }

        if let Some(path) = lookup("VITALIS_DATASET") {
            self.dataset.path = path.into();
        }
        if let Some(model) = lookup("VITALIS_MODEL") {
            self.fallback.model = model;
        }
        if let Some(url) = lookup("VITALIS_FALLBACK_URL") {
            self.fallback.base_url = url;
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::invalid("server.port", "port must be non-zero"));
        }
        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::invalid(
                "server.request_timeout_seconds",
                "timeout must be non-zero",
            ));
        }

        if self.dataset.path.as_os_str().is_empty() {
            return Err(ConfigError::invalid("dataset.path", "path cannot be empty"));
        }

        let url = self.fallback.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "fallback.base_url",
                format!("expected an http(s) URL, got '{}'", url),
            ));
        }
        if self.fallback.model.trim().is_empty() {
            return Err(ConfigError::invalid("fallback.model", "model cannot be empty"));
        }
        if self.fallback.timeout_seconds == 0 {
            return Err(ConfigError::invalid(
                "fallback.timeout_seconds",
                "timeout must be non-zero",
            ));
        }

        if let Some(level) = self.logging.invalid_level() {
            return Err(ConfigError::invalid(
                "logging.level",
                format!("unknown level '{}' (expected one of {:?})", level, logging::LOG_LEVELS),
            ));
        }

        Ok(())
    }
}
