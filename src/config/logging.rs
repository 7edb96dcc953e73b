//! Logging configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Levels accepted in `level` and `component_levels`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable, multi-line
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        })
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Per-module levels, keyed by module under `vitalis::`
    /// (e.g. `{"router": "debug", "fallback": "trace"}`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_levels: Option<HashMap<String, String>>,
    /// Log question text (truncated) instead of only its length
    pub enable_content_logging: bool,
}

impl LoggingConfig {
    /// Lower the level to `warn` unless one was given explicitly.
    ///
    /// One-shot commands print their result on stdout and keep stderr quiet.
    pub fn quiet_unless(mut self, explicit_level: Option<&str>) -> Self {
        if explicit_level.is_none() {
            self.level = "warn".to_string();
        }
        self
    }

    /// Name of the first level that is not one of [`LOG_LEVELS`].
    pub(crate) fn invalid_level(&self) -> Option<&str> {
        std::iter::once(self.level.as_str())
            .chain(
                self.component_levels
                    .iter()
                    .flat_map(|levels| levels.values().map(String::as_str)),
            )
            .find(|level| !LOG_LEVELS.contains(&level.to_lowercase().as_str()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            component_levels: None,
            enable_content_logging: false,
        }
    }
}
