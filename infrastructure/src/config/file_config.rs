//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use application types where appropriate.

use crate::http::GatewayConfig;
use console_application::{ConsoleBehavior, KeynoteResolutionMode};
use console_domain::DEFAULT_RECENT_LIMIT;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("gateway.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("gateway.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),

    #[error("gateway.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("console.recent_limit cannot be 0")]
    InvalidRecentLimit,
}

/// Raw gateway configuration from TOML (`[gateway]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Gateway root, e.g. `http://localhost:9999`
    pub base_url: String,
    /// Path prefix routed to the conference service
    pub conference_prefix: String,
    /// Path prefix routed to the keynote service
    pub keynote_prefix: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9999".to_string(),
            conference_prefix: "conference-service/api".to_string(),
            keynote_prefix: "keynote-service/api".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl FileGatewayConfig {
    pub fn to_gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            base_url: self.base_url.clone(),
            conference_prefix: self.conference_prefix.clone(),
            keynote_prefix: self.keynote_prefix.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

/// Raw console behavior configuration from TOML (`[console]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsoleConfig {
    pub keynote_resolution: KeynoteResolutionMode,
    /// Conferences listed as recent on the dashboard
    pub recent_limit: usize,
}

impl Default for FileConsoleConfig {
    fn default() -> Self {
        Self {
            keynote_resolution: KeynoteResolutionMode::Direct,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl FileConsoleConfig {
    pub fn to_behavior(&self) -> ConsoleBehavior {
        ConsoleBehavior::default()
            .with_keynote_resolution(self.keynote_resolution)
            .with_recent_limit(self.recent_limit)
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    #[default]
    Text,
    Json,
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: FileOutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: FileOutputFormat::Text,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gateway location and timeouts
    pub gateway: FileGatewayConfig,
    /// Use case behavior
    pub console: FileConsoleConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        let base_url = self.gateway.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        } else if let Err(e) = reqwest::Url::parse(base_url) {
            issues.push(ConfigValidationError::InvalidBaseUrl(format!(
                "{base_url} ({e})"
            )));
        }

        if self.gateway.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        if self.console.recent_limit == 0 {
            issues.push(ConfigValidationError::InvalidRecentLimit);
        }

        issues
    }
}
