//! Briefing service configuration.
//!
//! The credential is an explicit value handed to the requester at
//! construction. `from_env` is a convenience for binaries; library code never
//! reads the environment on its own.

use crate::error::IntelError;

/// Default hosted model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default HTTP timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntelConfig {
    /// Service credential. `None` means every request falls back immediately.
    pub api_key: Option<String>,
    /// Base URL of the service (scheme + host).
    pub endpoint: String,
    /// Model name.
    pub model: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for IntelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl IntelConfig {
    /// Config with the given credential and default service settings.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Create config from environment variables
    ///
    /// `SOVEREIGN_API_KEY` (or `API_KEY`), `SOVEREIGN_ENDPOINT`,
    /// `SOVEREIGN_MODEL`, `SOVEREIGN_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("SOVEREIGN_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .ok()
                .filter(|key| !key.trim().is_empty()),
            endpoint: std::env::var("SOVEREIGN_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            model: std::env::var("SOVEREIGN_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout_secs: std::env::var("SOVEREIGN_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// The configured credential, or `MissingCredential`.
    pub fn credential(&self) -> Result<&str, IntelError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(IntelError::MissingCredential)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("endpoint cannot be empty".to_string());
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err("endpoint must start with http:// or https://".to_string());
        }

        if self.model.trim().is_empty() {
            return Err("model cannot be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
