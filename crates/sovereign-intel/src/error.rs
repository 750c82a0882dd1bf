//! Briefing generation errors

use thiserror::Error;

/// Errors from the briefing pipeline.
#[derive(Debug, Error)]
pub enum IntelError {
    /// No credential configured for the text-generation service
    #[error("Secure uplink failed. API key required.")]
    MissingCredential,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Service returned error response
    #[error("Service error: {status} - {message}")]
    Service { status: u16, message: String },

    /// Response text was not a briefing-shaped JSON object
    #[error("Malformed response: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The two failure classes of the briefing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local setup problem. No request was attempted.
    Configuration,
    /// The external service failed or answered with something unusable.
    Upstream,
}

impl IntelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IntelError::MissingCredential | IntelError::InvalidConfig(_) => {
                ErrorKind::Configuration
            }
            IntelError::Network(_)
            | IntelError::Service { .. }
            | IntelError::Serialization(_) => ErrorKind::Upstream,
        }
    }
}
