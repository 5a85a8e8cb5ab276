//! Error types for vidvault-core

use thiserror::Error;

/// Result type alias using vidvault-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vidvault-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The remote service answered with a non-success status
    #[error("Service error (HTTP {status}): {}", .message.as_deref().unwrap_or("no details"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// A response was missing a field we depend on
    #[error("Response is missing `{0}`")]
    MissingField(&'static str),

    /// Stored or received session token could not be decoded
    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    /// Client configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Token persistence backend failed
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}

impl Error {
    /// Message suitable for inline display after a failed auth call.
    ///
    /// Uses the message reported by the service when there is one, otherwise
    /// `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Self::InvalidInput(reason) => reason.clone(),
            _ => fallback.to_string(),
        }
    }
}
