//! Error types for the API layer.

use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur talking to the Socialize service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with an error status.
    #[error("API error {result_code}: {message}")]
    Api { result_code: u16, message: String },

    /// Network error before a response was received.
    #[error("network error: {0}")]
    Network(String),

    /// Building the client or reading a response body failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body was not the JSON the call expects.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The service answered, but not with what the call expects.
    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Result code carried by synthesized not-found errors.
    pub const NOT_FOUND: u16 = 404;

    /// A not-found error with HTTP 404 semantics.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::Api {
            result_code: Self::NOT_FOUND,
            message: message.into(),
        }
    }

    /// The service result code, if this error came from (or mimics) a response.
    pub fn result_code(&self) -> Option<u16> {
        match self {
            ApiError::Api { result_code, .. } => Some(*result_code),
            _ => None,
        }
    }

    /// Returns true if this error has 404 semantics.
    pub fn is_not_found(&self) -> bool {
        self.result_code() == Some(Self::NOT_FOUND)
    }
}
