//! Error types for the client.

use socialize_api::ApiError;
use socialize_launch::LaunchError;
use socialize_share::ShareError;
use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("api error: {0}")]
    Api(#[from] ApiError),

    #[error("share error: {0}")]
    Share(#[from] ShareError),

    #[error("launch error: {0}")]
    Launch(#[from] LaunchError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
