//! Error types for sharing.

use socialize_launch::LaunchError;
use socialize_types::ShareType;
use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

/// Result type for share operations.
pub type ShareResult<T> = Result<T, ShareError>;

/// An error reported by a social network's SDK.
#[derive(Debug, Clone, Error)]
#[error("{network}: {message}")]
pub struct NetworkError {
    pub network: ShareType,
    pub message: String,
    #[source]
    pub cause: Option<Arc<dyn StdError + Send + Sync>>,
}

impl NetworkError {
    pub fn new(network: ShareType, message: impl Into<String>) -> Self {
        Self {
            network,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }
}

/// Errors that can occur while sharing.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("{0} is not available on this device")]
    Unavailable(ShareType),

    #[error("no share handler registered for {0}")]
    NoHandler(ShareType),

    #[error("launch error: {0}")]
    Launch(#[from] LaunchError),
}
