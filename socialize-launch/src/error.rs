//! Error types for launching external flows.

use thiserror::Error;

/// Result type for launch operations.
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Errors that can occur starting or completing an external flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    /// No installed app can handle the intent.
    #[error("no activity found to handle {0}")]
    NoActivity(String),

    /// The host refused or failed to start the flow.
    #[error("host error: {0}")]
    Host(String),

    /// The flow finished in a way the launcher could not interpret.
    #[error("unexpected result: {0}")]
    UnexpectedResult(String),
}
