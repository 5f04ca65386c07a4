//! Core type definitions for the Socialize SDK.
//!
//! This crate defines the plain data model shared by every other crate:
//! - Numeric user and action identifiers, device identifiers (UUID v4)
//! - Entities, users and the authenticated session
//! - Action records (likes, shares, comments) and their metadata
//! - Paged list results and share propagation info
//!
//! Nothing here performs I/O.

mod action;
mod entity;
mod ids;
mod list;

pub use action::{
    ActionMetadata, ActionType, AuthProviderType, Comment, GeoPoint, Like, PropagationInfo,
    Share, ShareType, SocialAction,
};
pub use entity::{Entity, Session, User};
pub use ids::{ActionId, DeviceId, UserId};
pub use list::{ListResult, PageWindow};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("unknown share type: {0}")]
    UnknownShareType(String),
}
