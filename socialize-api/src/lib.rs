//! Action systems and entity providers for the Socialize REST service.
//!
//! # Architecture
//!
//! - **Provider**: [`EntityProvider`] is the generic create/get/list/delete
//!   transport for one resource type. [`HttpProvider`] implements it over
//!   the REST API; hosts may plug in their own.
//! - **Action systems**: [`ActionSystem`] builds endpoints
//!   (`/entity/{key}/<resource>/`, `/user/{id}/<resource>/`,
//!   `/<resource>/{id}`) and applies the paging policy. [`LikeSystem`],
//!   [`ShareSystem`] and [`CommentSystem`] are the per-resource façades.
//! - **Listeners**: every async call has a `*_with` twin that spawns it and
//!   reports exactly one outcome to an [`ActionListener`].
//!
//! # Example
//!
//! ```no_run
//! use socialize_api::{ApiConfig, HttpProvider, LikeSystem};
//! use socialize_types::{ActionMetadata, Entity, Session, User};
//! use std::sync::Arc;
//!
//! # async fn run() -> socialize_api::ApiResult<()> {
//! let config = ApiConfig::default();
//! let likes = LikeSystem::new(Arc::new(HttpProvider::new(config.clone())?), &config);
//! let session = Session::new(User::new(69), "consumer-key", "token");
//!
//! let entity = Entity::named("http://example.com/article", "Article");
//! let _like = likes.add_like(&session, &entity, ActionMetadata::default()).await?;
//! # Ok(())
//! # }
//! ```

mod comment;
mod config;
pub mod endpoint;
mod error;
pub mod http;
mod like;
pub mod listener;
pub mod provider;
mod share;
mod system;

pub use comment::CommentSystem;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use http::HttpProvider;
pub use like::LikeSystem;
pub use listener::{ActionListener, ActionOutcome, notify, spawn_notify};
pub use provider::{EntityProvider, ListQuery};
pub use share::ShareSystem;
pub use system::{ActionResource, ActionSystem, USER_ID_PARAM};
