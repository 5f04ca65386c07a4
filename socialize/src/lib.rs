//! Socialize client SDK.
//!
//! Likes, shares and comments on entities of the host app, recorded on the
//! Socialize service and propagated to social networks, email or SMS.
//!
//! ```no_run
//! use socialize::{Socialize, SocializeConfig};
//! use socialize_types::{ActionMetadata, Entity, Session, User};
//!
//! # async fn run() -> socialize::Result<()> {
//! let config = SocializeConfig::from_file("socialize.json")?;
//! let session = Session::new(User::new(42), config.consumer_key.clone(), "token");
//! let client = Socialize::new(config, session)?;
//!
//! let entity = Entity::named("http://example.com/article", "Article");
//! let _like = client.like(&entity, ActionMetadata::default()).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod host;
mod logging;

pub use client::Socialize;
pub use config::{ENTITY_LOADER_CHECK_ENABLED, NOTIFICATIONS_ENABLED, SocializeConfig};
pub use error::{Error, Result};
pub use host::{EntityLoader, PermissionCheck, RECEIVE_PERMISSION, message_permission};
pub use logging::init_logging;
