//! Per-network share handlers.
//!
//! A [`ShareHandler`] takes a share of some action to one destination: a
//! social network through its [`SocialNetworkSharer`], or the platform's
//! email/SMS composer through a launcher. Handlers are looked up by
//! [`ShareType`](socialize_types::ShareType) in a [`ShareHandlers`] table and
//! invoked through a [`ShareDispatcher`], which guarantees that a failing
//! share produces exactly one [`ShareHandlerListener::on_error`].

mod compose;
mod context;
mod dispatch;
mod error;
pub mod handler;
mod network;
pub mod sharer;

pub use compose::{EmailShareHandler, SmsShareHandler, compose_body};
pub use context::{AuthCapabilities, ShareContext, SupportedProviders};
pub use dispatch::{ShareDispatcher, ShareHandlers};
pub use error::{NetworkError, ShareError, ShareResult};
pub use handler::{ShareHandler, ShareHandlerListener};
pub use network::SocialNetworkShareHandler;
pub use sharer::{PostHooks, SocialNetworkSharer};
