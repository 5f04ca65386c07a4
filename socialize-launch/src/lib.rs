//! Launchers for external UI flows.
//!
//! A [`Launcher`] builds an [`Intent`] for some external flow (a composer, a
//! browser, another app) and interprets the result the platform reports when
//! that flow returns. The host screen implements [`ActivityHost`]; a
//! [`LaunchTracker`] per host hands out a [`LaunchHandle`] for every launch,
//! which resolves exactly once:
//!
//! - `Completed` when the host delivers the flow's result,
//! - `Cancelled` when the user backs out, the host is destroyed, or the
//!   tracker is dropped,
//! - `Failed` when the launcher cannot make sense of the result.
//!
//! There is no timeout: a flow that never returns and whose host is never
//! destroyed stays pending.

mod error;
pub mod host;
pub mod intent;
mod launcher;
mod tracker;

pub use error::{LaunchError, LaunchResult};
pub use host::{ActivityHost, ResultCode};
pub use intent::{Action, Extra, Intent};
pub use launcher::{
    ActivityResult, ComposeKind, ComposeLauncher, EMAIL_MIME_TYPE, EntityLauncher,
    IntentLauncher, LaunchListener, LaunchOutcome, Launcher,
};
pub use tracker::{LaunchHandle, LaunchTracker, REQUEST_CODE_BASE};
