//! The hosting screen, as seen by launchers.
//!
//! Implemented by the host application over its platform's activity system.

use crate::error::LaunchResult;
use crate::intent::Intent;
use serde::{Deserialize, Serialize};

/// Result code reported by a finished flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultCode {
    Ok,
    Canceled,
    /// Application-defined codes, starting at 1.
    User(i32),
}

impl ResultCode {
    pub const RAW_OK: i32 = -1;
    pub const RAW_CANCELED: i32 = 0;

    /// Maps the platform's raw result code.
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        match code {
            Self::RAW_OK => ResultCode::Ok,
            Self::RAW_CANCELED => ResultCode::Canceled,
            other => ResultCode::User(other),
        }
    }

    #[must_use]
    pub const fn as_raw(&self) -> i32 {
        match self {
            ResultCode::Ok => Self::RAW_OK,
            ResultCode::Canceled => Self::RAW_CANCELED,
            ResultCode::User(code) => *code,
        }
    }
}

/// The screen that starts external flows and receives their results.
pub trait ActivityHost: Send + Sync {
    /// Starts `intent`; its result must later be fed to
    /// [`crate::LaunchTracker::deliver_result`] with the same `request_code`.
    fn start_activity_for_result(&self, intent: &Intent, request_code: i32) -> LaunchResult<()>;

    /// Whether some installed component can handle `intent`.
    fn can_resolve(&self, intent: &Intent) -> bool;

    /// Closes the hosting screen.
    fn finish(&self) {}
}

/// A recording host for testing.
pub mod mock {
    use super::*;
    use crate::error::LaunchError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Host that records started intents and resolves everything unless told
    /// otherwise.
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        started: Mutex<Vec<(Intent, i32)>>,
        unresolvable: Mutex<Vec<String>>,
        refuse_start: AtomicBool,
        finished: AtomicUsize,
    }

    impl RecordingHost {
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes intents with `action` unresolvable.
        pub fn without_handler_for(self, action: impl AsRef<str>) -> Self {
            self.unresolvable
                .lock()
                .unwrap()
                .push(action.as_ref().to_string());
            self
        }

        /// Makes every start fail with a host error.
        pub fn refusing_starts(self) -> Self {
            self.refuse_start.store(true, Ordering::SeqCst);
            self
        }

        /// Intents started so far with their request codes.
        pub fn started(&self) -> Vec<(Intent, i32)> {
            self.started.lock().unwrap().clone()
        }

        pub fn last_started(&self) -> Option<(Intent, i32)> {
            self.started.lock().unwrap().last().cloned()
        }

        /// How many times `finish` was called.
        pub fn finish_count(&self) -> usize {
            self.finished.load(Ordering::SeqCst)
        }
    }

    impl ActivityHost for RecordingHost {
        fn start_activity_for_result(
            &self,
            intent: &Intent,
            request_code: i32,
        ) -> LaunchResult<()> {
            if self.refuse_start.load(Ordering::SeqCst) {
                return Err(LaunchError::Host("start refused".to_string()));
            }
            self.started
                .lock()
                .unwrap()
                .push((intent.clone(), request_code));
            Ok(())
        }

        fn can_resolve(&self, intent: &Intent) -> bool {
            let action = intent.resolve_target().action();
            !self.unresolvable.lock().unwrap().iter().any(|a| a == action)
        }

        fn finish(&self) {
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
    }
}
