//! Per-host bookkeeping of in-flight launches.
//!
//! Every launch gets its own request code and its own single-shot channel,
//! so concurrent launches cannot overwrite each other's result. The host
//! feeds platform results back through [`LaunchTracker::deliver_result`] and
//! reports its own destruction through [`LaunchTracker::host_destroyed`].

use crate::error::{LaunchError, LaunchResult};
use crate::host::{ActivityHost, ResultCode};
use crate::intent::Intent;
use crate::launcher::{LaunchListener, LaunchOutcome, Launcher};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

/// First request code handed out. Codes stay within the low 16 bits.
pub const REQUEST_CODE_BASE: i32 = 0x5C00;
const REQUEST_CODE_MASK: i32 = 0xFFFF;

struct PendingLaunch {
    launcher: Arc<dyn Launcher>,
    intent: Intent,
    outcome_tx: oneshot::Sender<LaunchOutcome>,
}

/// Tracks the launches started from one host screen.
pub struct LaunchTracker {
    host: Arc<dyn ActivityHost>,
    next_code: AtomicI32,
    pending: Mutex<HashMap<i32, PendingLaunch>>,
}

impl LaunchTracker {
    pub fn new(host: Arc<dyn ActivityHost>) -> Self {
        Self {
            host,
            next_code: AtomicI32::new(REQUEST_CODE_BASE),
            pending: Mutex::new(HashMap::new()),
        }
    }

    pub fn host(&self) -> &Arc<dyn ActivityHost> {
        &self.host
    }

    /// Number of launches still waiting for a result.
    pub fn pending_count(&self) -> usize {
        self.pending().len()
    }

    fn pending(&self) -> MutexGuard<'_, HashMap<i32, PendingLaunch>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn allocate_code(&self, pending: &HashMap<i32, PendingLaunch>) -> i32 {
        loop {
            let code = self.next_code.fetch_add(1, Ordering::Relaxed) & REQUEST_CODE_MASK;
            if !pending.contains_key(&code) {
                return code;
            }
        }
    }

    /// Starts `launcher`'s flow and returns a handle to its outcome.
    pub fn launch(&self, launcher: Arc<dyn Launcher>) -> LaunchResult<LaunchHandle> {
        let intent = launcher.intent(self.host.as_ref())?;

        if !self.host.can_resolve(&intent) {
            return Err(LaunchError::NoActivity(
                intent.resolve_target().action().to_string(),
            ));
        }

        let (outcome_tx, outcome_rx) = oneshot::channel();
        let request_code = {
            let mut pending = self.pending();
            let code = self.allocate_code(&pending);
            pending.insert(
                code,
                PendingLaunch {
                    launcher,
                    intent: intent.clone(),
                    outcome_tx,
                },
            );
            code
        }; // lock dropped before calling into the host

        if let Err(e) = self.host.start_activity_for_result(&intent, request_code) {
            self.pending().remove(&request_code);
            warn!("Launch {} refused by host: {}", request_code, e);
            return Err(e);
        }

        debug!("Launched {} with request code {}", intent.action(), request_code);
        Ok(LaunchHandle {
            request_code,
            outcome_rx,
        })
    }

    /// Feeds a platform result back. Returns false if `request_code` is not
    /// one of ours (or already completed).
    pub fn deliver_result(
        &self,
        request_code: i32,
        result_code: ResultCode,
        returned: Option<Intent>,
    ) -> bool {
        let Some(pending) = self.pending().remove(&request_code) else {
            debug!("Ignoring result for unknown request code {}", request_code);
            return false;
        };

        let outcome = pending.launcher.on_result(
            self.host.as_ref(),
            request_code,
            result_code,
            returned.as_ref(),
            &pending.intent,
        );

        if matches!(outcome, LaunchOutcome::Completed(_)) && pending.launcher.should_finish() {
            self.host.finish();
        }

        info!("Launch {} finished: {:?}", request_code, result_code);
        // The caller may have dropped its handle; nobody left to tell.
        let _ = pending.outcome_tx.send(outcome);
        true
    }

    /// Resolves every in-flight launch as cancelled. Call when the host
    /// screen is destroyed.
    pub fn host_destroyed(&self) {
        let drained: Vec<_> = self.pending().drain().collect();
        if !drained.is_empty() {
            info!("Host destroyed with {} launch(es) in flight", drained.len());
        }
        for (_, pending) in drained {
            let _ = pending.outcome_tx.send(LaunchOutcome::Cancelled);
        }
    }
}

/// The outcome of one launch, delivered exactly once.
#[derive(Debug)]
pub struct LaunchHandle {
    request_code: i32,
    outcome_rx: oneshot::Receiver<LaunchOutcome>,
}

impl LaunchHandle {
    pub fn request_code(&self) -> i32 {
        self.request_code
    }

    /// Waits for the outcome. A tracker dropped mid-flight counts as cancelled.
    pub async fn outcome(self) -> LaunchOutcome {
        self.outcome_rx.await.unwrap_or(LaunchOutcome::Cancelled)
    }

    /// Returns the outcome if it has already arrived.
    pub fn try_outcome(&mut self) -> Option<LaunchOutcome> {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(LaunchOutcome::Cancelled),
        }
    }

    /// Waits for the outcome and reports it through exactly one callback.
    pub async fn deliver_to<L: LaunchListener + ?Sized>(self, listener: &L) {
        match self.outcome().await {
            LaunchOutcome::Completed(result) => listener.on_result(result),
            LaunchOutcome::Cancelled => listener.on_cancel(),
            LaunchOutcome::Failed(error) => listener.on_error(error),
        }
    }
}
