//! Listener contracts for hosts that prefer callbacks over futures.
//!
//! Each call delivers exactly one terminal notification: one of the success
//! callbacks or `on_error`.

use crate::error::{ApiError, ApiResult};
use socialize_types::ListResult;
use std::future::Future;
use tokio::task::JoinHandle;

/// Receives the outcome of one action-system call.
///
/// Only `on_error` is required; success callbacks default to no-ops so a
/// listener implements just the ones its call can produce.
pub trait ActionListener<T>: Send + Sync {
    fn on_create(&self, _item: T) {}

    fn on_get(&self, _item: T) {}

    fn on_update(&self, _item: T) {}

    fn on_delete(&self) {}

    fn on_list(&self, _items: ListResult<T>) {}

    fn on_error(&self, error: ApiError);
}

/// The success side of a call, tagged by which callback it maps to.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome<T> {
    Created(T),
    Got(T),
    Updated(T),
    Deleted,
    Listed(ListResult<T>),
}

/// Delivers `result` to `listener` through exactly one callback.
pub fn notify<T, L>(result: ApiResult<ActionOutcome<T>>, listener: &L)
where
    L: ActionListener<T> + ?Sized,
{
    match result {
        Ok(ActionOutcome::Created(item)) => listener.on_create(item),
        Ok(ActionOutcome::Got(item)) => listener.on_get(item),
        Ok(ActionOutcome::Updated(item)) => listener.on_update(item),
        Ok(ActionOutcome::Deleted) => listener.on_delete(),
        Ok(ActionOutcome::Listed(items)) => listener.on_list(items),
        Err(error) => listener.on_error(error),
    }
}

/// Runs `call` on the current tokio runtime and hands its result to
/// `listener`. Returns immediately.
pub fn spawn_notify<T, F, L>(call: F, listener: L) -> JoinHandle<()>
where
    T: Send + 'static,
    F: Future<Output = ApiResult<ActionOutcome<T>>> + Send + 'static,
    L: ActionListener<T> + 'static,
{
    tokio::spawn(async move {
        let result = call.await;
        notify(result, &listener);
    })
}
