//! Handler lookup and the dispatch wrapper that reports every failure once.

use crate::context::ShareContext;
use crate::error::ShareError;
use crate::handler::{ShareHandler, ShareHandlerListener};
use socialize_types::{PropagationInfo, ShareType, SocialAction};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Share handlers keyed by destination.
#[derive(Clone, Default)]
pub struct ShareHandlers {
    handlers: HashMap<ShareType, Arc<dyn ShareHandler>>,
}

impl ShareHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under its own share type, returning the handler
    /// it replaces.
    pub fn register(&mut self, handler: Arc<dyn ShareHandler>) -> Option<Arc<dyn ShareHandler>> {
        self.handlers.insert(handler.share_type(), handler)
    }

    pub fn with(mut self, handler: Arc<dyn ShareHandler>) -> Self {
        self.register(handler);
        self
    }

    pub fn get(&self, share_type: ShareType) -> Option<&Arc<dyn ShareHandler>> {
        self.handlers.get(&share_type)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered share types, in declaration order.
    pub fn share_types(&self) -> Vec<ShareType> {
        let mut types: Vec<_> = self.handlers.keys().copied().collect();
        types.sort();
        types
    }

    /// Share types whose handler is usable on this device right now.
    pub fn available(&self, ctx: &ShareContext) -> Vec<ShareType> {
        self.share_types()
            .into_iter()
            .filter(|t| self.handlers[t].is_available_on_device(ctx))
            .collect()
    }
}

impl std::fmt::Debug for ShareHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareHandlers")
            .field("share_types", &self.share_types())
            .finish()
    }
}

/// Picks the handler for a share and turns every way it can fail into a
/// single `on_error`.
#[derive(Debug, Clone, Default)]
pub struct ShareDispatcher {
    handlers: ShareHandlers,
}

impl ShareDispatcher {
    pub fn new(handlers: ShareHandlers) -> Self {
        Self { handlers }
    }

    pub fn handlers(&self) -> &ShareHandlers {
        &self.handlers
    }

    pub fn is_available(&self, share_type: ShareType, ctx: &ShareContext) -> bool {
        self.handlers
            .get(share_type)
            .is_some_and(|h| h.is_available_on_device(ctx))
    }

    /// Shares `action` to `share_type`. Failures reach `listener` exactly
    /// once; success is silent.
    pub async fn share(
        &self,
        ctx: &ShareContext,
        share_type: ShareType,
        action: &dyn SocialAction,
        text: &str,
        info: &PropagationInfo,
        listener: &dyn ShareHandlerListener,
    ) {
        let Some(handler) = self.handlers.get(share_type) else {
            report(ctx, action, listener, ShareError::NoHandler(share_type));
            return;
        };

        if !handler.is_available_on_device(ctx) {
            report(ctx, action, listener, ShareError::Unavailable(share_type));
            return;
        }

        debug!("Dispatching {} share for {}", share_type, action.entity_key());
        if let Err(e) = handler.handle(ctx, action, text, info, listener).await {
            report(ctx, action, listener, e);
        }
    }
}

fn report(
    ctx: &ShareContext,
    action: &dyn SocialAction,
    listener: &dyn ShareHandlerListener,
    error: ShareError,
) {
    warn!("Share of {} failed: {}", action.entity_key(), error);
    let message = error.to_string();
    listener.on_error(ctx, action, &message, &error);
}
