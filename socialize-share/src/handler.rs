//! The uniform handler and listener contracts.

use crate::context::ShareContext;
use crate::error::{ShareError, ShareResult};
use crate::sharer::PostHooks;
use async_trait::async_trait;
use socialize_types::{Entity, PropagationInfo, ShareType, SocialAction};

/// Hears about share failures. Success is implicit: no call means the share
/// went through (or was handed off to an external composer).
pub trait ShareHandlerListener: Send + Sync {
    fn on_error(
        &self,
        parent: &ShareContext,
        action: &dyn SocialAction,
        message: &str,
        error: &ShareError,
    );
}

/// Shares an action to one destination.
///
/// The before/after post hooks come from [`PostHooks`] and do nothing unless
/// a handler overrides them.
#[async_trait]
pub trait ShareHandler: PostHooks {
    fn share_type(&self) -> ShareType;

    /// Whether this destination can be used right now. Never touches the
    /// network.
    fn is_available_on_device(&self, ctx: &ShareContext) -> bool;

    /// Performs the share. Vendor failures go to `listener`; an `Err` is left
    /// for the dispatcher to report.
    async fn handle(
        &self,
        ctx: &ShareContext,
        action: &dyn SocialAction,
        text: &str,
        info: &PropagationInfo,
        listener: &dyn ShareHandlerListener,
    ) -> ShareResult<()>;
}

/// The action's entity, or a bare one built from its key.
pub(crate) fn action_entity(action: &dyn SocialAction) -> Entity {
    action
        .entity()
        .cloned()
        .unwrap_or_else(|| Entity::new(action.entity_key(), None))
}

/// A recording listener for testing.
pub mod mock {
    use super::*;
    use socialize_types::{ActionType, ShareType};
    use std::error::Error as StdError;
    use std::sync::{Arc, Mutex};

    /// One recorded `on_error` call.
    #[derive(Debug, Clone)]
    pub struct ListenerError {
        pub action_type: ActionType,
        pub entity_key: String,
        pub message: String,
        pub error: String,
        pub network: Option<ShareType>,
        pub cause: Option<Arc<dyn StdError + Send + Sync>>,
    }

    #[derive(Debug, Default)]
    pub struct RecordingListener {
        errors: Mutex<Vec<ListenerError>>,
    }

    impl RecordingListener {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn errors(&self) -> Vec<ListenerError> {
            self.errors.lock().unwrap().clone()
        }
    }

    impl ShareHandlerListener for RecordingListener {
        fn on_error(
            &self,
            _parent: &ShareContext,
            action: &dyn SocialAction,
            message: &str,
            error: &ShareError,
        ) {
            let (network, cause) = match error {
                ShareError::Network(e) => (Some(e.network), e.cause.clone()),
                _ => (None, None),
            };
            self.errors.lock().unwrap().push(ListenerError {
                action_type: action.action_type(),
                entity_key: action.entity_key().to_string(),
                message: message.to_string(),
                error: error.to_string(),
                network,
                cause,
            });
        }
    }
}
