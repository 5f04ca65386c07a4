//! Sharing through a social network SDK.

use crate::context::ShareContext;
use crate::error::{ShareError, ShareResult};
use crate::handler::{ShareHandler, ShareHandlerListener, action_entity};
use crate::sharer::{PostHooks, SocialNetworkSharer};
use async_trait::async_trait;
use socialize_types::{PropagationInfo, ShareType, SocialAction};
use std::sync::Arc;
use tracing::{debug, warn};

/// Hands shares to a [`SocialNetworkSharer`] and reports its errors through
/// the listener.
pub struct SocialNetworkShareHandler {
    sharer: Arc<dyn SocialNetworkSharer>,
    hooks: Option<Arc<dyn PostHooks>>,
}

impl SocialNetworkShareHandler {
    pub fn new(sharer: Arc<dyn SocialNetworkSharer>) -> Self {
        Self {
            sharer,
            hooks: None,
        }
    }

    /// Forwards the sharer's before/after post notifications to `hooks`.
    pub fn with_hooks(mut self, hooks: Arc<dyn PostHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }
}

impl PostHooks for SocialNetworkShareHandler {
    fn on_before_post(&self, parent: &ShareContext, network: ShareType) {
        if let Some(hooks) = &self.hooks {
            hooks.on_before_post(parent, network);
        }
    }

    fn on_after_post(&self, parent: &ShareContext, network: ShareType) {
        if let Some(hooks) = &self.hooks {
            hooks.on_after_post(parent, network);
        }
    }
}

#[async_trait]
impl ShareHandler for SocialNetworkShareHandler {
    fn share_type(&self) -> ShareType {
        self.sharer.network()
    }

    fn is_available_on_device(&self, ctx: &ShareContext) -> bool {
        self.share_type()
            .auth_provider()
            .is_some_and(|provider| ctx.auth().is_supported(provider))
    }

    async fn handle(
        &self,
        ctx: &ShareContext,
        action: &dyn SocialAction,
        text: &str,
        info: &PropagationInfo,
        listener: &dyn ShareHandlerListener,
    ) -> ShareResult<()> {
        let entity = action_entity(action);

        debug!("Sharing {} to {}", entity.key(), self.share_type());
        let posted = self
            .sharer
            .share(ctx, &entity, info, text, true, action.action_type(), self)
            .await;

        if let Err(e) = posted {
            warn!("{} share failed: {}", e.network, e.message);
            let message = e.message.clone();
            listener.on_error(ctx, action, &message, &ShareError::Network(e));
        }
        Ok(())
    }
}
