//! The contract a social network SDK offers for posting.

use crate::context::ShareContext;
use crate::error::NetworkError;
use async_trait::async_trait;
use socialize_types::{ActionType, Entity, PropagationInfo, ShareType};

/// Notifications a network SDK gives around the actual post.
pub trait PostHooks: Send + Sync {
    fn on_before_post(&self, _parent: &ShareContext, _network: ShareType) {}

    fn on_after_post(&self, _parent: &ShareContext, _network: ShareType) {}
}

/// Posts to one social network.
///
/// Implementations call `hooks.on_before_post` before posting and
/// `hooks.on_after_post` once the post went through, then return `Ok`.
/// Any failure is returned as a [`NetworkError`]; nothing is reported twice.
#[async_trait]
pub trait SocialNetworkSharer: Send + Sync {
    fn network(&self) -> ShareType;

    #[allow(clippy::too_many_arguments)]
    async fn share(
        &self,
        parent: &ShareContext,
        entity: &Entity,
        info: &PropagationInfo,
        text: &str,
        auto_auth: bool,
        action_type: ActionType,
        hooks: &dyn PostHooks,
    ) -> Result<(), NetworkError>;
}

/// A recording sharer for testing.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// One recorded `share` call.
    #[derive(Debug, Clone, PartialEq)]
    pub struct SharerCall {
        pub entity: Entity,
        pub info: PropagationInfo,
        pub text: String,
        pub auto_auth: bool,
        pub action_type: ActionType,
    }

    /// Sharer that records calls and either succeeds or fails with a
    /// preset error.
    pub struct RecordingSharer {
        network: ShareType,
        failure: Mutex<Option<NetworkError>>,
        calls: Mutex<Vec<SharerCall>>,
    }

    impl RecordingSharer {
        pub fn new(network: ShareType) -> Self {
            Self {
                network,
                failure: Mutex::new(None),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Makes every following call fail with `error`.
        pub fn failing_with(self, error: NetworkError) -> Self {
            *self.failure.lock().unwrap() = Some(error);
            self
        }

        pub fn calls(&self) -> Vec<SharerCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SocialNetworkSharer for RecordingSharer {
        fn network(&self) -> ShareType {
            self.network
        }

        async fn share(
            &self,
            parent: &ShareContext,
            entity: &Entity,
            info: &PropagationInfo,
            text: &str,
            auto_auth: bool,
            action_type: ActionType,
            hooks: &dyn PostHooks,
        ) -> Result<(), NetworkError> {
            self.calls.lock().unwrap().push(SharerCall {
                entity: entity.clone(),
                info: info.clone(),
                text: text.to_string(),
                auto_auth,
                action_type,
            });

            if let Some(error) = self.failure.lock().unwrap().clone() {
                return Err(error);
            }
            hooks.on_before_post(parent, self.network);
            hooks.on_after_post(parent, self.network);
            Ok(())
        }
    }
}
