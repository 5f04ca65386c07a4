//! Share system.
//!
//! Records shares on the service. Propagating a share to the destination
//! network is the share handlers' job, using the propagation info the
//! service returns here.

use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::provider::EntityProvider;
use crate::system::ActionSystem;
use socialize_types::{
    ActionId, ActionMetadata, Entity, ListResult, Session, Share, ShareType, UserId,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ShareSystem {
    actions: ActionSystem<Share>,
}

impl ShareSystem {
    pub fn new(provider: Arc<dyn EntityProvider<Share>>, config: &ApiConfig) -> Self {
        Self {
            actions: ActionSystem::new(provider, config),
        }
    }

    pub fn actions(&self) -> &ActionSystem<Share> {
        &self.actions
    }

    /// Records a share of `entity` to `share_type`.
    pub async fn add_share(
        &self,
        session: &Session,
        entity: &Entity,
        text: &str,
        share_type: ShareType,
        metadata: ActionMetadata,
    ) -> ApiResult<Share> {
        let share = Share::new(entity, text, share_type, metadata);
        self.actions.add(session, share).await
    }

    pub async fn get_share(&self, session: &Session, id: ActionId) -> ApiResult<Share> {
        self.actions.get_by_id(session, id).await
    }

    pub async fn get_shares_by_entity(
        &self,
        session: &Session,
        key: &str,
        start: usize,
        end: usize,
    ) -> ApiResult<ListResult<Share>> {
        self.actions.list_by_entity_paged(session, key, start, end).await
    }

    pub async fn get_shares_by_user(
        &self,
        session: &Session,
        user_id: UserId,
        start: usize,
        end: usize,
    ) -> ApiResult<ListResult<Share>> {
        self.actions
            .list_by_user_paged(session, user_id, start, end)
            .await
    }

    pub async fn get_shares(
        &self,
        session: &Session,
        ids: &[ActionId],
    ) -> ApiResult<ListResult<Share>> {
        self.actions.list_by_ids(session, ids).await
    }
}
