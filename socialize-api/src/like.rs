//! Like system.

use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::provider::EntityProvider;
use crate::system::ActionSystem;
use socialize_types::{ActionId, ActionMetadata, Entity, Like, ListResult, Session, UserId};
use std::sync::Arc;

/// Likes on entities.
#[derive(Clone)]
pub struct LikeSystem {
    actions: ActionSystem<Like>,
}

impl LikeSystem {
    pub fn new(provider: Arc<dyn EntityProvider<Like>>, config: &ApiConfig) -> Self {
        Self {
            actions: ActionSystem::new(provider, config),
        }
    }

    /// The underlying action system, for listener-style calls.
    pub fn actions(&self) -> &ActionSystem<Like> {
        &self.actions
    }

    /// Likes `entity` as the session user.
    pub async fn add_like(
        &self,
        session: &Session,
        entity: &Entity,
        metadata: ActionMetadata,
    ) -> ApiResult<Like> {
        self.actions.add(session, Like::new(entity, metadata)).await
    }

    /// The session user's like of the entity `key`; 404 if there is none.
    pub async fn get_like(&self, session: &Session, key: &str) -> ApiResult<Like> {
        self.actions.get_by_key(session, key).await
    }

    pub async fn get_like_by_id(&self, session: &Session, id: ActionId) -> ApiResult<Like> {
        self.actions.get_by_id(session, id).await
    }

    pub async fn get_likes_by_entity(
        &self,
        session: &Session,
        key: &str,
    ) -> ApiResult<ListResult<Like>> {
        self.actions.list_by_entity(session, key).await
    }

    pub async fn get_likes_by_entity_paged(
        &self,
        session: &Session,
        key: &str,
        start: usize,
        end: usize,
    ) -> ApiResult<ListResult<Like>> {
        self.actions.list_by_entity_paged(session, key, start, end).await
    }

    pub async fn get_likes_by_user(
        &self,
        session: &Session,
        user_id: UserId,
    ) -> ApiResult<ListResult<Like>> {
        self.actions.list_by_user(session, user_id).await
    }

    pub async fn get_likes_by_user_paged(
        &self,
        session: &Session,
        user_id: UserId,
        start: usize,
        end: usize,
    ) -> ApiResult<ListResult<Like>> {
        self.actions
            .list_by_user_paged(session, user_id, start, end)
            .await
    }

    pub async fn get_likes_by_id(
        &self,
        session: &Session,
        ids: &[ActionId],
    ) -> ApiResult<ListResult<Like>> {
        self.actions.list_by_ids(session, ids).await
    }

    /// Removes a like (an "unlike").
    pub async fn delete_like(&self, session: &Session, id: ActionId) -> ApiResult<()> {
        self.actions.delete(session, id).await
    }
}
