//! Comment system.

use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::provider::EntityProvider;
use crate::system::ActionSystem;
use socialize_types::{ActionId, ActionMetadata, Comment, Entity, ListResult, Session, UserId};
use std::sync::Arc;

#[derive(Clone)]
pub struct CommentSystem {
    actions: ActionSystem<Comment>,
}

impl CommentSystem {
    pub fn new(provider: Arc<dyn EntityProvider<Comment>>, config: &ApiConfig) -> Self {
        Self {
            actions: ActionSystem::new(provider, config),
        }
    }

    pub fn actions(&self) -> &ActionSystem<Comment> {
        &self.actions
    }

    pub async fn add_comment(
        &self,
        session: &Session,
        entity: &Entity,
        text: &str,
        metadata: ActionMetadata,
    ) -> ApiResult<Comment> {
        self.actions
            .add(session, Comment::new(entity, text, metadata))
            .await
    }

    pub async fn get_comment(&self, session: &Session, id: ActionId) -> ApiResult<Comment> {
        self.actions.get_by_id(session, id).await
    }

    pub async fn get_comments_by_entity(
        &self,
        session: &Session,
        key: &str,
        start: usize,
        end: usize,
    ) -> ApiResult<ListResult<Comment>> {
        self.actions.list_by_entity_paged(session, key, start, end).await
    }

    pub async fn get_comments_by_user(
        &self,
        session: &Session,
        user_id: UserId,
        start: usize,
        end: usize,
    ) -> ApiResult<ListResult<Comment>> {
        self.actions
            .list_by_user_paged(session, user_id, start, end)
            .await
    }

    pub async fn get_comments(
        &self,
        session: &Session,
        ids: &[ActionId],
    ) -> ApiResult<ListResult<Comment>> {
        self.actions.list_by_ids(session, ids).await
    }

    pub async fn delete_comment(&self, session: &Session, id: ActionId) -> ApiResult<()> {
        self.actions.delete(session, id).await
    }
}
