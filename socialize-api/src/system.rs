//! Generic action system.
//!
//! Turns the coarse verbs (add, get, list, delete) into provider calls,
//! building the endpoint and applying the paging policy. Resource-specific
//! façades ([`crate::LikeSystem`] and friends) wrap one of these.

use crate::config::ApiConfig;
use crate::endpoint;
use crate::error::{ApiError, ApiResult};
use crate::listener::{ActionListener, ActionOutcome, spawn_notify};
use crate::provider::{EntityProvider, ListQuery};
use serde::Serialize;
use serde::de::DeserializeOwned;
use socialize_types::{
    ActionId, Comment, Like, ListResult, PageWindow, Session, Share, SocialAction, UserId,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Query parameter carrying the current user's id on key lookups.
pub const USER_ID_PARAM: &str = "user_id";

/// An action record type with its own REST resource.
pub trait ActionResource:
    SocialAction + Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Resource name used in endpoint paths, e.g. `like`.
    const RESOURCE: &'static str;
}

impl ActionResource for Like {
    const RESOURCE: &'static str = "like";
}

impl ActionResource for Share {
    const RESOURCE: &'static str = "share";
}

impl ActionResource for Comment {
    const RESOURCE: &'static str = "comment";
}

/// Façade over an [`EntityProvider`] for one action resource.
pub struct ActionSystem<R: ActionResource> {
    provider: Arc<dyn EntityProvider<R>>,
    default_page: PageWindow,
}

impl<R: ActionResource> Clone for ActionSystem<R> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            default_page: self.default_page,
        }
    }
}

impl<R: ActionResource> ActionSystem<R> {
    /// Creates a system using the default page window from `config`.
    pub fn new(provider: Arc<dyn EntityProvider<R>>, config: &ApiConfig) -> Self {
        Self {
            provider,
            default_page: config.default_page,
        }
    }

    /// The window used by list calls without an explicit range.
    pub fn default_page(&self) -> PageWindow {
        self.default_page
    }

    // ── Async calls ──────────────────────────────────────────────

    /// Records `record` on the service as a single-element batch.
    pub async fn add(&self, session: &Session, record: R) -> ApiResult<R> {
        let endpoint = endpoint::resource_root(R::RESOURCE);
        debug!("Adding {} for entity {}", R::RESOURCE, record.entity_key());

        self.provider
            .create(session, &endpoint, vec![record])
            .await?
            .into_first()
            .ok_or_else(|| {
                ApiError::Protocol(format!("service created no {} record", R::RESOURCE))
            })
    }

    /// Lists actions on the entity `key` using the default window.
    pub async fn list_by_entity(&self, session: &Session, key: &str) -> ApiResult<ListResult<R>> {
        let PageWindow { start, end } = self.default_page;
        self.list_by_entity_paged(session, key, start, end).await
    }

    /// Lists actions on the entity `key` in `[start, end)`.
    pub async fn list_by_entity_paged(
        &self,
        session: &Session,
        key: &str,
        start: usize,
        end: usize,
    ) -> ApiResult<ListResult<R>> {
        let query = ListQuery::window(PageWindow::new(start, end)).with_key(key);
        self.list_entity_query(session, key, query).await
    }

    /// Lists actions by `user_id` using the default window.
    pub async fn list_by_user(
        &self,
        session: &Session,
        user_id: UserId,
    ) -> ApiResult<ListResult<R>> {
        let PageWindow { start, end } = self.default_page;
        self.list_by_user_paged(session, user_id, start, end).await
    }

    /// Lists actions by `user_id` in `[start, end)`.
    pub async fn list_by_user_paged(
        &self,
        session: &Session,
        user_id: UserId,
        start: usize,
        end: usize,
    ) -> ApiResult<ListResult<R>> {
        let endpoint = endpoint::by_user(R::RESOURCE, user_id);
        self.provider
            .list(session, &endpoint, ListQuery::window(PageWindow::new(start, end)))
            .await
    }

    /// Lists the actions with the given ids, in the order given.
    pub async fn list_by_ids(&self, session: &Session, ids: &[ActionId]) -> ApiResult<ListResult<R>> {
        let endpoint = endpoint::resource_root(R::RESOURCE);
        let query = ListQuery::window(self.default_page).with_ids(ids);
        self.provider.list(session, &endpoint, query).await
    }

    /// Looks up the current user's action on the entity `key`.
    ///
    /// The service has no single-object lookup by key, so this lists the
    /// first item for the entity filtered to the session user. An empty page
    /// becomes a 404 error.
    pub async fn get_by_key(&self, session: &Session, key: &str) -> ApiResult<R> {
        let query = ListQuery::window(PageWindow::first())
            .with_key(key)
            .with_param(USER_ID_PARAM, session.user_id().to_string());

        self.list_entity_query(session, key, query)
            .await?
            .into_first()
            .ok_or_else(|| {
                ApiError::not_found(format!(
                    "no {} by user {} on entity {}",
                    R::RESOURCE,
                    session.user_id(),
                    key
                ))
            })
    }

    /// Fetches one action by id.
    pub async fn get_by_id(&self, session: &Session, id: ActionId) -> ApiResult<R> {
        let endpoint = endpoint::resource_root(R::RESOURCE);
        self.provider.get(session, &endpoint, &id.to_string()).await
    }

    /// Deletes one action by id.
    pub async fn delete(&self, session: &Session, id: ActionId) -> ApiResult<()> {
        let endpoint = endpoint::resource_root(R::RESOURCE);
        self.provider.delete(session, &endpoint, &id.to_string()).await
    }

    async fn list_entity_query(
        &self,
        session: &Session,
        key: &str,
        query: ListQuery,
    ) -> ApiResult<ListResult<R>> {
        let endpoint = endpoint::by_entity(R::RESOURCE, key);
        self.provider.list(session, &endpoint, query).await
    }

    // ── Listener calls ───────────────────────────────────────────

    /// [`Self::add`], reporting through `listener.on_create`.
    pub fn add_with<L>(&self, session: Session, record: R, listener: L) -> JoinHandle<()>
    where
        L: ActionListener<R> + 'static,
    {
        let system = self.clone();
        spawn_notify(
            async move { system.add(&session, record).await.map(ActionOutcome::Created) },
            listener,
        )
    }

    /// [`Self::get_by_key`], reporting through `listener.on_get`.
    pub fn get_by_key_with<L>(&self, session: Session, key: String, listener: L) -> JoinHandle<()>
    where
        L: ActionListener<R> + 'static,
    {
        let system = self.clone();
        spawn_notify(
            async move { system.get_by_key(&session, &key).await.map(ActionOutcome::Got) },
            listener,
        )
    }

    /// [`Self::get_by_id`], reporting through `listener.on_get`.
    pub fn get_by_id_with<L>(&self, session: Session, id: ActionId, listener: L) -> JoinHandle<()>
    where
        L: ActionListener<R> + 'static,
    {
        let system = self.clone();
        spawn_notify(
            async move { system.get_by_id(&session, id).await.map(ActionOutcome::Got) },
            listener,
        )
    }

    /// [`Self::list_by_entity_paged`], reporting through `listener.on_list`.
    pub fn list_by_entity_with<L>(
        &self,
        session: Session,
        key: String,
        window: PageWindow,
        listener: L,
    ) -> JoinHandle<()>
    where
        L: ActionListener<R> + 'static,
    {
        let system = self.clone();
        spawn_notify(
            async move {
                system
                    .list_by_entity_paged(&session, &key, window.start, window.end)
                    .await
                    .map(ActionOutcome::Listed)
            },
            listener,
        )
    }

    /// [`Self::list_by_user_paged`], reporting through `listener.on_list`.
    pub fn list_by_user_with<L>(
        &self,
        session: Session,
        user_id: UserId,
        window: PageWindow,
        listener: L,
    ) -> JoinHandle<()>
    where
        L: ActionListener<R> + 'static,
    {
        let system = self.clone();
        spawn_notify(
            async move {
                system
                    .list_by_user_paged(&session, user_id, window.start, window.end)
                    .await
                    .map(ActionOutcome::Listed)
            },
            listener,
        )
    }

    /// [`Self::list_by_ids`], reporting through `listener.on_list`.
    pub fn list_by_ids_with<L>(
        &self,
        session: Session,
        ids: Vec<ActionId>,
        listener: L,
    ) -> JoinHandle<()>
    where
        L: ActionListener<R> + 'static,
    {
        let system = self.clone();
        spawn_notify(
            async move {
                system
                    .list_by_ids(&session, &ids)
                    .await
                    .map(ActionOutcome::Listed)
            },
            listener,
        )
    }

    /// [`Self::delete`], reporting through `listener.on_delete`.
    pub fn delete_with<L>(&self, session: Session, id: ActionId, listener: L) -> JoinHandle<()>
    where
        L: ActionListener<R> + 'static,
    {
        let system = self.clone();
        spawn_notify(
            async move {
                system
                    .delete(&session, id)
                    .await
                    .map(|()| ActionOutcome::Deleted)
            },
            listener,
        )
    }
}
