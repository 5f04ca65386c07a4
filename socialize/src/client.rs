//! The client a host application holds.

use crate::config::SocializeConfig;
use crate::error::{Error, Result};
use crate::host::{EntityLoader, PermissionCheck, RECEIVE_PERMISSION, message_permission};
use socialize_api::{CommentSystem, HttpProvider, LikeSystem, ShareSystem};
use socialize_launch::{EntityLauncher, LaunchHandle, LaunchTracker};
use socialize_share::{ShareContext, ShareDispatcher, ShareHandlerListener, ShareHandlers};
use socialize_types::{
    ActionMetadata, Comment, Entity, Like, PropagationInfo, Session, Share, ShareType,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Likes, shares and comments for one signed-in user.
#[derive(Clone)]
pub struct Socialize {
    config: SocializeConfig,
    session: Session,
    likes: LikeSystem,
    shares: ShareSystem,
    comments: CommentSystem,
    dispatcher: ShareDispatcher,
    entity_loader: Option<Arc<dyn EntityLoader>>,
}

impl Socialize {
    /// Connects to the service described by `config.api`.
    pub fn new(config: SocializeConfig, session: Session) -> Result<Self> {
        if config.consumer_key.trim().is_empty() {
            return Err(Error::Config("consumer_key is required".to_string()));
        }
        config.validate()?;

        let likes = LikeSystem::new(Arc::new(HttpProvider::new(config.api.clone())?), &config.api);
        let shares =
            ShareSystem::new(Arc::new(HttpProvider::new(config.api.clone())?), &config.api);
        let comments =
            CommentSystem::new(Arc::new(HttpProvider::new(config.api.clone())?), &config.api);

        info!(
            "Socialize client for user {} against {}",
            session.user_id(),
            config.api.api_base_url
        );
        Ok(Self::with_systems(config, session, likes, shares, comments))
    }

    /// Builds a client over already-wired action systems.
    pub fn with_systems(
        config: SocializeConfig,
        session: Session,
        likes: LikeSystem,
        shares: ShareSystem,
        comments: CommentSystem,
    ) -> Self {
        Self {
            config,
            session,
            likes,
            shares,
            comments,
            dispatcher: ShareDispatcher::default(),
            entity_loader: None,
        }
    }

    pub fn with_share_handlers(mut self, handlers: ShareHandlers) -> Self {
        self.dispatcher = ShareDispatcher::new(handlers);
        self
    }

    pub fn with_entity_loader(mut self, loader: Arc<dyn EntityLoader>) -> Self {
        self.entity_loader = Some(loader);
        self
    }

    pub fn config(&self) -> &SocializeConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn likes(&self) -> &LikeSystem {
        &self.likes
    }

    pub fn shares(&self) -> &ShareSystem {
        &self.shares
    }

    pub fn comments(&self) -> &CommentSystem {
        &self.comments
    }

    pub fn dispatcher(&self) -> &ShareDispatcher {
        &self.dispatcher
    }

    pub async fn like(&self, entity: &Entity, metadata: ActionMetadata) -> Result<Like> {
        Ok(self.likes.add_like(&self.session, entity, metadata).await?)
    }

    pub async fn comment(
        &self,
        entity: &Entity,
        text: &str,
        metadata: ActionMetadata,
    ) -> Result<Comment> {
        Ok(self
            .comments
            .add_comment(&self.session, entity, text, metadata)
            .await?)
    }

    /// Records a share on the service, then propagates it to `share_type`.
    ///
    /// A failure to record is returned and nothing is propagated. Propagation
    /// failures go to `listener`; the recorded share is returned regardless.
    /// Composer flows keep this pending until the composer closes; use
    /// [`Socialize::spawn_share_via`] to get the record back first.
    pub async fn share_via(
        &self,
        ctx: &ShareContext,
        entity: &Entity,
        text: &str,
        share_type: ShareType,
        metadata: ActionMetadata,
        listener: &dyn ShareHandlerListener,
    ) -> Result<Share> {
        let share = self
            .shares
            .add_share(&self.session, entity, text, share_type, metadata)
            .await?;

        if share_type == ShareType::Other {
            debug!("Share of {} recorded without propagation", entity.key());
            return Ok(share);
        }

        let info = share.propagation_info.clone().unwrap_or_default();
        self.dispatcher
            .share(ctx, share_type, &share, text, &info, listener)
            .await;
        Ok(share)
    }

    /// Like [`Socialize::share_via`], but returns as soon as the share is
    /// recorded. Propagation runs on a spawned task; its handle is `None` for
    /// [`ShareType::Other`].
    pub async fn spawn_share_via(
        &self,
        ctx: ShareContext,
        entity: &Entity,
        text: &str,
        share_type: ShareType,
        metadata: ActionMetadata,
        listener: Arc<dyn ShareHandlerListener>,
    ) -> Result<(Share, Option<JoinHandle<()>>)> {
        let share = self
            .shares
            .add_share(&self.session, entity, text, share_type, metadata)
            .await?;

        if share_type == ShareType::Other {
            debug!("Share of {} recorded without propagation", entity.key());
            return Ok((share, None));
        }

        let dispatcher = self.dispatcher.clone();
        let action = share.clone();
        let text = text.to_string();
        let propagation = tokio::spawn(async move {
            let info = action.propagation_info.clone().unwrap_or_default();
            dispatcher
                .share(&ctx, share_type, &action, &text, &info, listener.as_ref())
                .await;
        });
        Ok((share, Some(propagation)))
    }

    /// Shows `entity`: in the host app if its loader accepts it, otherwise by
    /// opening the entity URL.
    pub fn open_entity(
        &self,
        launches: &LaunchTracker,
        entity: &Entity,
        info: &PropagationInfo,
    ) -> Result<Option<LaunchHandle>> {
        if let Some(loader) = &self.entity_loader {
            if loader.can_load(entity) {
                debug!("Loading {} in the host app", entity.key());
                loader.load_entity(entity);
                return Ok(None);
            }
        }

        let url = info.entity_url.clone().unwrap_or_default();
        let handle = launches.launch(Arc::new(EntityLauncher::new(url)))?;
        Ok(Some(handle))
    }

    /// Whether push notifications can be used on this device.
    pub fn is_notifications_available(&self, permissions: &dyn PermissionCheck) -> bool {
        if !self.config.notifications_enabled {
            debug!("Notifications disabled in config");
            return false;
        }

        let mut available = true;
        for permission in [
            message_permission(permissions.package_name()),
            RECEIVE_PERMISSION.to_string(),
        ] {
            if !permissions.has_permission(&permission) {
                warn!("Notifications unavailable: missing permission {}", permission);
                available = false;
            }
        }

        if self.config.entity_loader_check_enabled && self.entity_loader.is_none() {
            warn!("Notifications unavailable: no entity loader set");
            available = false;
        }
        available
    }
}

impl std::fmt::Debug for Socialize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Socialize")
            .field("user", &self.session.user_id())
            .field("api_base_url", &self.config.api.api_base_url)
            .field("share_types", &self.dispatcher.handlers().share_types())
            .finish_non_exhaustive()
    }
}
