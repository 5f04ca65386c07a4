//! Sharing by email or SMS through the platform's composer.

use crate::context::ShareContext;
use crate::error::{ShareError, ShareResult};
use crate::handler::{ShareHandler, ShareHandlerListener, action_entity};
use crate::sharer::PostHooks;
use async_trait::async_trait;
use socialize_launch::{ComposeLauncher, LaunchOutcome};
use socialize_types::{PropagationInfo, ShareType, SocialAction};
use std::sync::Arc;
use tracing::{debug, info};

/// Message body: the share text, then the entity link on its own line.
pub fn compose_body(text: &str, info: &PropagationInfo) -> String {
    match info.entity_url.as_deref() {
        Some(url) if text.is_empty() => url.to_string(),
        Some(url) => format!("{text}\n\n{url}"),
        None => text.to_string(),
    }
}

async fn launch_composer(
    ctx: &ShareContext,
    launcher: ComposeLauncher,
    action: &dyn SocialAction,
    listener: &dyn ShareHandlerListener,
) -> ShareResult<()> {
    let kind = launcher.kind();
    let handle = ctx.launches().launch(Arc::new(launcher))?;
    debug!("Opened {} composer (request {})", kind, handle.request_code());

    match handle.outcome().await {
        LaunchOutcome::Completed(_) => info!("{} composer finished", kind),
        LaunchOutcome::Cancelled => info!("{} composer cancelled", kind),
        LaunchOutcome::Failed(e) => {
            let message = e.to_string();
            listener.on_error(ctx, action, &message, &ShareError::Launch(e));
        }
    }
    Ok(())
}

/// Opens the mail composer with the entity name as subject.
#[derive(Debug, Clone, Default)]
pub struct EmailShareHandler {
    chooser_title: Option<String>,
}

impl EmailShareHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets the user pick the mail app through a chooser with this title.
    pub fn with_chooser_title(mut self, title: impl Into<String>) -> Self {
        self.chooser_title = Some(title.into());
        self
    }

    fn launcher(&self, subject: &str, body: String) -> ComposeLauncher {
        let launcher = ComposeLauncher::email(subject, body);
        match &self.chooser_title {
            Some(title) => launcher.with_chooser_title(title.clone()),
            None => launcher,
        }
    }
}

impl PostHooks for EmailShareHandler {}

#[async_trait]
impl ShareHandler for EmailShareHandler {
    fn share_type(&self) -> ShareType {
        ShareType::Email
    }

    fn is_available_on_device(&self, ctx: &ShareContext) -> bool {
        ctx.host()
            .can_resolve(&ComposeLauncher::email("", "").compose_intent())
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
        let launcher = self.launcher(entity.display_name(), compose_body(text, info));
        launch_composer(ctx, launcher, action, listener).await
    }
}

/// Opens the SMS composer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsShareHandler;

impl SmsShareHandler {
    pub fn new() -> Self {
        Self
    }
}

impl PostHooks for SmsShareHandler {}

#[async_trait]
impl ShareHandler for SmsShareHandler {
    fn share_type(&self) -> ShareType {
        ShareType::Sms
    }

    fn is_available_on_device(&self, ctx: &ShareContext) -> bool {
        ctx.host()
            .can_resolve(&ComposeLauncher::sms("").compose_intent())
    }

    async fn handle(
        &self,
        ctx: &ShareContext,
        action: &dyn SocialAction,
        text: &str,
        info: &PropagationInfo,
        listener: &dyn ShareHandlerListener,
    ) -> ShareResult<()> {
        let launcher = ComposeLauncher::sms(compose_body(text, info));
        launch_composer(ctx, launcher, action, listener).await
    }
}
