use pretty_assertions::assert_eq;
use socialize_launch::LaunchTracker;
use socialize_launch::host::mock::RecordingHost;
use socialize_share::handler::mock::RecordingListener;
use socialize_share::sharer::mock::RecordingSharer;
use socialize_share::{
    EmailShareHandler, NetworkError, PostHooks, ShareContext, ShareDispatcher, ShareError,
    ShareHandler, ShareHandlerListener, ShareHandlers, ShareResult, SmsShareHandler,
    SocialNetworkShareHandler, SupportedProviders,
};
use socialize_types::{
    ActionMetadata, AuthProviderType, Entity, PropagationInfo, Share, ShareType, SocialAction,
};
use async_trait::async_trait;
use std::sync::Arc;

fn context(supported: Vec<AuthProviderType>) -> ShareContext {
    let tracker = Arc::new(LaunchTracker::new(Arc::new(RecordingHost::new())));
    ShareContext::new(tracker, Arc::new(SupportedProviders::new(supported)))
}

fn action() -> Share {
    Share::new(
        &Entity::new("entity-1", None),
        "hello",
        ShareType::Facebook,
        ActionMetadata::default(),
    )
}

// ── Lookup table ──────────────────────────────────────────────────

#[test]
fn handlers_are_keyed_by_share_type() {
    let handlers = ShareHandlers::new()
        .with(Arc::new(SmsShareHandler::new()))
        .with(Arc::new(EmailShareHandler::new()))
        .with(Arc::new(SocialNetworkShareHandler::new(Arc::new(
            RecordingSharer::new(ShareType::Twitter),
        ))));

    assert_eq!(handlers.len(), 3);
    assert_eq!(
        handlers.share_types(),
        vec![ShareType::Twitter, ShareType::Email, ShareType::Sms]
    );
    assert!(handlers.get(ShareType::Facebook).is_none());
    assert_eq!(
        handlers.get(ShareType::Email).map(|h| h.share_type()),
        Some(ShareType::Email)
    );
}

#[test]
fn register_replaces_existing_handler() {
    let mut handlers = ShareHandlers::new();
    assert!(handlers.register(Arc::new(SmsShareHandler::new())).is_none());
    assert!(handlers.register(Arc::new(SmsShareHandler::new())).is_some());
    assert_eq!(handlers.len(), 1);
}

#[test]
fn available_filters_by_device() {
    let handlers = ShareHandlers::new()
        .with(Arc::new(SocialNetworkShareHandler::new(Arc::new(
            RecordingSharer::new(ShareType::Facebook),
        ))))
        .with(Arc::new(SocialNetworkShareHandler::new(Arc::new(
            RecordingSharer::new(ShareType::Twitter),
        ))))
        .with(Arc::new(EmailShareHandler::new()));

    let ctx = context(vec![AuthProviderType::Twitter]);
    assert_eq!(
        handlers.available(&ctx),
        vec![ShareType::Twitter, ShareType::Email]
    );
}

// ── Dispatch ──────────────────────────────────────────────────────

#[tokio::test]
async fn dispatch_reaches_the_right_handler() {
    let facebook = Arc::new(RecordingSharer::new(ShareType::Facebook));
    let twitter = Arc::new(RecordingSharer::new(ShareType::Twitter));
    let dispatcher = ShareDispatcher::new(
        ShareHandlers::new()
            .with(Arc::new(SocialNetworkShareHandler::new(facebook.clone())))
            .with(Arc::new(SocialNetworkShareHandler::new(twitter.clone()))),
    );
    let ctx = context(vec![AuthProviderType::Facebook, AuthProviderType::Twitter]);
    let listener = RecordingListener::new();

    dispatcher
        .share(&ctx, ShareType::Twitter, &action(), "hello", &PropagationInfo::default(), &listener)
        .await;

    assert!(facebook.calls().is_empty());
    assert_eq!(twitter.calls().len(), 1);
    assert!(listener.errors().is_empty());
}

#[tokio::test]
async fn missing_handler_is_one_error() {
    let dispatcher = ShareDispatcher::default();
    let ctx = context(vec![]);
    let listener = RecordingListener::new();

    dispatcher
        .share(&ctx, ShareType::Facebook, &action(), "hello", &PropagationInfo::default(), &listener)
        .await;

    let errors = listener.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "no share handler registered for facebook");
}

#[tokio::test]
async fn unavailable_network_is_one_error_without_sharing() {
    let sharer = Arc::new(RecordingSharer::new(ShareType::Facebook));
    let dispatcher = ShareDispatcher::new(
        ShareHandlers::new().with(Arc::new(SocialNetworkShareHandler::new(sharer.clone()))),
    );
    let ctx = context(vec![]);
    let listener = RecordingListener::new();

    assert!(!dispatcher.is_available(ShareType::Facebook, &ctx));
    dispatcher
        .share(&ctx, ShareType::Facebook, &action(), "hello", &PropagationInfo::default(), &listener)
        .await;

    assert!(sharer.calls().is_empty());
    let errors = listener.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "facebook is not available on this device");
}

#[tokio::test]
async fn vendor_error_is_reported_once_through_dispatch() {
    let sharer = Arc::new(
        RecordingSharer::new(ShareType::Facebook)
            .failing_with(NetworkError::new(ShareType::Facebook, "rate limited")),
    );
    let dispatcher = ShareDispatcher::new(
        ShareHandlers::new().with(Arc::new(SocialNetworkShareHandler::new(sharer))),
    );
    let ctx = context(vec![AuthProviderType::Facebook]);
    let listener = RecordingListener::new();

    dispatcher
        .share(&ctx, ShareType::Facebook, &action(), "hello", &PropagationInfo::default(), &listener)
        .await;

    let errors = listener.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "rate limited");
    assert_eq!(errors[0].error, "facebook: rate limited");
}

struct FailingHandler;

impl PostHooks for FailingHandler {}

#[async_trait]
impl ShareHandler for FailingHandler {
    fn share_type(&self) -> ShareType {
        ShareType::Other
    }

    fn is_available_on_device(&self, _ctx: &ShareContext) -> bool {
        true
    }

    async fn handle(
        &self,
        _ctx: &ShareContext,
        _action: &dyn SocialAction,
        _text: &str,
        _info: &PropagationInfo,
        _listener: &dyn ShareHandlerListener,
    ) -> ShareResult<()> {
        Err(ShareError::Unavailable(ShareType::Other))
    }
}

#[tokio::test]
async fn handler_error_is_converted_to_one_on_error() {
    let dispatcher = ShareDispatcher::new(ShareHandlers::new().with(Arc::new(FailingHandler)));
    let ctx = context(vec![]);
    let listener = RecordingListener::new();

    dispatcher
        .share(&ctx, ShareType::Other, &action(), "hello", &PropagationInfo::default(), &listener)
        .await;

    let errors = listener.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].entity_key, "entity-1");
}
