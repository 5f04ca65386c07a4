use socialize_api::provider::mock::{MockResponse, RecordingProvider};
use socialize_api::{
    ActionListener, ActionOutcome, ActionSystem, ApiConfig, ApiError, notify,
};
use socialize_types::{
    ActionId, ActionMetadata, Entity, Like, ListResult, PageWindow, Session, User,
};
use std::sync::{Arc, Mutex};

/// Records which callbacks fired.
#[derive(Clone, Default)]
struct RecordingListener {
    events: Arc<Mutex<Vec<String>>>,
    got: Arc<Mutex<Option<Like>>>,
    error: Arc<Mutex<Option<ApiError>>>,
}

impl RecordingListener {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ActionListener<Like> for RecordingListener {
    fn on_create(&self, _item: Like) {
        self.events.lock().unwrap().push("create".into());
    }

    fn on_get(&self, item: Like) {
        self.events.lock().unwrap().push("get".into());
        *self.got.lock().unwrap() = Some(item);
    }

    fn on_delete(&self) {
        self.events.lock().unwrap().push("delete".into());
    }

    fn on_list(&self, items: ListResult<Like>) {
        self.events
            .lock()
            .unwrap()
            .push(format!("list:{}", items.len()));
    }

    fn on_error(&self, error: ApiError) {
        self.events.lock().unwrap().push("error".into());
        *self.error.lock().unwrap() = Some(error);
    }
}

fn session() -> Session {
    Session::new(User::new(69), "consumer", "token")
}

fn make_system() -> (ActionSystem<Like>, Arc<RecordingProvider<Like>>) {
    let provider = Arc::new(RecordingProvider::<Like>::new());
    let system = ActionSystem::new(provider.clone(), &ApiConfig::default());
    (system, provider)
}

fn like(id: i64) -> Like {
    let mut like = Like::new(&Entity::new("foobar", None), ActionMetadata::default());
    like.id = Some(ActionId::new(id));
    like
}

// ── notify ────────────────────────────────────────────────────────

#[test]
fn notify_maps_each_outcome_to_one_callback() {
    let listener = RecordingListener::default();

    notify(Ok(ActionOutcome::Created(like(1))), &listener);
    notify(Ok(ActionOutcome::Got(like(2))), &listener);
    notify(Ok(ActionOutcome::Deleted), &listener);
    notify(
        Ok(ActionOutcome::Listed(ListResult::from_items(vec![like(3), like(4)]))),
        &listener,
    );
    notify(Err(ApiError::Network("down".into())), &listener);

    assert_eq!(
        listener.events(),
        vec!["create", "get", "delete", "list:2", "error"]
    );
}

#[test]
fn listener_success_callbacks_default_to_noop() {
    struct ErrorsOnly(Mutex<u32>);
    impl ActionListener<Like> for ErrorsOnly {
        fn on_error(&self, _error: ApiError) {
            *self.0.lock().unwrap() += 1;
        }
    }

    let listener = ErrorsOnly(Mutex::new(0));
    notify(Ok(ActionOutcome::Updated(like(1))), &listener);
    assert_eq!(*listener.0.lock().unwrap(), 0);
}

// ── get_by_key through a listener ─────────────────────────────────

#[tokio::test]
async fn get_by_key_with_results_fires_on_get_only() {
    let (system, provider) = make_system();
    provider.respond_with_items(vec![like(12)]);
    let listener = RecordingListener::default();

    system
        .get_by_key_with(session(), "foobar".into(), listener.clone())
        .await
        .unwrap();

    assert_eq!(listener.events(), vec!["get"]);
    assert_eq!(
        listener.got.lock().unwrap().as_ref().and_then(|l| l.id),
        Some(ActionId::new(12))
    );
}

#[tokio::test]
async fn get_by_key_with_no_results_fires_not_found_only() {
    let (system, provider) = make_system();
    provider.respond(MockResponse::Items(ListResult::empty()));
    let listener = RecordingListener::default();

    system
        .get_by_key_with(session(), "foobar".into(), listener.clone())
        .await
        .unwrap();

    assert_eq!(listener.events(), vec!["error"]);
    let error = listener.error.lock().unwrap().take().unwrap();
    assert_eq!(error.result_code(), Some(404));
}

// ── other listener calls ──────────────────────────────────────────

#[tokio::test]
async fn add_with_fires_on_create() {
    let (system, _provider) = make_system();
    let listener = RecordingListener::default();
    let record = Like::new(&Entity::new("foo", None), ActionMetadata::default());

    system
        .add_with(session(), record, listener.clone())
        .await
        .unwrap();

    assert_eq!(listener.events(), vec!["create"]);
}

#[tokio::test]
async fn list_by_entity_with_fires_on_list() {
    let (system, provider) = make_system();
    provider.respond_with_items(vec![like(1), like(2), like(3)]);
    let listener = RecordingListener::default();

    system
        .list_by_entity_with(
            session(),
            "foobar".into(),
            PageWindow::new(0, 10),
            listener.clone(),
        )
        .await
        .unwrap();

    assert_eq!(listener.events(), vec!["list:3"]);
}

#[tokio::test]
async fn delete_with_error_fires_on_error_once() {
    let (system, provider) = make_system();
    provider.respond_with_error(ApiError::Api {
        result_code: 403,
        message: "not yours".into(),
    });
    let listener = RecordingListener::default();

    system
        .delete_with(session(), ActionId::new(5), listener.clone())
        .await
        .unwrap();

    assert_eq!(listener.events(), vec!["error"]);
    assert_eq!(provider.calls().len(), 1);
}

#[tokio::test]
async fn get_by_id_with_missing_object_fires_on_error() {
    let (system, _provider) = make_system();
    let listener = RecordingListener::default();

    system
        .get_by_id_with(session(), ActionId::new(9), listener.clone())
        .await
        .unwrap();

    assert_eq!(listener.events(), vec!["error"]);
}
