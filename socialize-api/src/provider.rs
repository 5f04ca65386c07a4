//! Entity provider abstraction.
//!
//! A provider is the generic create/read/delete/list transport for one
//! resource type. Action systems build endpoints and queries; the provider
//! turns them into requests. Every call resolves exactly once.

use crate::error::ApiResult;
use async_trait::async_trait;
use socialize_types::{ListResult, PageWindow, Session};
use std::collections::BTreeMap;

/// Parameters for a list call.
///
/// Covers both the simple key-based form and the full
/// pagination-plus-extra-params form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Entity key filter.
    pub key: Option<String>,
    /// Query parameter name used for `ids` (defaults to `id`).
    pub id_key: Option<String>,
    pub extra_params: BTreeMap<String, String>,
    pub window: PageWindow,
    /// Object ids, already in decimal string form.
    pub ids: Vec<String>,
}

impl ListQuery {
    /// A query over `window` with no filters.
    pub fn window(window: PageWindow) -> Self {
        Self {
            window,
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.ids = ids.into_iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.insert(name.into(), value.into());
        self
    }
}

/// Generic CRUD transport for a resource type `T`.
#[async_trait]
pub trait EntityProvider<T: Send + 'static>: Send + Sync {
    /// Creates a batch of objects; returns what the service created.
    async fn create(
        &self,
        session: &Session,
        endpoint: &str,
        objects: Vec<T>,
    ) -> ApiResult<ListResult<T>>;

    /// Fetches the single object `id` under `endpoint`.
    async fn get(&self, session: &Session, endpoint: &str, id: &str) -> ApiResult<T>;

    async fn list(
        &self,
        session: &Session,
        endpoint: &str,
        query: ListQuery,
    ) -> ApiResult<ListResult<T>>;

    async fn delete(&self, session: &Session, endpoint: &str, id: &str) -> ApiResult<()>;
}

/// A recording provider for testing.
pub mod mock {
    use super::*;
    use crate::error::ApiError;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A call observed by [`RecordingProvider`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum ProviderCall<T> {
        Create { endpoint: String, objects: Vec<T> },
        Get { endpoint: String, id: String },
        List { endpoint: String, query: ListQuery },
        Delete { endpoint: String, id: String },
    }

    /// A canned answer for the next call.
    #[derive(Debug)]
    pub enum MockResponse<T> {
        Items(ListResult<T>),
        Item(T),
        Done,
        Error(ApiError),
    }

    /// Provider that records every call and answers from a queue.
    ///
    /// With an empty queue, `create` echoes the submitted objects, `list`
    /// returns an empty page, `get` fails with 404 and `delete` succeeds.
    #[derive(Debug)]
    pub struct RecordingProvider<T> {
        calls: Mutex<Vec<ProviderCall<T>>>,
        responses: Mutex<VecDeque<MockResponse<T>>>,
    }

    impl<T> Default for RecordingProvider<T> {
        fn default() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                responses: Mutex::new(VecDeque::new()),
            }
        }
    }

    impl<T: Clone> RecordingProvider<T> {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a response for the next call.
        pub fn respond(&self, response: MockResponse<T>) {
            self.responses.lock().unwrap().push_back(response);
        }

        /// Queues a list response.
        pub fn respond_with_items(&self, items: Vec<T>) {
            self.respond(MockResponse::Items(ListResult::from_items(items)));
        }

        /// Queues an error response.
        pub fn respond_with_error(&self, error: ApiError) {
            self.respond(MockResponse::Error(error));
        }

        /// All calls observed so far.
        pub fn calls(&self) -> Vec<ProviderCall<T>> {
            self.calls.lock().unwrap().clone()
        }

        /// The most recent call.
        pub fn last_call(&self) -> Option<ProviderCall<T>> {
            self.calls.lock().unwrap().last().cloned()
        }

        fn record(&self, call: ProviderCall<T>) -> Option<MockResponse<T>> {
            self.calls.lock().unwrap().push(call);
            self.responses.lock().unwrap().pop_front()
        }
    }

    fn unexpected<T>(response: MockResponse<T>, call: &str) -> ApiError {
        let kind = match response {
            MockResponse::Items(_) => "items",
            MockResponse::Item(_) => "item",
            MockResponse::Done => "done",
            MockResponse::Error(e) => return e,
        };
        ApiError::Protocol(format!("mock answered {call} with {kind}"))
    }

    #[async_trait]
    impl<T: Clone + Send + Sync + 'static> EntityProvider<T> for RecordingProvider<T> {
        async fn create(
            &self,
            _session: &Session,
            endpoint: &str,
            objects: Vec<T>,
        ) -> ApiResult<ListResult<T>> {
            let echo = objects.clone();
            match self.record(ProviderCall::Create {
                endpoint: endpoint.to_string(),
                objects,
            }) {
                None => Ok(ListResult::from_items(echo)),
                Some(MockResponse::Items(items)) => Ok(items),
                Some(other) => Err(unexpected(other, "create")),
            }
        }

        async fn get(&self, _session: &Session, endpoint: &str, id: &str) -> ApiResult<T> {
            match self.record(ProviderCall::Get {
                endpoint: endpoint.to_string(),
                id: id.to_string(),
            }) {
                None => Err(ApiError::not_found(format!("{endpoint}{id}"))),
                Some(MockResponse::Item(item)) => Ok(item),
                Some(other) => Err(unexpected(other, "get")),
            }
        }

        async fn list(
            &self,
            _session: &Session,
            endpoint: &str,
            query: ListQuery,
        ) -> ApiResult<ListResult<T>> {
            match self.record(ProviderCall::List {
                endpoint: endpoint.to_string(),
                query,
            }) {
                None => Ok(ListResult::empty()),
                Some(MockResponse::Items(items)) => Ok(items),
                Some(other) => Err(unexpected(other, "list")),
            }
        }

        async fn delete(&self, _session: &Session, endpoint: &str, id: &str) -> ApiResult<()> {
            match self.record(ProviderCall::Delete {
                endpoint: endpoint.to_string(),
                id: id.to_string(),
            }) {
                None | Some(MockResponse::Done) => Ok(()),
                Some(other) => Err(unexpected(other, "delete")),
            }
        }
    }
}
