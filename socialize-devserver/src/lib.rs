//! In-memory stand-in for the Socialize REST service.
//!
//! Serves the same endpoint grammar the SDK's HTTP provider speaks, under
//! `/v1`:
//!
//! - `POST   /v1/{resource}/`                 create (JSON array in, page out)
//! - `GET    /v1/{resource}/`                 list, optionally by `id`/`key`
//! - `GET    /v1/entity/{key}/{resource}/`    list by entity
//! - `GET    /v1/user/{id}/{resource}/`       list by user
//! - `GET    /v1/{resource}/{id}/`            get one
//! - `DELETE /v1/{resource}/{id}/`            delete one
//!
//! Lists honour `start`/`end` and an optional `user_id` filter. Requests are
//! authenticated by bearer token against users registered up front.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    routing::get,
};
use chrono::Utc;
use serde_json::{Value, json};
use socialize_types::{ListResult, User};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Resources the server knows.
pub const RESOURCES: [&str; 3] = ["like", "share", "comment"];

/// Header the SDK sends its consumer key in.
pub const CONSUMER_KEY_HEADER: &str = "X-Socialize-Consumer-Key";

type HandlerResult<T> = Result<T, (StatusCode, String)>;

/// Shared server state.
pub type SharedStore = Arc<RwLock<DevStore>>;

/// Registered users and stored action records.
#[derive(Debug)]
pub struct DevStore {
    public_url: String,
    users: HashMap<String, User>,
    records: HashMap<&'static str, Vec<Value>>,
    next_id: i64,
}

impl DevStore {
    /// `public_url` is used to build the entity links handed out with shares.
    pub fn new(public_url: impl Into<String>) -> Self {
        Self {
            public_url: public_url.into().trim_end_matches('/').to_string(),
            users: HashMap::new(),
            records: HashMap::new(),
            next_id: 0,
        }
    }

    /// Lets requests bearing `access_token` act as `user`.
    pub fn register_user(&mut self, access_token: impl Into<String>, user: User) {
        self.users.insert(access_token.into(), user);
    }

    pub fn with_user(mut self, access_token: impl Into<String>, user: User) -> Self {
        self.register_user(access_token, user);
        self
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// Number of stored records of `resource`.
    pub fn count(&self, resource: &str) -> usize {
        self.records.get(resource).map_or(0, Vec::len)
    }

    fn authenticate(&self, headers: &HeaderMap) -> HandlerResult<&User> {
        if !headers.contains_key(CONSUMER_KEY_HEADER) {
            return Err(unauthorized("missing consumer key"));
        }
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| unauthorized("missing bearer token"))?;
        self.users
            .get(token)
            .ok_or_else(|| unauthorized("unknown access token"))
    }

    fn stored(&self, resource: &str) -> &[Value] {
        self.records.get(resource).map(Vec::as_slice).unwrap_or_default()
    }

    fn propagation_info(&self, id: i64) -> Value {
        json!({
            "app_url": self.public_url,
            "entity_url": format!("{}/e/{}", self.public_url, id),
        })
    }
}

fn unauthorized(message: &str) -> (StatusCode, String) {
    (StatusCode::UNAUTHORIZED, message.to_string())
}

fn bad_request(message: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, message.into())
}

fn not_found(message: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, message.into())
}

fn resource_name(resource: &str) -> HandlerResult<&'static str> {
    RESOURCES
        .into_iter()
        .find(|r| *r == resource)
        .ok_or_else(|| not_found(format!("unknown resource {resource}")))
}

fn record_id(record: &Value) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

fn record_user_id(record: &Value) -> Option<i64> {
    record.pointer("/user/id").and_then(Value::as_i64)
}

/// Filters and window parsed from a list query string.
#[derive(Debug, Default)]
struct ListFilter {
    start: usize,
    end: Option<usize>,
    key: Option<String>,
    user_id: Option<i64>,
    ids: Vec<i64>,
}

impl ListFilter {
    fn parse(params: &[(String, String)]) -> HandlerResult<Self> {
        let mut filter = ListFilter::default();
        for (name, value) in params {
            let number = || {
                value
                    .parse::<i64>()
                    .map_err(|_| bad_request(format!("{name} must be a number")))
            };
            match name.as_str() {
                "start" => filter.start = number()?.max(0) as usize,
                "end" => filter.end = Some(number()?.max(0) as usize),
                "key" => filter.key = Some(value.clone()),
                "user_id" => filter.user_id = Some(number()?),
                "id" => filter.ids.push(number()?),
                _ => debug!("Ignoring query parameter {}", name),
            }
        }
        Ok(filter)
    }

    fn matches(&self, record: &Value) -> bool {
        let key_ok = self
            .key
            .as_deref()
            .is_none_or(|key| record.get("entity_key").and_then(Value::as_str) == Some(key));
        let user_ok = self.user_id.is_none_or(|id| record_user_id(record) == Some(id));
        let id_ok = self.ids.is_empty() || record_id(record).is_some_and(|id| self.ids.contains(&id));
        key_ok && user_ok && id_ok
    }

    fn page(&self, records: &[Value]) -> ListResult<Value> {
        let matching: Vec<&Value> = records.iter().filter(|r| self.matches(r)).collect();
        let total = matching.len();
        let end = self.end.unwrap_or(total).min(total);
        let start = self.start.min(end);
        ListResult::new(matching[start..end].iter().map(|r| (*r).clone()).collect(), total)
    }
}

async fn create(
    State(store): State<SharedStore>,
    Path(resource): Path<String>,
    headers: HeaderMap,
    Json(objects): Json<Vec<Value>>,
) -> HandlerResult<Json<ListResult<Value>>> {
    let resource = resource_name(&resource)?;
    let mut store = store.write().await;
    let user = serde_json::to_value(store.authenticate(&headers)?)
        .map_err(|e| bad_request(e.to_string()))?;

    let mut created = Vec::with_capacity(objects.len());
    for object in objects {
        let Value::Object(mut fields) = object else {
            return Err(bad_request("expected an array of objects"));
        };
        if !fields.get("entity_key").is_some_and(Value::is_string) {
            return Err(bad_request("entity_key is required"));
        }

        store.next_id += 1;
        let id = store.next_id;
        fields.insert("id".to_string(), json!(id));
        fields.insert("user".to_string(), user.clone());
        fields.insert("date".to_string(), json!(Utc::now()));
        if resource == "share" && !fields.contains_key("propagation_info") {
            fields.insert("propagation_info".to_string(), store.propagation_info(id));
        }
        created.push(Value::Object(fields));
    }

    store
        .records
        .entry(resource)
        .or_default()
        .extend(created.iter().cloned());
    info!("Created {} {}(s)", created.len(), resource);
    Ok(Json(ListResult::from_items(created)))
}

async fn list(
    State(store): State<SharedStore>,
    Path(resource): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> HandlerResult<Json<ListResult<Value>>> {
    let resource = resource_name(&resource)?;
    let filter = ListFilter::parse(&params)?;
    let store = store.read().await;
    store.authenticate(&headers)?;
    Ok(Json(filter.page(store.stored(resource))))
}

async fn list_by_entity(
    State(store): State<SharedStore>,
    Path((key, resource)): Path<(String, String)>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> HandlerResult<Json<ListResult<Value>>> {
    let resource = resource_name(&resource)?;
    let mut filter = ListFilter::parse(&params)?;
    filter.key = Some(key);
    let store = store.read().await;
    store.authenticate(&headers)?;
    Ok(Json(filter.page(store.stored(resource))))
}

async fn list_by_user(
    State(store): State<SharedStore>,
    Path((user_id, resource)): Path<(i64, String)>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> HandlerResult<Json<ListResult<Value>>> {
    let resource = resource_name(&resource)?;
    let mut filter = ListFilter::parse(&params)?;
    filter.user_id = Some(user_id);
    let store = store.read().await;
    store.authenticate(&headers)?;
    Ok(Json(filter.page(store.stored(resource))))
}

async fn get_one(
    State(store): State<SharedStore>,
    Path((resource, id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> HandlerResult<Json<Value>> {
    let resource = resource_name(&resource)?;
    let store = store.read().await;
    store.authenticate(&headers)?;
    store
        .stored(resource)
        .iter()
        .find(|r| record_id(r) == Some(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(format!("{resource} {id} not found")))
}

async fn delete_one(
    State(store): State<SharedStore>,
    Path((resource, id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> HandlerResult<StatusCode> {
    let resource = resource_name(&resource)?;
    let mut store = store.write().await;
    store.authenticate(&headers)?;

    let records = store.records.entry(resource).or_default();
    let before = records.len();
    records.retain(|r| record_id(r) != Some(id));
    if records.len() == before {
        return Err(not_found(format!("{resource} {id} not found")));
    }
    info!("Deleted {} {}", resource, id);
    Ok(StatusCode::NO_CONTENT)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Build the HTTP API router over `store`.
pub fn build_router(store: SharedStore) -> Router {
    let api = Router::new()
        .route("/{resource}/", get(list).post(create))
        .route("/{resource}/{id}/", get(get_one).delete(delete_one))
        .route("/entity/{key}/{resource}/", get(list_by_entity))
        .route("/user/{id}/{resource}/", get(list_by_user));

    Router::new()
        .route("/health", get(health))
        .nest("/v1", api)
        .with_state(store)
}
