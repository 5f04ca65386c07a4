use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use socialize_devserver::{CONSUMER_KEY_HEADER, DevStore, SharedStore, build_router};
use socialize_types::User;

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
async fn spawn_test_server() -> (String, SharedStore) {
    let store = DevStore::new("http://devserver.test")
        .with_user("token-69", User::new(69))
        .into_shared();
    let app = build_router(store.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://127.0.0.1:{}", port), store)
}

fn authed(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    request
        .bearer_auth("token-69")
        .header(CONSUMER_KEY_HEADER, "consumer")
}

// ── Routing ───────────────────────────────────────────────────────

#[tokio::test]
async fn health_endpoint() {
    let (base, _) = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/health", base)).await.unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unknown_resource_returns_404() {
    let (base, _) = spawn_test_server().await;
    let client = reqwest::Client::new();
    let resp = authed(client.get(format!("{}/v1/vote/", base)))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
}

// ── Auth ──────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_credentials_are_rejected() {
    let (base, _) = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/v1/like/", base)).await.unwrap();
    assert_eq!(resp.status(), 401);

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("{}/v1/like/", base))
        .bearer_auth("someone-else")
        .header(CONSUMER_KEY_HEADER, "consumer")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

// ── Create / list ─────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_id_user_and_date() {
    let (base, store) = spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = authed(client.post(format!("{}/v1/like/", base)))
        .json(&json!([{ "entity_key": "article-1" }]))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["items"][0]["id"], 1);
    assert_eq!(body["items"][0]["user"]["id"], 69);
    assert!(body["items"][0]["date"].is_string());
    assert_eq!(store.read().await.count("like"), 1);
}

#[tokio::test]
async fn create_requires_entity_key() {
    let (base, store) = spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = authed(client.post(format!("{}/v1/comment/", base)))
        .json(&json!([{ "text": "orphan" }]))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    assert_eq!(store.read().await.count("comment"), 0);
}

#[tokio::test]
async fn share_gets_propagation_info() {
    let (base, _) = spawn_test_server().await;
    let client = reqwest::Client::new();

    let body: Value = authed(client.post(format!("{}/v1/share/", base)))
        .json(&json!([{ "entity_key": "article-1", "medium": "twitter" }]))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body["items"][0]["propagation_info"]["entity_url"],
        "http://devserver.test/e/1"
    );
}

#[tokio::test]
async fn list_applies_window_and_filters() {
    let (base, _) = spawn_test_server().await;
    let client = reqwest::Client::new();
    authed(client.post(format!("{}/v1/like/", base)))
        .json(&json!([
            { "entity_key": "a" },
            { "entity_key": "b" },
            { "entity_key": "a" },
        ]))
        .send()
        .await
        .unwrap();

    let page: Value = authed(client.get(format!("{}/v1/entity/a/like/", base)))
        .query(&[("start", "0"), ("end", "1")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page["total_count"], 2);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);

    let by_ids: Value = authed(client.get(format!("{}/v1/like/", base)))
        .query(&[("id", "2"), ("id", "3")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_ids["total_count"], 2);

    let by_user: Value = authed(client.get(format!("{}/v1/user/70/like/", base)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_user["total_count"], 0);
}

#[tokio::test]
async fn bad_window_is_rejected() {
    let (base, _) = spawn_test_server().await;
    let client = reqwest::Client::new();
    let resp = authed(client.get(format!("{}/v1/like/", base)))
        .query(&[("start", "zero")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

// ── Get / delete ──────────────────────────────────────────────────

#[tokio::test]
async fn get_and_delete_by_id() {
    let (base, store) = spawn_test_server().await;
    let client = reqwest::Client::new();
    authed(client.post(format!("{}/v1/comment/", base)))
        .json(&json!([{ "entity_key": "a", "text": "hi" }]))
        .send()
        .await
        .unwrap();

    let got: Value = authed(client.get(format!("{}/v1/comment/1/", base)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(got["text"], "hi");

    let resp = authed(client.delete(format!("{}/v1/comment/1/", base)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
    assert_eq!(store.read().await.count("comment"), 0);

    let resp = authed(client.get(format!("{}/v1/comment/1/", base)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
