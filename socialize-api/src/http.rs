//! HTTP entity provider.
//!
//! Talks JSON to the Socialize REST API over reqwest.

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::provider::{EntityProvider, ListQuery};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use socialize_types::{ListResult, Session};
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, info};

/// Header carrying the application's consumer key.
pub const CONSUMER_KEY_HEADER: &str = "X-Socialize-Consumer-Key";
/// Header carrying the device id.
pub const DEVICE_HEADER: &str = "X-Socialize-Device";

/// Entity provider backed by the Socialize REST API.
pub struct HttpProvider<T> {
    config: ApiConfig,
    client: Client,
    _resource: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpProvider<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<T> HttpProvider<T> {
    /// Creates a provider with its own HTTP client.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let base = config.api_base_url.as_str();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ApiError::Config(format!("api_base_url must be http(s): {base:?}")));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self::with_client(config, client))
    }

    /// Creates a provider sharing an existing client.
    pub fn with_client(config: ApiConfig, client: Client) -> Self {
        Self {
            config,
            client,
            _resource: PhantomData,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.api_base_url.trim_end_matches('/'), endpoint)
    }

    fn object_url(&self, endpoint: &str, id: &str) -> String {
        let endpoint = endpoint.trim_end_matches('/');
        self.url(&format!("{endpoint}/{}/", urlencoding::encode(id)))
    }

    fn authorize(&self, request: RequestBuilder, session: &Session) -> RequestBuilder {
        request
            .bearer_auth(&session.access_token)
            .header(CONSUMER_KEY_HEADER, &session.consumer_key)
            .header(DEVICE_HEADER, session.device_id.to_string())
    }
}

/// Maps a non-success response into `ApiError::Api`, keeping the body as the message.
/// Reads the whole body, then decodes it as JSON.
async fn decode<R: DeserializeOwned>(response: Response) -> ApiResult<R> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

async fn check_status(response: Response, action: &str) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.is_empty() {
        format!("{action} failed")
    } else {
        format!("{action} failed: {body}")
    };

    Err(ApiError::Api {
        result_code: status.as_u16(),
        message,
    })
}

fn list_params(query: &ListQuery) -> Vec<(String, String)> {
    let mut params = vec![
        ("start".to_string(), query.window.start.to_string()),
        ("end".to_string(), query.window.end.to_string()),
    ];

    if let Some(key) = &query.key {
        params.push(("key".to_string(), key.clone()));
    }

    let id_key = query.id_key.as_deref().unwrap_or("id");
    for id in &query.ids {
        params.push((id_key.to_string(), id.clone()));
    }

    for (name, value) in &query.extra_params {
        params.push((name.clone(), value.clone()));
    }

    params
}

#[async_trait]
impl<T> EntityProvider<T> for HttpProvider<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn create(
        &self,
        session: &Session,
        endpoint: &str,
        objects: Vec<T>,
    ) -> ApiResult<ListResult<T>> {
        debug!("POST {} ({} objects)", endpoint, objects.len());

        let response = self
            .authorize(self.client.post(self.url(endpoint)), session)
            .json(&objects)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("create failed: {e}")))?;

        let response = check_status(response, "create").await?;
        let created: ListResult<T> = decode(response).await?;

        info!("Created {} object(s) at {}", created.items.len(), endpoint);
        Ok(created)
    }

    async fn get(&self, session: &Session, endpoint: &str, id: &str) -> ApiResult<T> {
        debug!("GET {}{}", endpoint, id);

        let response = self
            .authorize(self.client.get(self.object_url(endpoint, id)), session)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("get failed: {e}")))?;

        let response = check_status(response, "get").await?;
        decode(response).await
    }

    async fn list(
        &self,
        session: &Session,
        endpoint: &str,
        query: ListQuery,
    ) -> ApiResult<ListResult<T>> {
        debug!(
            "GET {} [{}, {})",
            endpoint, query.window.start, query.window.end
        );

        let response = self
            .authorize(self.client.get(self.url(endpoint)), session)
            .query(&list_params(&query))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("list failed: {e}")))?;

        let response = check_status(response, "list").await?;
        decode(response).await
    }

    async fn delete(&self, session: &Session, endpoint: &str, id: &str) -> ApiResult<()> {
        debug!("DELETE {}{}", endpoint, id);

        let response = self
            .authorize(self.client.delete(self.object_url(endpoint, id)), session)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("delete failed: {e}")))?;

        check_status(response, "delete").await?;
        info!("Deleted {}{}", endpoint, id);
        Ok(())
    }
}
