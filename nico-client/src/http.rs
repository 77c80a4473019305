//! HTTP client - network communication with the REST service
//!
//! Every request reads the bearer token from the [`SessionStore`] at send
//! time. No retries, no caching, no timeout unless configured.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::query::QueryParams;
use crate::session::SessionStore;

/// Error body the service sends with a non-success status
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> ClientResult<T>;

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        query: &QueryParams,
        body: &B,
    ) -> ClientResult<T>;

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        query: &QueryParams,
        body: &B,
    ) -> ClientResult<T>;

    async fn delete<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> ClientResult<T>;

    /// GET returning the raw body (spreadsheet export)
    async fn download(&self, path: &str, query: &QueryParams) -> ClientResult<Vec<u8>>;

    /// Session the token is read from
    fn session(&self) -> &SessionStore;
}

/// Decode a success body. An empty body reads as `{}` and a plain-text body
/// as `{"message": text}`, so envelope types still come through.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> ClientResult<T> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return serde_json::from_str("{}")
            .map_err(|e| ClientError::InvalidResponse(format!("empty body: {e}")));
    }
    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(e) if serde_json::from_str::<serde_json::Value>(trimmed).is_err() => {
            serde_json::from_value(serde_json::json!({ "message": trimmed }))
                .map_err(|_| ClientError::InvalidResponse(e.to_string()))
        }
        Err(e) => Err(ClientError::Serialization(e)),
    }
}

/// Turn a non-success status and its body into a [`ClientError`]
pub(crate) fn error_from_body(status: u16, text: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(text)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| {
            // HTML error pages are noise, keep only short plain text
            if text.trim_start().starts_with('<') || text.len() > 200 {
                String::new()
            } else {
                text.trim().to_string()
            }
        });
    ClientError::from_status(status, message)
}

/// Network HTTP client (reqwest)
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig, session: SessionStore) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn authorize(&self, req: RequestBuilder, query: &QueryParams) -> RequestBuilder {
        let mut req = req;
        if !query.is_empty() {
            req = req.query(query.pairs());
        }
        if let Some(token) = self.session.token().await {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send(&self, req: RequestBuilder, query: &QueryParams) -> ClientResult<reqwest::Response> {
        let req = self.authorize(req, query).await;
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = error_from_body(status.as_u16(), &text);
            tracing::warn!(status = status.as_u16(), "Request failed: {err}");
            return Err(err);
        }
        Ok(response)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        query: &QueryParams,
    ) -> ClientResult<T> {
        let response = self.send(req, query).await?;
        let text = response.text().await?;
        decode_body(&text)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        let req = self.client.get(self.url(path));
        self.handle_response(req, query).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        query: &QueryParams,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let req = self.client.post(self.url(path)).json(body);
        self.handle_response(req, query).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        query: &QueryParams,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "PUT");
        let req = self.client.put(self.url(path)).json(body);
        self.handle_response(req, query).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> ClientResult<T> {
        tracing::debug!(path, "DELETE");
        let req = self.client.delete(self.url(path));
        self.handle_response(req, query).await
    }

    async fn download(&self, path: &str, query: &QueryParams) -> ClientResult<Vec<u8>> {
        tracing::debug!(path, "GET (download)");
        let req = self.client.get(self.url(path));
        let response = self.send(req, query).await?;
        Ok(response.bytes().await?.to_vec())
    }

    fn session(&self) -> &SessionStore {
        &self.session
    }
}
