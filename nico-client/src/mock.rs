//! In-memory [`HttpClient`] for tests
//!
//! Records every request and answers from canned replies keyed by method
//! and path. Unregistered routes answer `{}`, which reads as an envelope
//! with neither message nor data.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::EntityId;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use crate::query::QueryParams;
use crate::session::{Session, SessionStore};

pub use ::http::Method;

/// Canned reply
#[derive(Debug, Clone)]
pub enum MockReply {
    Json(Value),
    Status(u16, String),
    Bytes(Vec<u8>),
}

impl MockReply {
    /// `{"message": .., "data": ..}` envelope
    pub fn ok(message: Option<&str>, data: Value) -> Self {
        MockReply::Json(serde_json::json!({ "message": message, "data": data }))
    }

    pub fn message(message: &str) -> Self {
        MockReply::Json(serde_json::json!({ "message": message }))
    }

    pub fn status(status: u16, message: &str) -> Self {
        MockReply::Status(status, message.to_string())
    }
}

/// One request as the client sent it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct MockState {
    routes: HashMap<(Method, String), VecDeque<MockReply>>,
    requests: Vec<RecordedRequest>,
}

/// Recording test double; clones share replies and the request log
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
    session: SessionStore,
}

impl MockHttpClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            session,
        }
    }

    /// Client with an in-memory session for `user_id`
    pub fn signed_in(user_id: EntityId, role: &str) -> Self {
        Self::new(SessionStore::in_memory(Session {
            token: Some("test-token".into()),
            user_id: Some(user_id),
            user_role: Some(role.to_string()),
        }))
    }

    /// Queue a reply for `method path`; the last queued reply repeats
    pub fn on(&self, method: Method, path: &str, reply: MockReply) -> &Self {
        self.lock()
            .routes
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Requests sent to `path` with `method`
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests_to(method, path).len()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.lock().requests.last().cloned()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // a panicking test must not poison the others sharing this client
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn respond(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: Option<Value>,
    ) -> MockReply {
        let mut state = self.lock();
        state.requests.push(RecordedRequest {
            method: method.clone(),
            path: path.to_string(),
            query: query.clone(),
            body,
        });
        match state.routes.get_mut(&(method, path.to_string())) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(MockReply::Json(Value::Null)),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| MockReply::Json(serde_json::json!({}))),
            None => MockReply::Json(serde_json::json!({})),
        }
    }

    fn decode<T: DeserializeOwned>(reply: MockReply) -> ClientResult<T> {
        match reply {
            MockReply::Json(value) => Ok(serde_json::from_value(value)?),
            MockReply::Status(status, message) => Err(ClientError::from_status(status, message)),
            MockReply::Bytes(_) => Err(ClientError::InvalidResponse("binary body".into())),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> ClientResult<T> {
        Self::decode(self.respond(Method::GET, path, query, None))
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        query: &QueryParams,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        Self::decode(self.respond(Method::POST, path, query, Some(body)))
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        query: &QueryParams,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        Self::decode(self.respond(Method::PUT, path, query, Some(body)))
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> ClientResult<T> {
        Self::decode(self.respond(Method::DELETE, path, query, None))
    }

    async fn download(&self, path: &str, query: &QueryParams) -> ClientResult<Vec<u8>> {
        match self.respond(Method::GET, path, query, None) {
            MockReply::Bytes(bytes) => Ok(bytes),
            MockReply::Status(status, message) => Err(ClientError::from_status(status, message)),
            MockReply::Json(value) => Ok(serde_json::to_vec(&value)?),
        }
    }

    fn session(&self) -> &SessionStore {
        &self.session
    }
}
