//! Typed endpoint API
//!
//! One `impl` block per entity, all on [`NicoApi`]. Methods return the
//! server envelope for writes (so callers can toast its message) and
//! normalised data for reads.

mod brand;
mod consultant;
mod consumer;
mod export;
mod inquiry;
mod product;
mod reminder;
mod user;

pub use inquiry::InquiryQuery;

use shared::{ApiResponse, EntityId};

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use crate::session::SessionStore;

/// Envelope of a write whose `data` the dashboard does not use
pub type Ack = ApiResponse<serde_json::Value>;

/// Typed REST API over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct NicoApi<C> {
    http: C,
}

impl<C: HttpClient> NicoApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn session(&self) -> &SessionStore {
        self.http.session()
    }

    /// Id of the signed-in user, sent as creator/updater
    pub async fn acting_user(&self) -> ClientResult<EntityId> {
        self.session().user_id().await
    }
}

/// `data` of a read, or an invalid-response error naming what was missing
pub(crate) fn require_data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
    response
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("missing {what} in response")))
}

/// Path with an id segment, e.g. `/api/brand/delete/7`
pub(crate) fn with_id(base: &str, id: EntityId) -> String {
    format!("{base}/{id}")
}
