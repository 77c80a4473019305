//! Consultant endpoints

use shared::ApiResponse;
use shared::models::{Consultant, ConsultantPayload};
use shared::response::ConsultantList;

use super::{Ack, NicoApi};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::QueryParams;

impl<C: HttpClient> NicoApi<C> {
    pub async fn list_consultants(&self, search: &str) -> ClientResult<Vec<Consultant>> {
        let query = QueryParams::new().push("search", search);
        let response: ApiResponse<ConsultantList> =
            self.http().get("/api/consultant/all", &query).await?;
        Ok(response.data.map(|d| d.consultants).unwrap_or_default())
    }

    pub async fn create_consultant(&self, payload: &ConsultantPayload) -> ClientResult<Ack> {
        self.http()
            .post("/api/consultant/save", &QueryParams::new(), payload)
            .await
    }
}
