//! Consumer endpoints

use shared::ApiResponse;
use shared::models::{Consumer, ConsumerPayload};
use shared::response::ConsumerList;

use super::{Ack, NicoApi};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::QueryParams;

impl<C: HttpClient> NicoApi<C> {
    pub async fn list_consumers(&self, search: &str) -> ClientResult<Vec<Consumer>> {
        let query = QueryParams::new().push("search", search);
        let response: ApiResponse<ConsumerList> =
            self.http().get("/api/consumer/all", &query).await?;
        Ok(response.data.map(|d| d.consumers).unwrap_or_default())
    }

    pub async fn create_consumer(&self, payload: &ConsumerPayload) -> ClientResult<Ack> {
        self.http()
            .post("/api/consumer/save", &QueryParams::new(), payload)
            .await
    }
}
