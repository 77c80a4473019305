//! Brand endpoints

use shared::models::{Brand, BrandPayload};
use shared::response::BrandList;
use shared::{ApiResponse, EntityId, Page};

use super::{Ack, NicoApi, require_data, with_id};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::QueryParams;

impl<C: HttpClient> NicoApi<C> {
    /// One page of brands matching `search`
    pub async fn list_brands(&self, page: u32, size: u32, search: &str) -> ClientResult<Page<Brand>> {
        let query = QueryParams::new()
            .push("page", page)
            .push("size", size)
            .push("search", search);
        let response: ApiResponse<BrandList> = self.http().get("/api/brand/list", &query).await?;
        Ok(response.data.map(Page::from).unwrap_or_default())
    }

    pub async fn get_brand(&self, id: EntityId) -> ClientResult<Brand> {
        let response: ApiResponse<Brand> = self
            .http()
            .get(&with_id("/api/brand", id), &QueryParams::new())
            .await?;
        require_data(response, "brand")
    }

    pub async fn create_brand(&self, brand_name: &str) -> ClientResult<Ack> {
        let user_id = self.acting_user().await?;
        let query = QueryParams::new().push("userId", user_id);
        let body = BrandPayload {
            brand_name: brand_name.to_string(),
            user_id,
        };
        self.http().post("/api/brand/save", &query, &body).await
    }

    pub async fn update_brand(&self, id: EntityId, brand_name: &str) -> ClientResult<Ack> {
        let user_id = self.acting_user().await?;
        let query = QueryParams::new().push("userId", user_id);
        let body = BrandPayload {
            brand_name: brand_name.to_string(),
            user_id,
        };
        self.http()
            .put(&with_id("/api/brand/edit", id), &query, &body)
            .await
    }

    pub async fn delete_brand(&self, id: EntityId) -> ClientResult<Ack> {
        self.http()
            .delete(&with_id("/api/brand/delete", id), &QueryParams::new())
            .await
    }
}
