//! Product endpoints

use shared::models::{Product, ProductPayload};
use shared::response::ProductList;
use shared::{ApiResponse, EntityId, Page};

use super::{Ack, NicoApi, with_id};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::QueryParams;

impl<C: HttpClient> NicoApi<C> {
    /// One page of products matching `search`, scoped by the signed-in user
    pub async fn list_products(
        &self,
        page: u32,
        size: u32,
        search: &str,
    ) -> ClientResult<Page<Product>> {
        let user_id = self.session().snapshot().await.user_id;
        let query = QueryParams::new()
            .push("search", search)
            .push("page", page)
            .push("size", size)
            .push_or_empty("userId", user_id);
        let response: ApiResponse<ProductList> =
            self.http().get("/api/product/list", &query).await?;
        Ok(response.data.map(Page::from).unwrap_or_default())
    }

    /// Products of any of `brand_ids`; the caller guarantees a non-empty list
    pub async fn products_by_brands(
        &self,
        brand_ids: &[EntityId],
        search: Option<&str>,
    ) -> ClientResult<Vec<Product>> {
        let mut query = QueryParams::new().push_ids("brandIds", brand_ids);
        if let Some(search) = search {
            query = query.push("page", 1).push("size", 10).push("search", search);
        }
        let response: ApiResponse<Vec<Product>> =
            self.http().get("/api/product/listByBrands", &query).await?;
        Ok(response.data.unwrap_or_default())
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> ClientResult<Ack> {
        self.http()
            .post("/api/product/create", &QueryParams::new(), payload)
            .await
    }

    pub async fn update_product(&self, id: EntityId, payload: &ProductPayload) -> ClientResult<Ack> {
        self.http()
            .put(&with_id("/api/product/update", id), &QueryParams::new(), payload)
            .await
    }

    pub async fn delete_product(&self, id: EntityId) -> ClientResult<Ack> {
        self.http()
            .delete(&with_id("/api/product/delete", id), &QueryParams::new())
            .await
    }
}
