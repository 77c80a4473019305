//! Inquiry endpoints, including the workflow actions

use shared::models::{
    DescriptionPayload, Inquiry, InquiryFilter, InquiryPayload, QuotationPayload,
    StatusUpdatePayload, WinLossPayload,
};
use shared::response::InquiryList;
use shared::{ApiResponse, EntityId, Page};

use super::{Ack, NicoApi, require_data, with_id};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::QueryParams;

/// Parameters of `/api/inquiry/all`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryQuery {
    pub page: u32,
    pub size: u32,
    pub search: String,
    pub filter: InquiryFilter,
    /// `isfortotal`, always set by the dashboard list
    pub for_total: bool,
}

impl InquiryQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            search: String::new(),
            filter: InquiryFilter::default(),
            for_total: true,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, filter: InquiryFilter) -> Self {
        self.filter = filter;
        self
    }

    fn to_params(&self, user_id: Option<EntityId>) -> QueryParams {
        let f = &self.filter;
        QueryParams::new()
            .push("page", self.page)
            .push("size", self.size)
            .push("search", &self.search)
            .push_or_empty("userId", user_id)
            .push_or_empty("inquiry-status", f.status)
            .push_or_empty("followUpQuotationId", f.follow_up_quotation)
            .push_or_empty("followUpUserId", f.follow_up_user)
            .push_or_empty("consumerId", f.consumer)
            .push_or_empty("consultantId", f.consultant)
            .push_or_empty("brandId", f.brand)
            .push_or_empty("winorloss", f.win_or_loss)
            .push("isfortotal", self.for_total)
    }
}

impl<C: HttpClient> NicoApi<C> {
    pub async fn list_inquiries(&self, query: &InquiryQuery) -> ClientResult<Page<Inquiry>> {
        let user_id = self.session().snapshot().await.user_id;
        let params = query.to_params(user_id);
        let response: ApiResponse<InquiryList> = self.http().get("/api/inquiry/all", &params).await?;
        Ok(response.data.map(Page::from).unwrap_or_default())
    }

    /// Full inquiry, with the description history
    pub async fn get_inquiry(&self, id: EntityId) -> ClientResult<Inquiry> {
        let response: ApiResponse<Inquiry> = self
            .http()
            .get(&with_id("/api/inquiry/get", id), &QueryParams::new())
            .await?;
        require_data(response, "inquiry")
    }

    pub async fn create_inquiry(&self, payload: &InquiryPayload) -> ClientResult<Ack> {
        self.http()
            .post("/api/inquiry/save", &QueryParams::new(), payload)
            .await
    }

    pub async fn update_inquiry(&self, id: EntityId, payload: &InquiryPayload) -> ClientResult<Ack> {
        self.http()
            .put(&with_id("/api/inquiry/update", id), &QueryParams::new(), payload)
            .await
    }

    /// Status change goes through the update endpoint with a slimmer body
    pub async fn update_inquiry_status(
        &self,
        id: EntityId,
        payload: &StatusUpdatePayload,
    ) -> ClientResult<Ack> {
        self.http()
            .put(&with_id("/api/inquiry/update", id), &QueryParams::new(), payload)
            .await
    }

    pub async fn delete_inquiry(&self, id: EntityId) -> ClientResult<Ack> {
        self.http()
            .delete(&with_id("/api/inquiry/delete", id), &QueryParams::new())
            .await
    }

    /// Record the outcome; the flag travels in the query string
    pub async fn mark_win_loss(&self, id: EntityId, is_win: bool, reason: &str) -> ClientResult<Ack> {
        let user_id = self.acting_user().await?;
        let query = QueryParams::new()
            .push("userId", user_id)
            .push("isWin", is_win);
        let body = WinLossPayload {
            description: reason.to_string(),
        };
        self.http()
            .put(&with_id("/api/inquiry/winorloss", id), &query, &body)
            .await
    }

    pub async fn quotation_done(&self, id: EntityId, payload: &QuotationPayload) -> ClientResult<Ack> {
        self.http()
            .put(&with_id("/api/inquiry/quotation/done", id), &QueryParams::new(), payload)
            .await
    }

    pub async fn quotation_reassign(
        &self,
        id: EntityId,
        payload: &QuotationPayload,
    ) -> ClientResult<Ack> {
        // path spelling is the server's
        self.http()
            .put(
                &with_id("/api/inquiry/quotation/reassing", id),
                &QueryParams::new(),
                payload,
            )
            .await
    }

    /// Append to the follow-up description trail
    pub async fn add_description(&self, payload: &DescriptionPayload) -> ClientResult<Ack> {
        let query = QueryParams::new().push("isForFollowUpDescription", true);
        self.http()
            .post("/api/inquiry/adddescription", &query, payload)
            .await
    }
}
