//! Inquiry create/edit form with the brand → product cascade

use nico_client::HttpClient;
use rust_decimal::Decimal;
use shared::models::{Inquiry, InquiryPayload, InquiryStatus, SelectOption};
use shared::{EntityId, FieldErrors};
use std::str::FromStr;

use super::InquiryView;
use crate::error::DashboardResult;

/// Create/edit inquiry modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryForm {
    pub open: bool,
    /// Inquiry being edited; decides update vs create
    pub editing: Option<EntityId>,
    pub project_name: String,
    pub status: Option<InquiryStatus>,
    pub description: String,
    pub consumer: Option<EntityId>,
    pub brands: Vec<SelectOption>,
    pub products: Vec<EntityId>,
    /// Products offered for the selected brands
    pub product_options: Vec<SelectOption>,
    pub consultant: Option<EntityId>,
    pub follow_up_quotation: Option<EntityId>,
    pub follow_up_user: Option<EntityId>,
    pub remark: String,
    /// Raw text; blank or unparsable means 0
    pub estimate_price: String,
    pub errors: FieldErrors,
}

impl InquiryForm {
    /// Prefill from a row. The brand selection is derived from the brands
    /// of the inquiry's products.
    pub fn from_inquiry(inquiry: &Inquiry) -> Self {
        Self {
            open: true,
            editing: Some(inquiry.inquiry_id),
            project_name: inquiry.project_name.clone(),
            status: Some(inquiry.inquiry_status),
            description: inquiry.latest_description().to_string(),
            consumer: inquiry.consumer.as_ref().map(|c| c.consumer_id),
            brands: inquiry.product_brands(),
            products: inquiry.product_ids(),
            product_options: inquiry.products.iter().map(|p| p.to_option()).collect(),
            consultant: inquiry.consultant.as_ref().map(|c| c.consultant_id),
            follow_up_quotation: inquiry.follow_up_quotation_id(),
            follow_up_user: inquiry.follow_up_user_id(),
            remark: inquiry.remark.clone().unwrap_or_default(),
            estimate_price: inquiry
                .estimate_price
                .map(|d| d.to_string())
                .unwrap_or_default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn brand_ids(&self) -> Vec<EntityId> {
        self.brands.iter().map(|b| b.value).collect()
    }

    /// The product selector is disabled until a brand is chosen
    pub fn products_enabled(&self) -> bool {
        !self.brands.is_empty()
    }

    pub fn validate(&self, user_id: EntityId) -> Result<InquiryPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .require_text("projectName", &self.project_name, "Project Name is required.")
            .require_some("inquiryStatus", &self.status, "Inquiry Status is required.")
            .require_text("description", &self.description, "Description is required.")
            .require_some("consumerId", &self.consumer, "Consumer is required.")
            .require_any("brandIds", &self.brands, "At least one Brand is required.")
            .require_any("productIds", &self.products, "At least one Product is required.")
            .require_some("consultantId", &self.consultant, "Consultant is required.")
            .require_some(
                "followUpQuotation",
                &self.follow_up_quotation,
                "Follow-up Quotation is required.",
            )
            .require_some("followUpUser", &self.follow_up_user, "Follow-up User is required.")
            .require_text("remark", &self.remark, "Remark is required.");

        let (
            Some(inquiry_status),
            Some(consumer_id),
            Some(consultant_id),
            Some(follow_up_quotation),
            Some(follow_up_user),
        ) = (
            self.status,
            self.consumer,
            self.consultant,
            self.follow_up_quotation,
            self.follow_up_user,
        )
        else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(InquiryPayload {
            project_name: self.project_name.trim().to_string(),
            inquiry_status,
            consumer_id,
            brand_ids: self.brand_ids(),
            product_ids: self.products.clone(),
            consultant_id,
            remark: self.remark.trim().to_string(),
            created_by: user_id,
            follow_up_user,
            follow_up_quotation,
            description: self.description.trim().to_string(),
            estimate_price: Decimal::from_str(self.estimate_price.trim()).unwrap_or(Decimal::ZERO),
            updated_by: self.editing.map(|_| user_id),
        })
    }
}

impl<C: HttpClient> InquiryView<C> {
    pub fn open_create(&mut self) {
        self.form = InquiryForm {
            open: true,
            ..InquiryForm::default()
        };
    }

    /// Prefill from the row and load product options for its brands
    pub async fn open_edit(&mut self, inquiry: &Inquiry) -> DashboardResult<()> {
        self.form = InquiryForm::from_inquiry(inquiry);
        if self.form.products_enabled() {
            self.load_product_options().await?;
        }
        Ok(())
    }

    pub fn close_form(&mut self) {
        self.form = InquiryForm::default();
    }

    /// Brand multi-select changed. With no brand left the product selection
    /// and options are cleared without a request.
    pub async fn select_brands(&mut self, brands: Vec<SelectOption>) -> DashboardResult<()> {
        self.form.brands = brands;
        if self.form.brands.is_empty() {
            self.form.products.clear();
            self.form.product_options.clear();
            return Ok(());
        }
        self.load_product_options().await
    }

    pub fn select_products(&mut self, products: &[SelectOption]) {
        self.form.products = products.iter().map(|p| p.value).collect();
    }

    /// Narrow the product options of the selected brands by name
    pub async fn search_products(&mut self, text: &str) -> DashboardResult<()> {
        self.fetch_product_options(Some(text)).await
    }

    async fn load_product_options(&mut self) -> DashboardResult<()> {
        self.fetch_product_options(None).await
    }

    async fn fetch_product_options(&mut self, search: Option<&str>) -> DashboardResult<()> {
        let brand_ids = self.form.brand_ids();
        match self.ctx.api.products_by_brands(&brand_ids, search).await {
            Ok(products) => {
                self.form.product_options = products.iter().map(|p| p.to_option()).collect();
                Ok(())
            }
            Err(e) => {
                tracing::error!(?brand_ids, error = %e, "Error fetching products");
                Err(e.into())
            }
        }
    }

    pub async fn submit(&mut self) -> DashboardResult<()> {
        let user_id = self.ctx.acting_user().await?;
        let payload = match self.form.validate(user_id) {
            Ok(payload) => payload,
            Err(errors) => {
                self.form.errors = errors.clone();
                return Err(errors.into());
            }
        };
        self.form.errors = FieldErrors::new();

        self.loading = true;
        let result = match self.form.editing {
            Some(id) => self.ctx.api.update_inquiry(id, &payload).await,
            None => self.ctx.api.create_inquiry(&payload).await,
        };
        self.loading = false;

        match result {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, "Inquiry processed successfully!");
                self.reload().await;
                self.close_form();
                Ok(())
            }
            Err(e) => {
                self.ctx
                    .notifier
                    .request_failed(&e, "Error processing the inquiry. Please try again.");
                Err(e.into())
            }
        }
    }
}
