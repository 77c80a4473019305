//! Inquiry screen
//!
//! The list with its filters and dropdown options lives here; the create/edit
//! form is in [`form`], the per-row modals in [`workflow`], and which of them a
//! row offers in [`actions`].

pub mod actions;
pub mod form;
pub mod workflow;

pub use actions::{RowActions, result_label};
pub use form::InquiryForm;
pub use workflow::{Modal, ModalKind};

use nico_client::{HttpClient, InquiryQuery};
use shared::EntityId;
use shared::models::{Inquiry, InquiryFilter, InquiryStatus, Role, SelectOption};

use super::product::ProductForm;
use super::quick_create::{self, ConsultantForm, ConsumerForm, UserForm};
use super::{ViewContext, format_date, truncate};
use crate::confirm::Confirm;
use crate::debounce::Debouncer;
use crate::error::{DashboardError, DashboardResult};
use crate::paging::Pager;
use crate::route::Route;

/// Brands offered by the brand dropdowns
const BRAND_OPTION_SIZE: u32 = 10;

/// Project names longer than this are cut in the table
const PROJECT_NAME_WIDTH: usize = 25;

/// Dropdown options shared by the filters and the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryOptions {
    pub consumers: Vec<SelectOption>,
    pub consultants: Vec<SelectOption>,
    pub users: Vec<SelectOption>,
    pub brands: Vec<SelectOption>,
    pub roles: Vec<Role>,
}

/// One table row as displayed
#[derive(Debug, Clone, PartialEq)]
pub struct InquiryRow {
    pub number: u64,
    pub id: EntityId,
    pub project_name: String,
    pub status: InquiryStatus,
    pub consumer: String,
    pub products: String,
    pub consultant: String,
    pub follow_up_user: String,
    pub follow_up_quotation: String,
    /// `None` while the outcome is pending
    pub result: Option<&'static str>,
    pub actions: RowActions,
    pub created_at: String,
}

impl InquiryRow {
    fn new(number: u64, inquiry: &Inquiry, actions: RowActions) -> Self {
        let products = if inquiry.products.is_empty() {
            "N/A".to_string()
        } else {
            inquiry
                .products
                .iter()
                .map(|p| p.product_name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self {
            number,
            id: inquiry.inquiry_id,
            project_name: truncate(&inquiry.project_name, PROJECT_NAME_WIDTH),
            status: inquiry.inquiry_status,
            consumer: inquiry
                .consumer
                .as_ref()
                .map(|c| c.consumer_name.clone())
                .unwrap_or_default(),
            products,
            consultant: inquiry
                .consultant
                .as_ref()
                .map(|c| c.consultant_name.clone())
                .unwrap_or_default(),
            follow_up_user: inquiry
                .follow_up_user
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_default(),
            follow_up_quotation: inquiry
                .follow_up_quotation
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_default(),
            result: result_label(inquiry),
            actions,
            created_at: format_date(inquiry.created_at.as_deref()),
        }
    }
}

pub struct InquiryView<C> {
    ctx: ViewContext<C>,
    rows: Vec<Inquiry>,
    pager: Pager,
    search: String,
    debouncer: Debouncer<String>,
    filter: InquiryFilter,
    options: InquiryOptions,
    pub form: InquiryForm,
    pub consumer_form: ConsumerForm,
    pub consultant_form: ConsultantForm,
    pub user_form: UserForm,
    pub product_form: ProductForm,
    modal: Option<Modal>,
    loading: bool,
}

impl<C: HttpClient> InquiryView<C> {
    pub fn new(ctx: ViewContext<C>, page_size: u32, debounce: Debouncer<String>) -> Self {
        Self {
            ctx,
            rows: Vec::new(),
            pager: Pager::new(page_size),
            search: String::new(),
            debouncer: debounce,
            filter: InquiryFilter::default(),
            options: InquiryOptions::default(),
            form: InquiryForm::default(),
            consumer_form: ConsumerForm::default(),
            consultant_form: ConsultantForm::default(),
            user_form: UserForm::default(),
            product_form: ProductForm::default(),
            modal: None,
            loading: false,
        }
    }

    /// Start from filters chosen elsewhere, e.g. a status tile on the home page
    pub fn with_filter(mut self, filter: InquiryFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn rows(&self) -> &[Inquiry] {
        &self.rows
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn filter(&self) -> &InquiryFilter {
        &self.filter
    }

    pub fn options(&self) -> &InquiryOptions {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn route(&self) -> Route {
        self.ctx.route().await
    }

    pub async fn is_admin(&self) -> bool {
        self.ctx.is_admin().await
    }

    /// Full inquiry, as the row actions need it
    pub async fn fetch_inquiry(&self, inquiry_id: EntityId) -> DashboardResult<Inquiry> {
        self.ctx.api.get_inquiry(inquiry_id).await.map_err(|e| {
            self.ctx.notifier.request_failed(&e, "Failed to fetch inquiry details");
            DashboardError::from(e)
        })
    }

    /// Rows as displayed, with the actions the signed-in user may take
    pub async fn table(&self) -> Vec<InquiryRow> {
        let session = self.ctx.api.session().snapshot().await;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, inquiry)| {
                let actions = RowActions::for_row(inquiry, session.user_id, session.is_admin());
                InquiryRow::new(self.pager.row_number(i), inquiry, actions)
            })
            .collect()
    }

    fn query(&self) -> InquiryQuery {
        InquiryQuery::new(self.pager.page(), self.pager.size())
            .with_search(self.search.clone())
            .with_filter(self.filter.clone())
    }

    pub async fn load(&mut self) -> DashboardResult<()> {
        self.loading = true;
        let mut result = self.ctx.api.list_inquiries(&self.query()).await;
        if let Ok(page) = &result
            && self.pager.apply(page)
        {
            result = self.ctx.api.list_inquiries(&self.query()).await;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                self.pager.apply(&page);
                self.rows = page.items;
                Ok(())
            }
            Err(e) => {
                self.ctx.notifier.request_failed(&e, "Failed to fetch inquiries");
                Err(e.into())
            }
        }
    }

    async fn reload(&mut self) {
        if self.load().await.is_err() {
            tracing::debug!("Inquiry list left stale after failed refetch");
        }
    }

    pub async fn set_page_size(&mut self, size: u32) -> DashboardResult<()> {
        if self.pager.set_page_size(size) {
            self.load().await?;
        }
        Ok(())
    }

    pub async fn next_page(&mut self) -> DashboardResult<()> {
        if self.pager.next() {
            self.load().await?;
        }
        Ok(())
    }

    pub async fn prev_page(&mut self) -> DashboardResult<()> {
        if self.pager.prev() {
            self.load().await?;
        }
        Ok(())
    }

    pub async fn go_to_page(&mut self, page: u32) -> DashboardResult<()> {
        if self.pager.go_to(page) {
            self.load().await?;
        }
        Ok(())
    }

    pub fn type_search(&mut self, text: impl Into<String>) {
        self.debouncer.push(text.into());
    }

    pub async fn settle_search(&mut self) -> DashboardResult<()> {
        match self.debouncer.settled().await {
            Some(text) => self.apply_search(text).await,
            None => Ok(()),
        }
    }

    pub async fn apply_search(&mut self, text: String) -> DashboardResult<()> {
        if text == self.search {
            return Ok(());
        }
        self.search = text;
        self.pager.reset();
        self.load().await
    }

    /// Change one filter, then fetch page 1
    async fn refilter(&mut self, update: impl FnOnce(&mut InquiryFilter)) -> DashboardResult<()> {
        let before = self.filter.clone();
        update(&mut self.filter);
        if self.filter == before {
            return Ok(());
        }
        self.pager.reset();
        self.load().await
    }

    async fn require_admin(&self, what: &str) -> DashboardResult<()> {
        if self.ctx.is_admin().await {
            Ok(())
        } else {
            self.ctx.notifier.error(format!("{what} is available to admins only"));
            Err(DashboardError::unavailable(what))
        }
    }

    pub async fn set_status_filter(&mut self, status: Option<InquiryStatus>) -> DashboardResult<()> {
        self.refilter(|f| f.status = status).await
    }

    pub async fn set_consumer_filter(&mut self, consumer: Option<EntityId>) -> DashboardResult<()> {
        self.refilter(|f| f.consumer = consumer).await
    }

    pub async fn set_consultant_filter(&mut self, consultant: Option<EntityId>) -> DashboardResult<()> {
        self.refilter(|f| f.consultant = consultant).await
    }

    pub async fn set_brand_filter(&mut self, brand: Option<EntityId>) -> DashboardResult<()> {
        self.refilter(|f| f.brand = brand).await
    }

    pub async fn set_follow_up_user_filter(&mut self, user: Option<EntityId>) -> DashboardResult<()> {
        self.require_admin("Follow-up user filter").await?;
        self.refilter(|f| f.follow_up_user = user).await
    }

    pub async fn set_follow_up_quotation_filter(&mut self, user: Option<EntityId>) -> DashboardResult<()> {
        self.require_admin("Follow-up quotation filter").await?;
        self.refilter(|f| f.follow_up_quotation = user).await
    }

    pub async fn set_outcome_filter(&mut self, win_or_loss: Option<bool>) -> DashboardResult<()> {
        self.refilter(|f| f.win_or_loss = win_or_loss).await
    }

    /// Fill every dropdown; a failed list is logged and left empty
    pub async fn load_options(&mut self) {
        self.search_consumers("").await;
        self.search_consultants("").await;
        self.search_users("").await;
        self.search_brands("").await;
    }

    pub async fn search_consumers(&mut self, text: &str) {
        match self.ctx.api.list_consumers(text).await {
            Ok(list) => self.options.consumers = list.iter().map(|c| c.to_option()).collect(),
            Err(e) => tracing::error!(error = %e, "Error fetching consumers"),
        }
    }

    pub async fn search_consultants(&mut self, text: &str) {
        match self.ctx.api.list_consultants(text).await {
            Ok(list) => self.options.consultants = list.iter().map(|c| c.to_option()).collect(),
            Err(e) => tracing::error!(error = %e, "Error fetching consultants"),
        }
    }

    pub async fn search_users(&mut self, text: &str) {
        match self.ctx.api.list_users(text).await {
            Ok(list) => self.options.users = list.iter().map(|u| u.to_option()).collect(),
            Err(e) => tracing::error!(error = %e, "Error fetching users"),
        }
    }

    pub async fn search_brands(&mut self, text: &str) {
        match self.ctx.api.list_brands(1, BRAND_OPTION_SIZE, text).await {
            Ok(page) => self.options.brands = page.items.iter().map(|b| b.to_option()).collect(),
            Err(e) => tracing::error!(error = %e, "Error fetching brands"),
        }
    }

    /// Role options for the new-user form
    pub async fn load_roles(&mut self) {
        match self.ctx.api.list_roles().await {
            Ok(roles) => self.options.roles = roles,
            Err(e) => tracing::error!(error = %e, "Error fetching roles"),
        }
    }

    pub async fn save_consumer(&mut self) -> DashboardResult<()> {
        quick_create::save_consumer(&self.ctx, &mut self.consumer_form).await?;
        self.search_consumers("").await;
        Ok(())
    }

    pub async fn save_consultant(&mut self) -> DashboardResult<()> {
        quick_create::save_consultant(&self.ctx, &mut self.consultant_form).await?;
        self.search_consultants("").await;
        Ok(())
    }

    pub async fn save_user(&mut self) -> DashboardResult<()> {
        quick_create::save_user(&self.ctx, &mut self.user_form).await?;
        self.search_users("").await;
        Ok(())
    }

    /// New product from inside the form; the product options are refreshed
    /// when brands are selected
    pub async fn save_product(&mut self) -> DashboardResult<()> {
        quick_create::save_product(&self.ctx, &mut self.product_form).await?;
        if self.form.products_enabled() {
            let brands = self.form.brands.clone();
            self.select_brands(brands).await?;
        }
        Ok(())
    }

    /// Delete after confirmation, then refetch
    pub async fn delete(&mut self, inquiry_id: EntityId, confirm: &mut impl Confirm) -> DashboardResult<bool> {
        if !confirm.confirm("Are you sure you want to delete this inquiry?") {
            return Ok(false);
        }

        self.loading = true;
        let result = self.ctx.api.delete_inquiry(inquiry_id).await;
        self.loading = false;

        match result {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, "Inquiry deleted successfully!");
                self.reload().await;
                Ok(true)
            }
            Err(e) => {
                self.ctx
                    .notifier
                    .request_failed(&e, "Error deleting the inquiry. Please try again.");
                Err(e.into())
            }
        }
    }
}
