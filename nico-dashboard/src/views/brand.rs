//! Brand list and form

use nico_client::{ClientResult, HttpClient};
use shared::models::Brand;
use shared::{EntityId, FieldErrors, Page};

use super::ViewContext;
use crate::confirm::Confirm;
use crate::debounce::Debouncer;
use crate::error::{DashboardError, DashboardResult};
use crate::paging::Pager;

/// Create/edit brand modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandForm {
    pub open: bool,
    pub name: String,
    /// Set when editing; decides update vs create
    pub editing: Option<Brand>,
}

impl BrandForm {
    fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("brandName", &self.name, "Brand name is required");
        errors.into_result().map(|_| self.name.trim().to_string())
    }
}

pub struct BrandView<C> {
    ctx: ViewContext<C>,
    rows: Vec<Brand>,
    pager: Pager,
    search: String,
    debouncer: Debouncer<String>,
    pub form: BrandForm,
    loading: bool,
}

impl<C: HttpClient> BrandView<C> {
    pub fn new(ctx: ViewContext<C>, page_size: u32, debounce: Debouncer<String>) -> Self {
        Self {
            ctx,
            rows: Vec::new(),
            pager: Pager::new(page_size),
            search: String::new(),
            debouncer: debounce,
            form: BrandForm::default(),
            loading: false,
        }
    }

    pub fn rows(&self) -> &[Brand] {
        &self.rows
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    async fn fetch_page(&self) -> ClientResult<Page<Brand>> {
        self.ctx
            .api
            .list_brands(self.pager.page(), self.pager.size(), &self.search)
            .await
    }

    /// Fetch the current page
    pub async fn load(&mut self) -> DashboardResult<()> {
        self.loading = true;
        let mut result = self.fetch_page().await;
        if let Ok(page) = &result
            && self.pager.apply(page)
        {
            result = self.fetch_page().await;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                self.pager.apply(&page);
                self.rows = page.items;
                Ok(())
            }
            Err(e) => {
                self.ctx.notifier.request_failed(&e, "Failed to fetch brands");
                Err(e.into())
            }
        }
    }

    /// Refetch after a write; failures are already toasted by `load`
    async fn reload(&mut self) {
        if self.load().await.is_err() {
            tracing::debug!("Brand list left stale after failed refetch");
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

    /// Keystroke in the search box
    pub fn type_search(&mut self, text: impl Into<String>) {
        self.debouncer.push(text.into());
    }

    /// Wait for typing to pause, then search from page 1
    pub async fn settle_search(&mut self) -> DashboardResult<()> {
        match self.debouncer.settled().await {
            Some(text) => self.apply_search(text).await,
            None => Ok(()),
        }
    }

    /// Search immediately, bypassing the debounce
    pub async fn apply_search(&mut self, text: String) -> DashboardResult<()> {
        if text == self.search {
            return Ok(());
        }
        self.search = text;
        self.pager.reset();
        self.load().await
    }

    pub fn open_create(&mut self) {
        self.form = BrandForm {
            open: true,
            ..BrandForm::default()
        };
    }

    /// Edit a row; rows missing id or name are fetched first
    pub async fn open_edit(&mut self, brand: &Brand) -> DashboardResult<()> {
        let brand = if brand.is_complete() {
            brand.clone()
        } else {
            match self.ctx.api.get_brand(brand.brand_id).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    tracing::error!(brand_id = brand.brand_id, error = %e, "Failed to fetch brand data");
                    self.ctx.notifier.error("Error fetching brand data");
                    return Err(e.into());
                }
            }
        };
        self.form = BrandForm {
            open: true,
            name: brand.brand_name.clone(),
            editing: Some(brand),
        };
        Ok(())
    }

    pub fn close_form(&mut self) {
        self.form = BrandForm::default();
    }

    pub async fn submit(&mut self) -> DashboardResult<()> {
        let name = match self.form.validate() {
            Ok(name) => name,
            Err(errors) => {
                if let Some(message) = errors.first() {
                    self.ctx.notifier.error(message);
                }
                return Err(errors.into());
            }
        };

        self.loading = true;
        let (result, fallback) = match &self.form.editing {
            Some(brand) => (
                self.ctx.api.update_brand(brand.brand_id, &name).await,
                "Brand updated successfully",
            ),
            None => (
                self.ctx.api.create_brand(&name).await,
                "Brand created successfully",
            ),
        };
        self.loading = false;

        match result {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, fallback);
                self.close_form();
                self.reload().await;
                Ok(())
            }
            Err(e) => {
                self.ctx.notifier.request_failed(&e, "Error saving brand");
                Err(e.into())
            }
        }
    }

    /// Delete after confirmation; the row is dropped locally. `Ok(false)`
    /// means the user declined and nothing was sent.
    pub async fn delete(&mut self, brand_id: EntityId, confirm: &mut impl Confirm) -> DashboardResult<bool> {
        if brand_id == 0 {
            self.ctx.notifier.error("Invalid brand ID");
            return Err(DashboardError::unavailable("Invalid brand ID"));
        }
        if !confirm.confirm("Are you sure you want to delete this brand?") {
            return Ok(false);
        }

        match self.ctx.api.delete_brand(brand_id).await {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, "Brand deleted successfully!");
                self.rows.retain(|b| b.brand_id != brand_id);
                Ok(true)
            }
            Err(e) => {
                self.ctx
                    .notifier
                    .request_failed(&e, "Error deleting brand. Please try again.");
                Err(e.into())
            }
        }
    }
}
