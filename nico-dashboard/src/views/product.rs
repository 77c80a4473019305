//! Product list and form

use nico_client::{ClientResult, HttpClient};
use rust_decimal::Decimal;
use shared::models::{Brand, BrandKey, IdRef, Product, ProductPayload};
use shared::{EntityId, FieldErrors, Page};
use std::str::FromStr;

use super::{ViewContext, format_date};
use crate::confirm::Confirm;
use crate::debounce::Debouncer;
use crate::error::DashboardResult;
use crate::paging::Pager;

/// Brand options offered by the product form's picker
const BRAND_PICKER_SIZE: u32 = 10;

/// Create/edit product modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub open: bool,
    pub name: String,
    /// Raw text as typed
    pub price: String,
    pub brand_id: Option<EntityId>,
    pub brand_search: String,
    pub editing: Option<EntityId>,
    /// Inline error shown above the submit button
    pub error: Option<String>,
}

impl ProductForm {
    /// Checks run in order and stop at the first failure
    pub fn validate(&self) -> Result<(String, Decimal, EntityId), FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim();
        let price = self.price.trim();

        if name.is_empty() {
            errors.add("productName", "Product Name is required");
            return Err(errors);
        }
        if price.is_empty() {
            errors.add("price", "Price is required");
            return Err(errors);
        }
        let Ok(value) = Decimal::from_str(price) else {
            errors.add("price", "Please enter a valid number for price");
            return Err(errors);
        };
        if value <= Decimal::ZERO {
            errors.add("price", "Price must be greater than 0");
            return Err(errors);
        }
        let Some(brand_id) = self.brand_id else {
            errors.add("brand", "Please select a brand");
            return Err(errors);
        };
        Ok((name.to_string(), value, brand_id))
    }

    /// Request body for create (and, with `updated_by`, update)
    pub fn payload(&self, user_id: EntityId) -> Result<ProductPayload, FieldErrors> {
        let (product_name, price, brand_id) = self.validate()?;
        Ok(ProductPayload {
            product_name,
            price,
            brand: BrandKey { brand_id },
            created_by: IdRef::new(user_id),
            updated_by: self.editing.map(|_| IdRef::new(user_id)),
        })
    }
}

/// Table row as displayed
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: EntityId,
    pub name: String,
    pub price: String,
    pub brand_name: String,
    pub created_by: String,
    pub created_at: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.product_id,
            name: p.product_name.clone(),
            price: p.price.map(|d| d.to_string()).unwrap_or_default(),
            brand_name: p.brand.as_ref().map(|b| b.brand_name.clone()).unwrap_or_default(),
            created_by: p.creator_name().to_string(),
            created_at: format_date(p.created_at.as_deref()),
        }
    }
}

pub struct ProductView<C> {
    ctx: ViewContext<C>,
    rows: Vec<Product>,
    pager: Pager,
    search: String,
    debouncer: Debouncer<String>,
    pub form: ProductForm,
    brand_options: Vec<Brand>,
    loading: bool,
}

impl<C: HttpClient> ProductView<C> {
    pub fn new(ctx: ViewContext<C>, page_size: u32, debounce: Debouncer<String>) -> Self {
        Self {
            ctx,
            rows: Vec::new(),
            pager: Pager::new(page_size),
            search: String::new(),
            debouncer: debounce,
            form: ProductForm::default(),
            brand_options: Vec::new(),
            loading: false,
        }
    }

    pub fn rows(&self) -> &[Product] {
        &self.rows
    }

    pub fn table(&self) -> Vec<ProductRow> {
        self.rows.iter().map(ProductRow::from).collect()
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn brand_options(&self) -> &[Brand] {
        &self.brand_options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    async fn fetch_page(&self) -> ClientResult<Page<Product>> {
        self.ctx
            .api
            .list_products(self.pager.page(), self.pager.size(), &self.search)
            .await
    }

    /// Fetch the current page; a failure empties the table
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
                self.ctx.notifier.request_failed(&e, "Failed to fetch products");
                self.rows.clear();
                self.pager.clear();
                Err(e.into())
            }
        }
    }

    async fn reload(&mut self) {
        if self.load().await.is_err() {
            tracing::debug!("Product list emptied after failed refetch");
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

    /// Brand picker lookup
    pub async fn search_brands(&mut self, text: &str) -> DashboardResult<()> {
        self.form.brand_search = text.to_string();
        match self.ctx.api.list_brands(1, BRAND_PICKER_SIZE, text).await {
            Ok(page) => {
                self.brand_options = page.items;
                Ok(())
            }
            Err(e) => {
                self.ctx.notifier.request_failed(&e, "Failed to load brands");
                Err(e.into())
            }
        }
    }

    pub fn select_brand(&mut self, brand: &Brand) {
        self.form.brand_id = Some(brand.brand_id);
        self.form.brand_search = brand.brand_name.clone();
    }

    pub fn open_create(&mut self) {
        self.form = ProductForm {
            open: true,
            ..ProductForm::default()
        };
    }

    pub fn open_edit(&mut self, product: &Product) {
        self.form = ProductForm {
            open: true,
            name: product.product_name.clone(),
            price: product.price.map(|d| d.to_string()).unwrap_or_default(),
            brand_id: product.brand_id(),
            brand_search: product
                .brand
                .as_ref()
                .map(|b| b.brand_name.clone())
                .unwrap_or_default(),
            editing: Some(product.product_id),
            error: None,
        };
    }

    pub fn close_form(&mut self) {
        self.form = ProductForm::default();
    }

    pub async fn submit(&mut self) -> DashboardResult<()> {
        let user_id = self.ctx.acting_user().await?;
        let payload = match self.form.payload(user_id) {
            Ok(payload) => payload,
            Err(errors) => {
                self.form.error = errors.first().map(str::to_string);
                return Err(errors.into());
            }
        };
        self.form.error = None;

        self.loading = true;
        let (result, success, failure) = match self.form.editing {
            Some(id) => (
                self.ctx.api.update_product(id, &payload).await,
                "Product updated successfully!",
                "Error updating product. Please try again.",
            ),
            None => (
                self.ctx.api.create_product(&payload).await,
                "Product created successfully!",
                "Error creating product. Please try again.",
            ),
        };
        self.loading = false;

        match result {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, success);
                self.close_form();
                self.reload().await;
                Ok(())
            }
            Err(e) => {
                self.ctx.notifier.request_failed(&e, failure);
                Err(e.into())
            }
        }
    }

    /// Delete after confirmation, then refetch
    pub async fn delete(&mut self, product_id: EntityId, confirm: &mut impl Confirm) -> DashboardResult<bool> {
        if !confirm.confirm("Are you sure you want to delete this product?") {
            return Ok(false);
        }

        self.loading = true;
        let result = self.ctx.api.delete_product(product_id).await;
        self.loading = false;

        match result {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, "Product deleted successfully!");
                self.reload().await;
                Ok(true)
            }
            Err(e) => {
                self.ctx
                    .notifier
                    .request_failed(&e, "Error deleting product. Please try again.");
                Err(e.into())
            }
        }
    }
}
