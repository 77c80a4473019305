//! API Response types
//!
//! The service wraps every payload as
//! ```json
//! { "message": "Brand saved", "data": { ... } }
//! ```
//! List endpoints nest the rows under an entity-specific key next to the
//! page counts. Those shapes are normalised into [`Page`].

use serde::{Deserialize, Serialize};

use crate::models::{Brand, Consultant, Consumer, Inquiry, Product, Role, User};

/// Response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Human-readable message, used as toast text when present
    pub message: Option<String>,
    /// Response data
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(message: Option<String>, data: Option<T>) -> Self {
        Self { message, data }
    }

    /// Message, or `fallback` when the server sent none (or an empty one)
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// One page of rows plus the server's page counts
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Server-reported page count
    pub total_pages: u32,
    /// Server-reported item count, when the endpoint sends one
    pub total_items: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_pages: u32, total_items: Option<u64>) -> Self {
        Self {
            items,
            total_pages,
            total_items,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 1, None)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

fn one() -> u32 {
    1
}

/// `data` of `/api/brand/list`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandList {
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default = "one")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: Option<u64>,
}

impl From<BrandList> for Page<Brand> {
    fn from(list: BrandList) -> Self {
        Page::new(list.brands, list.total_pages, list.total_items)
    }
}

/// `data` of `/api/product/list`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
    #[serde(default)]
    pub product_list: Vec<Product>,
    #[serde(default = "one")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: Option<u64>,
}

impl From<ProductList> for Page<Product> {
    fn from(list: ProductList) -> Self {
        Page::new(list.product_list, list.total_pages, list.total_items)
    }
}

/// Spring-style page wrapper nested in the inquiry list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryContent {
    #[serde(default)]
    pub content: Vec<Inquiry>,
}

/// `data` of `/api/inquiry/all`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryList {
    #[serde(default)]
    pub inquiries: InquiryContent,
    #[serde(default = "one")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: Option<u64>,
}

impl From<InquiryList> for Page<Inquiry> {
    fn from(list: InquiryList) -> Self {
        Page::new(list.inquiries.content, list.total_pages, list.total_items)
    }
}

/// `data` of `/api/consumer/all`
#[derive(Debug, Clone, Deserialize)]
pub struct ConsumerList {
    #[serde(default)]
    pub consumers: Vec<Consumer>,
}

/// `data` of `/api/consultant/all` (capitalised key is the server's)
#[derive(Debug, Clone, Deserialize)]
pub struct ConsultantList {
    #[serde(default, rename = "Consultants")]
    pub consultants: Vec<Consultant>,
}

/// `data` of `/api/user/list`
#[derive(Debug, Clone, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub list: Vec<User>,
}

/// `data` of `/api/roles/list`
#[derive(Debug, Clone, Deserialize)]
pub struct RoleList {
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InquiryStatus, Outcome};

    #[test]
    fn test_brand_list_normalises_into_page() {
        let json = r#"{
            "message": "ok",
            "data": {
                "brands": [{"brandId": 3, "brandName": "Acme", "createdAt": "2024-03-01"}],
                "totalPages": 4
            }
        }"#;
        let resp: ApiResponse<BrandList> = serde_json::from_str(json).unwrap();
        let page: Page<Brand> = resp.data.unwrap().into();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].brand_name, "Acme");
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_items, None);
    }

    #[test]
    fn test_message_fallback() {
        let resp: ApiResponse<()> = serde_json::from_str(r#"{"message": "  "}"#).unwrap();
        assert_eq!(resp.message_or("Brand created successfully"), "Brand created successfully");

        let resp: ApiResponse<()> = serde_json::from_str(r#"{"message": "Saved"}"#).unwrap();
        assert_eq!(resp.message_or("fallback"), "Saved");

        let resp: ApiResponse<()> = serde_json::from_str("{}").unwrap();
        assert!(resp.data.is_none());
        assert_eq!(resp.message_or("fallback"), "fallback");
    }

    #[test]
    fn test_inquiry_list_with_nested_content() {
        let json = r#"{
            "inquiries": {"content": [{
                "inquiryId": 9,
                "projectName": "Harbour",
                "inquiryStatus": "URGENT",
                "description": "call back",
                "products": null,
                "isWin": null,
                "quotationGiven": false
            }]},
            "totalItems": 11,
            "totalPages": 2
        }"#;
        let list: InquiryList = serde_json::from_str(json).unwrap();
        let page: Page<Inquiry> = list.into();
        assert_eq!(page.total_items, Some(11));
        let inquiry = &page.items[0];
        assert_eq!(inquiry.inquiry_status, InquiryStatus::Urgent);
        assert_eq!(inquiry.outcome(), Outcome::Pending);
        assert!(inquiry.products.is_empty());
        assert_eq!(inquiry.latest_description(), "call back");
    }

    #[test]
    fn test_consultant_and_role_lists() {
        let consultants: ConsultantList = serde_json::from_str(
            r#"{"Consultants": [{"consultantId": 1, "consultantName": "Lee", "contactPerson": "Kim"}]}"#,
        )
        .unwrap();
        assert_eq!(consultants.consultants[0].consultant_name, "Lee");

        let roles: RoleList =
            serde_json::from_str(r#"{"roles": [{"Id": 2, "name": " Admin "}]}"#).unwrap();
        assert_eq!(roles.roles[0].id, 2);
        assert_eq!(roles.roles[0].name, "Admin");
    }
}
