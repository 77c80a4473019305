//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{null_as_default, Brand, IdRef, SelectOption};
use crate::EntityId;

/// Product entity, belongs to one brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub brand: Option<Brand>,
    #[serde(default)]
    pub created_by: Option<CreatorRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    /// Dropdown label: `"{name} - ${price}"` when priced, else the name
    pub fn option_label(&self) -> String {
        match self.price {
            Some(price) if !price.is_zero() => format!("{} - ${}", self.product_name, price),
            _ => self.product_name.clone(),
        }
    }

    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.product_id, self.option_label())
    }

    pub fn brand_id(&self) -> Option<EntityId> {
        self.brand.as_ref().map(|b| b.brand_id)
    }

    pub fn creator_name(&self) -> &str {
        self.created_by
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or("Unknown")
    }
}

/// Creator reference embedded in product rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorRef {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: Option<String>,
}

/// `{ "brandId": .. }` reference used by the product payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandKey {
    pub brand_id: EntityId,
}

/// Create / update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub brand: BrandKey,
    pub created_by: IdRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<IdRef>,
}
