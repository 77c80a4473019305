//! Brand Model

use serde::{Deserialize, Serialize};

use super::{null_as_default, SelectOption};
use crate::EntityId;

/// Brand entity (leaf)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub brand_id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand_name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Brand {
    /// Rows coming from the list endpoint may lack the name; editing then
    /// needs a fetch by id first.
    pub fn is_complete(&self) -> bool {
        self.brand_id != 0 && !self.brand_name.is_empty()
    }

    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.brand_id, self.brand_name.clone())
    }
}

/// Create / update brand payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPayload {
    pub brand_name: String,
    pub user_id: EntityId,
}
