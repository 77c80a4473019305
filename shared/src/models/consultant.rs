//! Consultant Model

use serde::{Deserialize, Serialize};

use super::{null_as_default, IdRef, SelectOption};
use crate::EntityId;

/// Consultant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultant {
    pub consultant_id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub consultant_name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
}

impl Consultant {
    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.consultant_id, self.consultant_name.clone())
    }
}

/// Create consultant payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantPayload {
    pub consultant_name: String,
    pub contact_person: String,
    pub contact_number: String,
    pub created_by: IdRef,
}
