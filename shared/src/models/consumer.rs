//! Consumer Model

use serde::{Deserialize, Serialize};

use super::{null_as_default, SelectOption};
use crate::EntityId;

/// Consumer entity (the inquiring customer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumer {
    pub consumer_id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub consumer_name: String,
    #[serde(default)]
    pub email_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

impl Consumer {
    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.consumer_id, self.consumer_name.clone())
    }
}

/// Create consumer payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerPayload {
    pub consumer_name: String,
    pub email_id: String,
    pub address: String,
    pub contact: String,
}
