//! User / Role Model

use serde::{Deserialize, Deserializer, Serialize};

use super::{null_as_default, IdRef, SelectOption};
use crate::EntityId;

/// Role name that unlocks assignee filters, reminders and export
pub const ADMIN_ROLE: &str = "Admin";

/// User entity, used as assignee for the follow-up roles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub mobile_no: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl User {
    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.id, self.name.clone())
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }
}

/// Role entity as returned by `/api/roles/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "Id", alias = "id")]
    pub id: EntityId,
    #[serde(deserialize_with = "trimmed")]
    pub name: String,
}

fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(String::deserialize(deserializer)?.trim().to_string())
}

/// Create user payload (`/api/user/signup`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub designation: String,
    pub role: IdRef,
    pub mobile_no: String,
}
