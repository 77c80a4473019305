//! Reminder Model

use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::EntityId;

/// Reminder sub-record attached (0 or 1) to an inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderData {
    pub inquiry_reminder_id: EntityId,
    pub inquiry_id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_name: String,
    #[serde(default)]
    pub inquiry_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inquiry_status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reminder_question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reminder_answer: String,
    /// Server spelling
    #[serde(default, rename = "createrName", deserialize_with = "null_as_default")]
    pub creator_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    /// Assignee display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id_name: String,
}

impl ReminderData {
    pub fn is_answered(&self) -> bool {
        !self.reminder_answer.trim().is_empty()
    }
}

/// Create reminder body (`/api/reminder/alert`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPayload {
    pub inquiry_id: EntityId,
    /// Assignee the reminder is directed at
    pub user_id: EntityId,
    pub reminder_question: String,
    pub created_by: EntityId,
}
