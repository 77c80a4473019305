//! Inquiry Model
//!
//! The richest entity: a sales lead with workflow status, two assignee
//! roles, a tri-state win/loss outcome and an optional reminder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{
    null_as_default, Brand, Consultant, Consumer, IdRef, Product, ReminderData, SelectOption, User,
};
use crate::EntityId;

/// Workflow status of an inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    Tender,
    Purchase,
    Procurement,
    Urgent,
}

impl InquiryStatus {
    pub const ALL: [InquiryStatus; 4] = [
        InquiryStatus::Tender,
        InquiryStatus::Purchase,
        InquiryStatus::Procurement,
        InquiryStatus::Urgent,
    ];

    /// Wire value, also used as the `inquiry-status` filter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tender => "TENDER",
            Self::Purchase => "PURCHASE",
            Self::Procurement => "PROCUREMENT",
            Self::Urgent => "URGENT",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown status string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown inquiry status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for InquiryStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Win/loss outcome (`isWin`: null / true / false)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Pending,
    Won,
    Lost,
}

impl From<Option<bool>> for Outcome {
    fn from(is_win: Option<bool>) -> Self {
        match is_win {
            None => Outcome::Pending,
            Some(true) => Outcome::Won,
            Some(false) => Outcome::Lost,
        }
    }
}

impl Outcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Pending => "Pending",
            Outcome::Won => "Won",
            Outcome::Lost => "Lost",
        }
    }
}

/// One entry of an inquiry's description/comment trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub created_by: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The list endpoint sends the latest description as text, the detail
/// endpoint sends the whole history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    History(Vec<DescriptionEntry>),
}

impl Description {
    /// Latest description text, empty when there is none
    pub fn latest(&self) -> &str {
        match self {
            Description::Text(text) => text,
            Description::History(entries) => entries
                .last()
                .map(|e| e.description.as_str())
                .unwrap_or(""),
        }
    }
}

/// Inquiry entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub inquiry_id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_name: String,
    pub inquiry_status: InquiryStatus,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub consumer: Option<Consumer>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
    #[serde(default)]
    pub brand: Option<Brand>,
    #[serde(default)]
    pub consultant: Option<Consultant>,
    #[serde(default)]
    pub follow_up_user: Option<User>,
    #[serde(default)]
    pub follow_up_quotation: Option<User>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub created_by: Option<User>,
    #[serde(default)]
    pub updated_by: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_win: Option<bool>,
    #[serde(default)]
    pub estimate_price: Option<Decimal>,
    #[serde(default)]
    pub quotation_given: Option<bool>,
    #[serde(default)]
    pub reminder: Option<bool>,
    #[serde(default)]
    pub reminder_data: Option<ReminderData>,
}

impl Inquiry {
    pub fn outcome(&self) -> Outcome {
        self.is_win.into()
    }

    pub fn quotation_given(&self) -> bool {
        self.quotation_given.unwrap_or(false)
    }

    pub fn latest_description(&self) -> &str {
        self.description.as_ref().map(Description::latest).unwrap_or("")
    }

    /// Rows with a reminder flag or reminder data are highlighted
    pub fn has_reminder(&self) -> bool {
        self.reminder.unwrap_or(false) || self.reminder_data.is_some()
    }

    /// Distinct brands of the inquiry's products, first occurrence order
    pub fn product_brands(&self) -> Vec<SelectOption> {
        let mut brands: Vec<SelectOption> = Vec::new();
        for brand in self.products.iter().filter_map(|p| p.brand.as_ref()) {
            if !brands.iter().any(|b| b.value == brand.brand_id) {
                brands.push(brand.to_option());
            }
        }
        brands
    }

    pub fn product_ids(&self) -> Vec<EntityId> {
        self.products.iter().map(|p| p.product_id).collect()
    }

    pub fn follow_up_user_id(&self) -> Option<EntityId> {
        self.follow_up_user.as_ref().map(|u| u.id)
    }

    pub fn follow_up_quotation_id(&self) -> Option<EntityId> {
        self.follow_up_quotation.as_ref().map(|u| u.id)
    }

    /// Reminders go to the follow-up user once the quotation was given,
    /// otherwise to the quotation assignee.
    pub fn reminder_target(&self) -> Option<&User> {
        if self.quotation_given() {
            self.follow_up_user.as_ref()
        } else {
            self.follow_up_quotation.as_ref()
        }
    }
}

/// Create / update inquiry payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPayload {
    pub project_name: String,
    pub inquiry_status: InquiryStatus,
    pub consumer_id: EntityId,
    pub brand_ids: Vec<EntityId>,
    pub product_ids: Vec<EntityId>,
    pub consultant_id: EntityId,
    pub remark: String,
    pub created_by: EntityId,
    pub follow_up_user: EntityId,
    pub follow_up_quotation: EntityId,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub estimate_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<EntityId>,
}

/// Status change payload, sent to the update endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdatePayload {
    pub project_name: String,
    pub inquiry_status: InquiryStatus,
    pub description: String,
    pub consumer_id: Option<EntityId>,
    pub product_ids: Vec<EntityId>,
    pub consultant_id: Option<EntityId>,
    pub follow_up_user: Option<EntityId>,
    pub follow_up_quotation: Option<EntityId>,
    pub remark: Option<String>,
    pub updated_by: EntityId,
}

/// Win/loss request body (the flag itself travels as a query parameter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinLossPayload {
    pub description: String,
}

/// Quotation hand-off body, shared by "done" and "reassign"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_user: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_quotation: Option<EntityId>,
    pub user_id: EntityId,
    pub description: String,
    pub is_quotation_given: bool,
    pub assign_to: EntityId,
}

impl QuotationPayload {
    /// Quotation assignee hands the inquiry back to the follow-up user
    pub fn done(follow_up_user: EntityId, user_id: EntityId, description: String) -> Self {
        Self {
            follow_up_user: Some(follow_up_user),
            follow_up_quotation: None,
            user_id,
            description,
            is_quotation_given: true,
            assign_to: follow_up_user,
        }
    }

    /// Follow-up user sends the inquiry back for a new quotation
    pub fn reassign(follow_up_quotation: EntityId, user_id: EntityId, description: String) -> Self {
        Self {
            follow_up_user: None,
            follow_up_quotation: Some(follow_up_quotation),
            user_id,
            description,
            is_quotation_given: false,
            assign_to: follow_up_quotation,
        }
    }
}

/// Description/comment append body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionPayload {
    pub description: String,
    pub inquiry_id: EntityId,
    pub created_by: IdRef,
}

/// Filters forwarded to `/api/inquiry/all`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryFilter {
    pub status: Option<InquiryStatus>,
    pub follow_up_quotation: Option<EntityId>,
    pub follow_up_user: Option<EntityId>,
    pub consumer: Option<EntityId>,
    pub consultant: Option<EntityId>,
    pub brand: Option<EntityId>,
    /// `winorloss` parameter; empty means both
    pub win_or_loss: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Inquiry {
        serde_json::from_value(serde_json::json!({
            "inquiryId": 42,
            "projectName": "Riverside Mall",
            "inquiryStatus": "TENDER",
            "description": [
                {"description": "first contact"},
                {"description": "sent catalogue"}
            ],
            "products": [
                {"productId": 1, "productName": "Pump", "price": 120.5,
                 "brand": {"brandId": 7, "brandName": "Grundfos"}},
                {"productId": 2, "productName": "Valve",
                 "brand": {"brandId": 8, "brandName": "Danfoss"}},
                {"productId": 3, "productName": "Motor",
                 "brand": {"brandId": 7, "brandName": "Grundfos"}}
            ],
            "followUpUser": {"id": 10, "name": "Asha"},
            "followUpQuotation": {"id": 11, "name": "Ravi"},
            "isWin": false,
            "quotationGiven": true
        }))
        .unwrap()
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("procurement".parse::<InquiryStatus>().unwrap(), InquiryStatus::Procurement);
        assert_eq!(InquiryStatus::Urgent.to_string(), "URGENT");
        assert!("CLOSED".parse::<InquiryStatus>().is_err());
    }

    #[test]
    fn test_outcome_is_tri_state() {
        assert_eq!(Outcome::from(None), Outcome::Pending);
        assert_eq!(Outcome::from(Some(true)), Outcome::Won);
        assert_eq!(Outcome::from(Some(false)), Outcome::Lost);
        assert_eq!(sample().outcome(), Outcome::Lost);
    }

    #[test]
    fn test_history_description_uses_latest_entry() {
        assert_eq!(sample().latest_description(), "sent catalogue");
    }

    #[test]
    fn test_product_brands_are_distinct() {
        let brands = sample().product_brands();
        assert_eq!(brands.len(), 2);
        assert_eq!(brands[0], SelectOption::new(7, "Grundfos"));
        assert_eq!(brands[1], SelectOption::new(8, "Danfoss"));
        assert_eq!(sample().product_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_reminder_target_follows_quotation_flag() {
        let mut inquiry = sample();
        assert_eq!(inquiry.reminder_target().map(|u| u.id), Some(10));
        inquiry.quotation_given = Some(false);
        assert_eq!(inquiry.reminder_target().map(|u| u.id), Some(11));
    }

    #[test]
    fn test_quotation_payload_wire_shape() {
        let done = serde_json::to_value(QuotationPayload::done(10, 11, "priced".into())).unwrap();
        assert_eq!(
            done,
            serde_json::json!({
                "followUpUser": 10,
                "userId": 11,
                "description": "priced",
                "isQuotationGiven": true,
                "assignTo": 10
            })
        );
        let back = serde_json::to_value(QuotationPayload::reassign(11, 10, "redo".into())).unwrap();
        assert_eq!(back["followUpQuotation"], 11);
        assert_eq!(back["isQuotationGiven"], false);
        assert!(back.get("followUpUser").is_none());
    }

    #[test]
    fn test_null_text_fields_decode_as_empty() {
        let inquiry: Inquiry = serde_json::from_value(serde_json::json!({
            "inquiryId": 7,
            "projectName": null,
            "inquiryStatus": "PURCHASE",
            "description": [{"description": null}],
            "products": [{"productId": 1, "productName": null, "brand": {"brandId": 2, "brandName": null}}],
            "followUpUser": {"id": 10, "name": null},
            "reminderData": {
                "inquiryReminderId": 3,
                "inquiryId": 7,
                "projectName": null,
                "inquiryStatus": "PURCHASE",
                "reminderQuestion": "any news?",
                "reminderAnswer": null,
                "createrName": null,
                "createdAt": null,
                "userIdName": null
            }
        }))
        .unwrap();

        assert_eq!(inquiry.project_name, "");
        assert_eq!(inquiry.latest_description(), "");
        assert_eq!(inquiry.products[0].product_name, "");
        let reminder = inquiry.reminder_data.unwrap();
        assert_eq!(reminder.reminder_question, "any news?");
        assert!(!reminder.is_answered());
    }
}
