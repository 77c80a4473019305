//! Which buttons an inquiry row offers

use shared::EntityId;
use shared::models::{Inquiry, Outcome};

/// Row action availability for one viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    /// Win/loss buttons; `false` means the result label is shown instead
    pub win_loss: bool,
    pub quotation_done: bool,
    pub reassign: bool,
    pub add_description: bool,
    pub reminder: bool,
    pub view_reminder_response: bool,
    /// Bell marker and red outline
    pub highlighted: bool,
}

impl RowActions {
    pub fn for_row(inquiry: &Inquiry, user_id: Option<EntityId>, is_admin: bool) -> Self {
        let pending = inquiry.outcome().is_pending();
        let given = inquiry.quotation_given();
        let is_quotation_assignee =
            user_id.is_some() && inquiry.follow_up_quotation_id() == user_id;
        let is_follow_up_user = user_id.is_some() && inquiry.follow_up_user_id() == user_id;

        Self {
            win_loss: pending,
            quotation_done: is_quotation_assignee && pending && !given,
            reassign: is_follow_up_user && pending && given,
            add_description: is_follow_up_user && pending && given,
            reminder: is_admin,
            view_reminder_response: inquiry.reminder_data.is_some(),
            highlighted: inquiry.has_reminder(),
        }
    }
}

/// Result cell text: `None` while pending (buttons are shown)
pub fn result_label(inquiry: &Inquiry) -> Option<&'static str> {
    match inquiry.outcome() {
        Outcome::Pending => None,
        outcome => Some(outcome.label()),
    }
}
