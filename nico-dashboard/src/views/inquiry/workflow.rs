//! Per-row workflow modals
//!
//! One modal is open at a time. Every submit is a single request; nothing
//! here is composed into a transaction.

use nico_client::{ClientError, HttpClient};
use shared::models::{
    Description, DescriptionPayload, IdRef, Inquiry, InquiryStatus, QuotationPayload, ReminderData,
    ReminderPayload, StatusUpdatePayload,
};
use shared::{EntityId, FieldErrors};

use super::InquiryView;
use super::actions::RowActions;
use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, PartialEq)]
pub enum ModalKind {
    /// New status chosen from the row dropdown, with the fetched detail
    StatusChange {
        status: InquiryStatus,
        detail: Box<Inquiry>,
    },
    WinLoss {
        is_win: bool,
    },
    QuotationDone {
        follow_up_user: EntityId,
    },
    Reassign {
        follow_up_quotation: EntityId,
    },
    Reminder {
        target: EntityId,
    },
    /// Read-only
    ReminderResponse(Box<ReminderData>),
    Description,
}

/// The open workflow modal
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    pub inquiry_id: EntityId,
    pub kind: ModalKind,
    /// Reason, note or comment being typed
    pub text: String,
    /// Inline error under the text box
    pub error: Option<String>,
}

impl Modal {
    fn new(inquiry_id: EntityId, kind: ModalKind, text: impl Into<String>) -> Self {
        Self {
            inquiry_id,
            kind,
            text: text.into(),
            error: None,
        }
    }
}

fn required(field: &'static str, message: &str) -> DashboardError {
    let mut errors = FieldErrors::new();
    errors.add(field, message);
    errors.into()
}

impl<C: HttpClient> InquiryView<C> {
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn set_modal_text(&mut self, text: impl Into<String>) {
        if let Some(modal) = self.modal.as_mut() {
            modal.text = text.into();
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    async fn actions_for(&self, inquiry: &Inquiry) -> RowActions {
        let session = self.ctx.api.session().snapshot().await;
        RowActions::for_row(inquiry, session.user_id, session.is_admin())
    }

    fn not_offered(&self, what: &str) -> DashboardError {
        self.ctx.notifier.error(format!("{what} is not available for this inquiry"));
        DashboardError::unavailable(what)
    }

    /// Fetch the inquiry and prefill the reason with its latest description
    pub async fn open_status_change(
        &mut self,
        inquiry_id: EntityId,
        status: InquiryStatus,
    ) -> DashboardResult<()> {
        let detail = match self.ctx.api.get_inquiry(inquiry_id).await {
            Ok(detail) => detail,
            Err(e) => {
                tracing::error!(inquiry_id, error = %e, "Error fetching inquiry details");
                self.ctx.notifier.error(
                    "Failed to fetch inquiry details. Please check your connection or try again.",
                );
                return Err(e.into());
            }
        };
        let latest = detail.latest_description().to_string();
        self.modal = Some(Modal::new(
            inquiry_id,
            ModalKind::StatusChange {
                status,
                detail: Box::new(detail),
            },
            latest,
        ));
        Ok(())
    }

    pub fn open_win_loss(&mut self, inquiry: &Inquiry, is_win: bool) -> DashboardResult<()> {
        if !inquiry.outcome().is_pending() {
            return Err(self.not_offered("Win/loss"));
        }
        self.modal = Some(Modal::new(inquiry.inquiry_id, ModalKind::WinLoss { is_win }, ""));
        Ok(())
    }

    pub async fn open_quotation_done(&mut self, inquiry: &Inquiry) -> DashboardResult<()> {
        let follow_up_user = inquiry.follow_up_user_id();
        match follow_up_user {
            Some(follow_up_user) if self.actions_for(inquiry).await.quotation_done => {
                self.modal = Some(Modal::new(
                    inquiry.inquiry_id,
                    ModalKind::QuotationDone { follow_up_user },
                    "",
                ));
                Ok(())
            }
            _ => Err(self.not_offered("Quotation done")),
        }
    }

    /// Reason starts from the current description
    pub async fn open_reassign(&mut self, inquiry: &Inquiry) -> DashboardResult<()> {
        match inquiry.follow_up_quotation_id() {
            Some(follow_up_quotation) if self.actions_for(inquiry).await.reassign => {
                self.modal = Some(Modal::new(
                    inquiry.inquiry_id,
                    ModalKind::Reassign { follow_up_quotation },
                    inquiry.latest_description(),
                ));
                Ok(())
            }
            _ => Err(self.not_offered("Reassign")),
        }
    }

    pub async fn open_reminder(&mut self, inquiry: &Inquiry) -> DashboardResult<()> {
        match inquiry.reminder_target() {
            Some(target) if self.actions_for(inquiry).await.reminder => {
                self.modal = Some(Modal::new(
                    inquiry.inquiry_id,
                    ModalKind::Reminder { target: target.id },
                    "",
                ));
                Ok(())
            }
            _ => Err(self.not_offered("Reminder")),
        }
    }

    pub fn open_reminder_response(&mut self, inquiry: &Inquiry) -> DashboardResult<()> {
        let Some(data) = inquiry.reminder_data.clone() else {
            return Err(self.not_offered("Reminder response"));
        };
        self.modal = Some(Modal::new(
            inquiry.inquiry_id,
            ModalKind::ReminderResponse(Box::new(data)),
            "",
        ));
        Ok(())
    }

    /// Comment box starts from the row's current description
    pub async fn open_description(&mut self, inquiry: &Inquiry) -> DashboardResult<()> {
        if !self.actions_for(inquiry).await.add_description {
            return Err(self.not_offered("Add description"));
        }
        self.modal = Some(Modal::new(
            inquiry.inquiry_id,
            ModalKind::Description,
            inquiry.latest_description(),
        ));
        Ok(())
    }

    /// Submit whichever modal is open
    pub async fn submit_modal(&mut self) -> DashboardResult<()> {
        let Some(modal) = self.modal.clone() else {
            return Err(DashboardError::unavailable("No workflow modal is open"));
        };
        match modal.kind {
            ModalKind::StatusChange { status, detail } => {
                self.submit_status_change(modal.inquiry_id, status, &detail, &modal.text)
                    .await
            }
            ModalKind::WinLoss { is_win } => {
                self.submit_win_loss(modal.inquiry_id, is_win, &modal.text).await
            }
            ModalKind::QuotationDone { follow_up_user } => {
                self.submit_quotation_done(modal.inquiry_id, follow_up_user, &modal.text)
                    .await
            }
            ModalKind::Reassign { follow_up_quotation } => {
                self.submit_reassign(modal.inquiry_id, follow_up_quotation, &modal.text)
                    .await
            }
            ModalKind::Reminder { target } => {
                self.submit_reminder(modal.inquiry_id, target, &modal.text).await
            }
            ModalKind::ReminderResponse(_) => {
                self.close_modal();
                Ok(())
            }
            ModalKind::Description => self.submit_description(modal.inquiry_id, &modal.text).await,
        }
    }

    /// Reject blank text with an inline error
    fn require_text(&mut self, field: &'static str, text: &str, message: &str) -> DashboardResult<()> {
        if !text.trim().is_empty() {
            return Ok(());
        }
        if let Some(modal) = self.modal.as_mut() {
            modal.error = Some(message.to_string());
        }
        Err(required(field, message))
    }

    async fn submit_status_change(
        &mut self,
        inquiry_id: EntityId,
        status: InquiryStatus,
        detail: &Inquiry,
        reason: &str,
    ) -> DashboardResult<()> {
        self.require_text("description", reason, "Description is required.")?;
        let user_id = self.ctx.acting_user().await?;

        let payload = StatusUpdatePayload {
            project_name: detail.project_name.clone(),
            inquiry_status: status,
            description: reason.trim().to_string(),
            consumer_id: detail.consumer.as_ref().map(|c| c.consumer_id),
            product_ids: detail.product_ids(),
            consultant_id: detail.consultant.as_ref().map(|c| c.consultant_id),
            follow_up_user: detail.follow_up_user_id(),
            follow_up_quotation: detail.follow_up_quotation_id(),
            remark: detail.remark.clone(),
            updated_by: user_id,
        };

        match self.ctx.api.update_inquiry_status(inquiry_id, &payload).await {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, "Inquiry updated successfully!");
                self.close_modal();
                if let Some(row) = self.rows.iter_mut().find(|r| r.inquiry_id == inquiry_id) {
                    row.inquiry_status = status;
                    row.description = Some(Description::Text(payload.description));
                }
                Ok(())
            }
            Err(e) => {
                self.ctx
                    .notifier
                    .request_failed(&e, "Failed to update inquiry. Please try again.");
                Err(e.into())
            }
        }
    }

    /// The modal closes whether or not the request succeeds
    async fn submit_win_loss(&mut self, inquiry_id: EntityId, is_win: bool, reason: &str) -> DashboardResult<()> {
        self.require_text("description", reason, "Please enter a reason.")?;

        let result = self.ctx.api.mark_win_loss(inquiry_id, is_win, reason.trim()).await;
        self.close_modal();
        match result {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, "Status updated successfully!");
                self.reload().await;
                Ok(())
            }
            Err(e) => {
                self.ctx.notifier.request_failed(&e, "Error updating status.");
                Err(e.into())
            }
        }
    }

    async fn submit_quotation_done(
        &mut self,
        inquiry_id: EntityId,
        follow_up_user: EntityId,
        reason: &str,
    ) -> DashboardResult<()> {
        self.require_text("description", reason, "Description is required.")?;
        let user_id = self.ctx.acting_user().await?;
        let payload = QuotationPayload::done(follow_up_user, user_id, reason.trim().to_string());

        match self.ctx.api.quotation_done(inquiry_id, &payload).await {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, "Quotation successful");
                self.close_modal();
                self.reload().await;
                Ok(())
            }
            Err(e) => {
                self.ctx
                    .notifier
                    .request_failed(&e, "Error marking quotation as done.");
                Err(e.into())
            }
        }
    }

    async fn submit_reassign(
        &mut self,
        inquiry_id: EntityId,
        follow_up_quotation: EntityId,
        reason: &str,
    ) -> DashboardResult<()> {
        self.require_text("description", reason, "Description is required.")?;
        let user_id = self.ctx.acting_user().await?;
        let payload =
            QuotationPayload::reassign(follow_up_quotation, user_id, reason.trim().to_string());

        match self.ctx.api.quotation_reassign(inquiry_id, &payload).await {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, "Follow-up reassigned successfully");
                self.close_modal();
                self.reload().await;
                Ok(())
            }
            Err(e) => {
                self.ctx.notifier.request_failed(&e, "Error reassigning follow-up");
                Err(e.into())
            }
        }
    }

    async fn submit_reminder(&mut self, inquiry_id: EntityId, target: EntityId, note: &str) -> DashboardResult<()> {
        self.require_text("reminderQuestion", note, "Reminder note cannot be empty")?;
        let user_id = self.ctx.acting_user().await?;
        let payload = ReminderPayload {
            inquiry_id,
            user_id: target,
            reminder_question: note.trim().to_string(),
            created_by: user_id,
        };

        match self.ctx.api.create_reminder(&payload).await {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, "Reminder sent successfully!");
                self.close_modal();
                self.reload().await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(inquiry_id, error = %e, "Error sending reminder");
                if let Some(modal) = self.modal.as_mut() {
                    modal.error = Some(e.server_message().unwrap_or("Failed to send reminder").to_string());
                }
                Err(e.into())
            }
        }
    }

    /// 401/403 signs the user out
    async fn submit_description(&mut self, inquiry_id: EntityId, text: &str) -> DashboardResult<()> {
        if text.trim().is_empty() {
            self.ctx.notifier.error("Please enter a description");
            return Err(required("description", "Please enter a description"));
        }
        let user_id = self.ctx.acting_user().await?;
        let payload = DescriptionPayload {
            description: text.to_string(),
            inquiry_id,
            created_by: IdRef::new(user_id),
        };

        match self.ctx.api.add_description(&payload).await {
            Ok(ack) => {
                self.ctx.notifier.acked(&ack, "Comment added successfully");
                self.close_modal();
                self.reload().await;
                Ok(())
            }
            Err(e) if matches!(e.status(), Some(401 | 403)) => {
                tracing::warn!(inquiry_id, error = %e, "Session rejected, signing out");
                self.close_modal();
                if let Err(clear_err) = self.ctx.api.session().clear().await {
                    tracing::error!(error = %clear_err, "Failed to clear session");
                }
                Err(e.into())
            }
            Err(e @ ClientError::Http(_)) => {
                tracing::error!(inquiry_id, error = %e, "Error adding comment");
                self.ctx
                    .notifier
                    .error("Something went wrong. Please try again later.");
                Err(e.into())
            }
            Err(e) => {
                self.ctx.notifier.request_failed(&e, "Failed to add comment");
                Err(e.into())
            }
        }
    }
}
