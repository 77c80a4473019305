//! Reminder endpoints

use shared::models::ReminderPayload;

use super::{Ack, NicoApi};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::QueryParams;

impl<C: HttpClient> NicoApi<C> {
    /// Ask an assignee about an inquiry (admin only on the dashboard)
    pub async fn create_reminder(&self, payload: &ReminderPayload) -> ClientResult<Ack> {
        self.http()
            .post("/api/reminder/alert", &QueryParams::new(), payload)
            .await
    }
}
