//! Toast notifications
//!
//! Transient success/error messages. Success toasts close after 2 s, errors
//! after 3 s. Every toast is also logged.

use chrono::{DateTime, Local};
use nico_client::{Ack, ClientError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

pub const SUCCESS_AUTO_CLOSE: Duration = Duration::from_secs(2);
pub const ERROR_AUTO_CLOSE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: DateTime<Local>,
    pub auto_close: Duration,
}

impl Toast {
    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        (now - self.shown_at)
            .to_std()
            .is_ok_and(|elapsed| elapsed >= self.auto_close)
    }
}

/// Toast queue; clones share the same queue
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.push(ToastKind::Success, message, SUCCESS_AUTO_CLOSE);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.push(ToastKind::Error, message, ERROR_AUTO_CLOSE);
    }

    /// Success toast with the server's message, or `fallback`
    pub fn acked(&self, ack: &Ack, fallback: &str) {
        self.success(ack.message_or(fallback));
    }

    /// Error toast with the server's message, or `fallback`
    pub fn request_failed(&self, err: &ClientError, fallback: &str) {
        tracing::error!(error = %err, "{fallback}");
        self.error(err.server_message().unwrap_or(fallback));
    }

    /// All toasts still queued
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.lock().last().cloned()
    }

    /// Toasts not yet auto-closed at `now`
    pub fn visible(&self, now: DateTime<Local>) -> Vec<Toast> {
        self.lock()
            .iter()
            .filter(|t| !t.is_expired(now))
            .cloned()
            .collect()
    }

    /// Drop auto-closed toasts
    pub fn prune(&self, now: DateTime<Local>) {
        self.lock().retain(|t| !t.is_expired(now));
    }

    /// Take every queued toast
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.lock())
    }

    fn push(&self, kind: ToastKind, message: String, auto_close: Duration) {
        self.lock().push(Toast {
            kind,
            message,
            shown_at: Local::now(),
            auto_close,
        });
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(|e| e.into_inner())
    }
}
