//! View-models
//!
//! One state container per screen. Each action is a single request whose
//! outcome is reported through the shared [`Notifier`].

pub mod brand;
pub mod inquiry;
pub mod product;
pub mod quick_create;

pub use brand::{BrandForm, BrandView};
pub use inquiry::InquiryView;
pub use product::{ProductForm, ProductView};

use chrono::{DateTime, NaiveDateTime};
use nico_client::{HttpClient, NicoApi};
use shared::EntityId;

use crate::error::{DashboardError, DashboardResult};
use crate::notify::Notifier;
use crate::route::{self, Route};

/// What every view needs: the API and the toast queue
#[derive(Debug, Clone)]
pub struct ViewContext<C> {
    pub api: NicoApi<C>,
    pub notifier: Notifier,
}

impl<C: HttpClient> ViewContext<C> {
    pub fn new(api: NicoApi<C>, notifier: Notifier) -> Self {
        Self { api, notifier }
    }

    /// Signed-in user id; toasts when there is none
    pub async fn acting_user(&self) -> DashboardResult<EntityId> {
        self.api.acting_user().await.map_err(|e| {
            self.notifier.error("Please sign in again.");
            DashboardError::from(e)
        })
    }

    pub async fn is_admin(&self) -> bool {
        self.api.session().is_admin().await
    }

    pub async fn route(&self) -> Route {
        route::guard(self.api.session()).await
    }
}

/// Server timestamp as a local date, or the raw text if it does not parse
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return String::new();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Cut long text for table cells
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-03-05T10:20:30.123")), "2024-03-05");
        assert_eq!(format_date(Some("2024-03-05T10:20:30Z")), "2024-03-05");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Riverside Mall Phase Two Extension", 25), "Riverside Mall Phase Two ...");
        assert_eq!(truncate("Short", 25), "Short");
    }
}
