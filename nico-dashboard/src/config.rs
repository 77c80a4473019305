//! Dashboard configuration

use nico_client::ClientConfig;
use std::path::PathBuf;

use crate::debounce::DEBOUNCE_MS;
use crate::paging::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Dashboard configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | NICO_PAGE_SIZE | 10 | Initial page size (10, 25, 50 or 100) |
/// | NICO_SEARCH_DEBOUNCE_MS | 500 | Search debounce delay |
/// | NICO_LOG_LEVEL | info | Log level / filter |
/// | NICO_LOG_DIR | unset | Daily log files go here when set |
/// | NICO_EXPORT_DIR | . | Where spreadsheet exports are written |
///
/// Client settings (`NICO_API_URL`, ...) are read by [`ClientConfig::from_env`].
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub client: ClientConfig,
    pub page_size: u32,
    pub search_debounce_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub export_dir: PathBuf,
}

impl DashboardConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let page_size = std::env::var("NICO_PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|size| PAGE_SIZE_OPTIONS.contains(size))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            client: ClientConfig::from_env(),
            page_size,
            search_debounce_ms: std::env::var("NICO_SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEBOUNCE_MS),
            log_level: std::env::var("NICO_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("NICO_LOG_DIR").ok(),
            export_dir: std::env::var("NICO_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEBOUNCE_MS,
            log_level: "info".into(),
            log_dir: None,
            export_dir: PathBuf::from("."),
        }
    }
}
