//! Nico Dashboard - admin dashboard for the inquiry-tracking service
//!
//! # Module structure
//!
//! ```text
//! nico-dashboard/src/
//! ├── config.rs      # environment configuration
//! ├── logger.rs      # tracing setup
//! ├── notify.rs      # success/error toasts
//! ├── debounce.rs    # search debouncing
//! ├── paging.rs      # page/size state and the results label
//! ├── confirm.rs     # confirmation before deletes
//! ├── route.rs       # sign-in guard
//! ├── export.rs      # monthly spreadsheet export
//! ├── views/         # brand, product and inquiry view-models
//! └── cli.rs         # `nico-admin` command line
//! ```

pub mod cli;
pub mod config;
pub mod confirm;
pub mod debounce;
pub mod error;
pub mod export;
pub mod logger;
pub mod notify;
pub mod paging;
pub mod route;
pub mod views;

pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use logger::{init_logger, init_logger_with_file};
pub use notify::{Notifier, Toast, ToastKind};
pub use route::Route;
pub use views::{BrandView, InquiryView, ProductView, ViewContext};
