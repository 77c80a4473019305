//! Nico Client - HTTP client for the inquiry-tracking REST service
//!
//! Provides the authenticated HTTP seam, the persisted session and a typed
//! API over every endpoint the admin dashboard uses.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod session;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use api::{Ack, InquiryQuery, NicoApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use self::http::{HttpClient, NetworkHttpClient};
pub use query::QueryParams;
pub use session::{Session, SessionStore};

// Re-export shared types for convenience
pub use shared::{ApiResponse, EntityId, Page};

/// API over the network client, as the binary uses it
pub type NetworkApi = NicoApi<NetworkHttpClient>;

/// Build the network API from configuration, loading the session file
pub fn connect(config: &ClientConfig) -> ClientResult<NetworkApi> {
    let session = match &config.session_file {
        Some(path) => SessionStore::load(path)?,
        None => SessionStore::in_memory(Session::default()),
    };
    let http = NetworkHttpClient::new(config, session)?;
    tracing::debug!(base_url = http.base_url(), "HTTP client ready");
    Ok(NicoApi::new(http))
}
