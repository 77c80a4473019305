//! Client configuration

use std::path::PathBuf;

/// Production service the dashboard talks to
pub const DEFAULT_BASE_URL: &str = "https://nicoindustrial.com";

/// Default location of the persisted session
pub const DEFAULT_SESSION_FILE: &str = ".nico/session.json";

/// Client configuration for connecting to the REST service
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | NICO_API_URL | https://nicoindustrial.com | Service base URL |
/// | NICO_SESSION_FILE | .nico/session.json | Token / user id / role store |
/// | NICO_HTTP_TIMEOUT_SECS | unset | Per-request timeout, none when unset |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://nicoindustrial.com")
    pub base_url: String,

    /// Where the session (token, user id, role) is persisted
    pub session_file: Option<PathBuf>,

    /// Request timeout in seconds; requests never time out when `None`
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration without a persisted session
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            session_file: None,
            timeout: None,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("NICO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            session_file: Some(
                std::env::var("NICO_SESSION_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
            ),
            timeout: std::env::var("NICO_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok()),
        }
    }

    /// Persist the session at `path`
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
