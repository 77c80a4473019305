//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 401 from the server
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// 403 from the server
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404 from the server
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400 from the server
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Server error {status}: {message}")]
    Api { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session file could not be read or written
    #[error("Session storage error: {0}")]
    Session(#[from] std::io::Error),

    /// No token/user in the session store
    #[error("Not signed in")]
    NotSignedIn,
}

impl ClientError {
    /// Build the error for a non-success status and the server's message
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => ClientError::Unauthorized(message),
            403 => ClientError::Forbidden(message),
            404 => ClientError::NotFound(message),
            400 => ClientError::Validation(message),
            _ => ClientError::Api { status, message },
        }
    }

    /// HTTP status the server answered with, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Validation(_) => Some(400),
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message the server sent with the failure, when there was one
    pub fn server_message(&self) -> Option<&str> {
        let message = match self {
            ClientError::Unauthorized(m)
            | ClientError::Forbidden(m)
            | ClientError::NotFound(m)
            | ClientError::Validation(m)
            | ClientError::Api { message: m, .. } => m.as_str(),
            _ => return None,
        };
        Some(message).filter(|m| !m.trim().is_empty())
    }

    /// 401 or 403, or no session at all
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ClientError::Unauthorized(_) | ClientError::Forbidden(_) | ClientError::NotSignedIn
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
