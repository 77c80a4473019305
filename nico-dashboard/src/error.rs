//! Dashboard error types

use nico_client::ClientError;
use shared::FieldErrors;
use thiserror::Error;

/// Why a view action did not complete. The user has already been told
/// through a toast or a field error by the time one of these is returned.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Presence checks failed; nothing was sent
    #[error("{0}")]
    Validation(FieldErrors),

    /// The request failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Local file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The action is not available in the current state
    #[error("{0}")]
    Unavailable(String),
}

impl DashboardError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        DashboardError::Unavailable(message.into())
    }

    /// Field errors, when this was a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            DashboardError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for DashboardError {
    fn from(errors: FieldErrors) -> Self {
        DashboardError::Validation(errors)
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
