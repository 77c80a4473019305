//! Shared types for the Nico admin workspace
//!
//! Wire models mirrored from the inquiry-tracking REST service, the
//! response envelope it wraps them in, and the presence checks the
//! dashboard forms run before any request is sent.

pub mod models;
pub mod response;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{ApiResponse, Page};
pub use validation::FieldErrors;

/// Server-side identifier for every entity
pub type EntityId = i64;
