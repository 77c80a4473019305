//! Data models
//!
//! Plain records mirrored from server responses. Field names follow the
//! server's camelCase JSON; the client holds no authoritative state.

pub mod brand;
pub mod consultant;
pub mod consumer;
pub mod inquiry;
pub mod product;
pub mod reminder;
pub mod user;

// Re-exports
pub use brand::*;
pub use consultant::*;
pub use consumer::*;
pub use inquiry::*;
pub use product::*;
pub use reminder::*;
pub use user::*;

use serde::{Deserialize, Deserializer, Serialize};

use crate::EntityId;

/// `{ "id": .. }` reference used for creator/updater fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: EntityId,
}

impl IdRef {
    pub fn new(id: EntityId) -> Self {
        Self { id }
    }
}

/// A `{ value, label }` pair offered by a dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: EntityId,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: EntityId, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
