//! Query string builder
//!
//! The service expects every filter to be present, with an empty string
//! standing for "no filter".

use shared::EntityId;
use std::fmt::Display;

/// Ordered list of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter
    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a parameter, sending `""` when the value is absent
    pub fn push_or_empty<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self.push(key, ""),
        }
    }

    /// Add a parameter only when present
    pub fn push_opt<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Add a comma-joined id list (`brandIds=1,2,3`)
    pub fn push_ids(self, key: &str, ids: &[EntityId]) -> Self {
        let joined: Vec<String> = ids.iter().map(ToString::to_string).collect();
        self.push(key, joined.join(","))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
