//! Presence validation
//!
//! Forms only check that required fields are filled in before a request
//! is sent; everything else is the server's job. Errors are collected per
//! field in insertion order so the first failure can be shown inline.

use thiserror::Error;

/// Field → message map, in the order the checks ran
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", self.joined())]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; a second error for the same field is ignored
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// First recorded message
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Check that a text field is non-blank
    pub fn require_text(&mut self, field: &'static str, value: &str, message: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add(field, message);
        }
        self
    }

    /// Check that an optional selection is made
    pub fn require_some<T>(
        &mut self,
        field: &'static str,
        value: &Option<T>,
        message: &str,
    ) -> &mut Self {
        if value.is_none() {
            self.add(field, message);
        }
        self
    }

    /// Every message, space separated
    pub fn joined(&self) -> String {
        let messages: Vec<&str> = self.entries.iter().map(|(_, m)| m.as_str()).collect();
        messages.join(" ")
    }

    /// Check that a multi-selection has at least one entry
    pub fn require_any<T>(&mut self, field: &'static str, values: &[T], message: &str) -> &mut Self {
        if values.is_empty() {
            self.add(field, message);
        }
        self
    }
}
