//! Search debouncing
//!
//! Each keystroke pushes the current text and moves the deadline; the value
//! is released only once the deadline passes with no further input.

use std::time::Duration;
use tokio::time::Instant;

/// Default search debounce delay (milliseconds)
pub const DEBOUNCE_MS: u64 = 500;

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Record new input and restart the delay
    pub fn push(&mut self, value: T) {
        self.pending = Some(value);
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Pending value if its deadline has passed
    pub fn take_ready(&mut self) -> Option<T> {
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Wait out the deadline, then release the pending value
    pub async fn settled(&mut self) -> Option<T> {
        let deadline = self.deadline?;
        tokio::time::sleep_until(deadline).await;
        self.deadline = None;
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::from_millis(DEBOUNCE_MS)
    }
}
