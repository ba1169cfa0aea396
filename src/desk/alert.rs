use std::time::Duration;

use jiff::{SignedDuration, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

/// Transient form-level notice that hides itself after a deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
    pub expires_at: Timestamp,
}

pub const SUBMIT_SUCCESS: &str = "Ticket created successfully";
pub const SUBMIT_REJECTED: &str = "Please correct the errors";

impl Alert {
    pub fn new(kind: AlertKind, text: impl Into<String>, shown_at: Timestamp, ttl: Duration) -> Self {
        let ttl = SignedDuration::try_from(ttl).unwrap_or(SignedDuration::MAX);
        Self {
            kind,
            text: text.into(),
            expires_at: shown_at.checked_add(ttl).unwrap_or(Timestamp::MAX),
        }
    }

    pub fn is_visible_at(&self, now: Timestamp) -> bool {
        now < self.expires_at
    }
}
