use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::types::{Priority, TicketId};
use crate::utils::{contains_lowercase, word_count};

/// A single support submission.
///
/// Identity, contact fields, priority, and creation time are fixed once the
/// ticket exists; only the read flag changes, through [`Ticket::toggle_read`].
/// The serialized form is the persisted layout:
/// `{id, name, email, message, priority, createdAt, isRead}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    id: TicketId,
    name: String,
    email: String,
    message: String,
    priority: Priority,
    created_at: Timestamp,
    #[serde(default)]
    is_read: bool,
}

/// Projection of a ticket used by the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub id: TicketId,
    pub name: String,
    pub email: String,
    pub priority: Priority,
    pub created_at: Timestamp,
    pub is_read: bool,
    #[serde(rename = "palabrasCount")]
    pub word_count: usize,
}

impl Ticket {
    /// Build an unread ticket. Text fields are stored trimmed.
    pub(crate) fn new(
        id: TicketId,
        name: &str,
        email: &str,
        message: &str,
        priority: Priority,
        created_at: Timestamp,
    ) -> Self {
        Ticket {
            id,
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
            priority,
            created_at,
            is_read: false,
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }

    /// Flip the read flag and return the new value.
    pub(crate) fn toggle_read(&mut self) -> bool {
        self.is_read = !self.is_read;
        self.is_read
    }

    /// Whitespace-delimited word count of the message.
    pub fn word_count(&self) -> usize {
        word_count(&self.message)
    }

    /// Case-insensitive match of an already-lowercased term against name, email, or message.
    pub fn matches_term(&self, term_lower: &str) -> bool {
        contains_lowercase(&self.name, term_lower)
            || contains_lowercase(&self.email, term_lower)
            || contains_lowercase(&self.message, term_lower)
    }

    pub fn summary(&self) -> TicketSummary {
        TicketSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            priority: self.priority,
            created_at: self.created_at,
            is_read: self.is_read,
            word_count: self.word_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Ticket {
        Ticket::new(
            1_760_600_000_123,
            "  Ada Lovelace ",
            "ada@example.com",
            "hello   world",
            Priority::High,
            Timestamp::from_millisecond(1_760_600_000_123).unwrap(),
        )
    }

    #[test]
    fn test_new_ticket_is_unread_and_trimmed() {
        let t = sample();
        assert!(!t.is_read());
        assert_eq!(t.name(), "Ada Lovelace");
        assert!(t.is_high_priority());
    }

    #[test]
    fn test_toggle_read_is_its_own_inverse() {
        let mut t = sample();
        assert!(t.toggle_read());
        assert!(!t.toggle_read());
        assert!(!t.is_read());
    }

    #[test]
    fn test_matches_term_any_field() {
        let t = sample();
        assert!(t.matches_term("lovelace"));
        assert!(t.matches_term("example.com"));
        assert!(t.matches_term("world"));
        assert!(!t.matches_term("babbage"));
    }

    #[test]
    fn test_summary_word_count() {
        assert_eq!(sample().summary().word_count, 2);
    }

    #[test]
    fn test_serialized_layout() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1_760_600_000_123u64,
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "message": "hello   world",
                "priority": "high",
                "createdAt": "2025-10-16T07:33:20.123Z",
                "isRead": false,
            })
        );
    }

    #[test]
    fn test_deserialize_legacy_millisecond_timestamp() {
        let raw = r#"{"id":5,"name":"Bob","email":"b@c.de","message":"a long enough message",
            "priority":"low","createdAt":"2024-01-02T03:04:05.000Z","isRead":true}"#;
        let t: Ticket = serde_json::from_str(raw).unwrap();
        assert_eq!(t.id(), 5);
        assert!(t.is_read());
        assert_eq!(t.created_at().to_string(), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_summary_serialized_keys() {
        let value = serde_json::to_value(sample().summary()).unwrap();
        assert_eq!(value["palabrasCount"], 2);
        assert!(value.get("wordCount").is_none());
        assert_eq!(value["isRead"], false);
        assert!(value.get("message").is_none());
    }
}
