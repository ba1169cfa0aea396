//! View-model for one render of the desk.
//!
//! Everything a front end needs to draw the page is computed here from the
//! store; the terminal renderer in `display` never touches the store.

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::desk::alert::Alert;
use crate::ticket::Ticket;
use crate::types::{Priority, PriorityFilter, TicketId};
use crate::utils::pluralize;
use crate::utils::validation::Field;

pub const EMPTY_LIST_MESSAGE: &str = "No tickets match your search.";

/// strftime pattern for card timestamps, e.g. `16 Oct 2026, 09:30`.
pub const CARD_DATE_FORMAT: &str = "%d %b %Y, %H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketCard {
    pub id: TicketId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub priority: Priority,
    pub created: String,
    pub is_read: bool,
    /// Label of the read-toggle action.
    pub toggle_label: &'static str,
}

impl TicketCard {
    pub fn from_ticket(ticket: &Ticket, tz: &TimeZone) -> Self {
        Self {
            id: ticket.id(),
            name: ticket.name().to_string(),
            email: ticket.email().to_string(),
            message: ticket.message().to_string(),
            priority: ticket.priority(),
            created: format_timestamp(ticket.created_at(), tz),
            is_read: ticket.is_read(),
            toggle_label: if ticket.is_read() {
                "mark unread"
            } else {
                "mark read"
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub unread: usize,
    pub high: usize,
}

impl Stats {
    /// Header badge text, hidden (`None`) when nothing is high priority.
    pub fn urgent_badge(&self) -> Option<String> {
        (self.high > 0).then(|| pluralize(self.high, "Urgent"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskView {
    pub cards: Vec<TicketCard>,
    pub stats: Stats,
    pub urgent_badge: Option<String>,
    pub alert: Option<Alert>,
    pub field_errors: Vec<(Field, String)>,
    pub filter: PriorityFilter,
    pub search: String,
}

impl DeskView {
    /// Placeholder shown instead of the list when nothing is visible.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.cards.is_empty().then_some(EMPTY_LIST_MESSAGE)
    }
}

pub fn format_timestamp(ts: Timestamp, tz: &TimeZone) -> String {
    ts.to_zoned(tz.clone()).strftime(CARD_DATE_FORMAT).to_string()
}
