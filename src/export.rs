//! JSON summary of the whole desk.

use jiff::Timestamp;
use serde::Serialize;

use crate::ticket::{Ticket, TicketSummary};

/// `{totalTickets, highPriority, generatedAt, tickets}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub total_tickets: usize,
    pub high_priority: usize,
    pub generated_at: Timestamp,
    pub tickets: Vec<TicketSummary>,
}

impl ExportReport {
    /// Summarise `tickets` (all of them, regardless of any active filter).
    pub fn build(tickets: &[Ticket], generated_at: Timestamp) -> Self {
        Self {
            total_tickets: tickets.len(),
            high_priority: tickets.iter().filter(|t| t.is_high_priority()).count(),
            generated_at,
            tickets: tickets.iter().map(Ticket::summary).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
