//! Read-only projections over the store.
//!
//! Nothing here is cached; every call walks the current sequence, so the
//! answers always reflect the latest mutation.

use super::TicketStore;
use crate::storage::KeyValueStore;
use crate::ticket::Ticket;
use crate::types::{Priority, PriorityFilter};

impl<S: KeyValueStore> TicketStore<S> {
    /// Tickets passing `filter`, in store order.
    pub fn list_by_priority(&self, filter: PriorityFilter) -> Vec<&Ticket> {
        self.list()
            .iter()
            .filter(|t| filter.matches(t.priority()))
            .collect()
    }

    /// Tickets whose name, email, or message contains `term`, ignoring case.
    /// A blank term matches everything; otherwise surrounding spaces are part
    /// of what is searched for.
    pub fn search(&self, term: &str) -> Vec<&Ticket> {
        self.query(PriorityFilter::All, term)
    }

    /// Search within the tickets passing `filter`.
    pub fn query(&self, filter: PriorityFilter, term: &str) -> Vec<&Ticket> {
        let blank = term.trim().is_empty();
        let term = term.to_lowercase();
        self.list()
            .iter()
            .filter(|t| filter.matches(t.priority()))
            .filter(|t| blank || t.matches_term(&term))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.list().len()
    }

    pub fn count_unread(&self) -> usize {
        self.list().iter().filter(|t| !t.is_read()).count()
    }

    pub fn count_high_priority(&self) -> usize {
        self.count_priority(Priority::High)
    }

    pub fn count_priority(&self, priority: Priority) -> usize {
        self.list()
            .iter()
            .filter(|t| t.priority() == priority)
            .count()
    }
}
