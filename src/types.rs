use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TicketDeskError;

pub use crate::paths::{config_path, store_dir, ticketdesk_root};

/// Default directory name for the desk's data, relative to the working directory.
pub const TICKETDESK_DIR: &str = ".ticketdesk";

/// Key under which the ticket sequence is persisted in the key-value store.
pub const TICKETS_KEY: &str = "tickets";

/// Ticket identity. Millisecond-timestamp-like, strictly increasing per store.
pub type TicketId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

enum_display_fromstr!(
    Priority,
    TicketDeskError::invalid_priority,
    {
        Low => "low",
        Normal => "normal",
        High => "high",
    }
);

pub const VALID_PRIORITIES: &[&str] = &["low", "normal", "high"];

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Normal, Priority::High];
}

/// Priority selection applied to the ticket list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => *p == priority,
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityFilter::All => write!(f, "all"),
            PriorityFilter::Only(p) => write!(f, "{p}"),
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = TicketDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(PriorityFilter::All);
        }
        s.parse::<Priority>()
            .map(PriorityFilter::Only)
            .map_err(|_| TicketDeskError::InvalidFilter(s.to_string()))
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        PriorityFilter::Only(priority)
    }
}

pub const VALID_FILTERS: &[&str] = &["all", "low", "normal", "high"];

/// Parse a ticket id from user input.
pub fn parse_ticket_id(s: &str) -> Result<TicketId, TicketDeskError> {
    s.trim()
        .parse::<TicketId>()
        .map_err(|_| TicketDeskError::InvalidTicketId(s.to_string()))
}
