#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
pub mod desk;
pub mod display;
pub mod error;
pub mod export;
pub mod paths;
pub mod storage;
pub mod store;
pub mod ticket;
pub mod types;
pub mod utils;

pub use config::Config;
pub use desk::{DeskSettings, DeskView, SubmitOutcome, TicketDesk, TicketForm};
pub use error::{Result, TicketDeskError};
pub use export::ExportReport;
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, TicketRepository};
pub use store::TicketStore;
pub use ticket::{Ticket, TicketSummary};
pub use types::{Priority, PriorityFilter, TICKETS_KEY, TicketId};
pub use utils::validation::{Field, FieldError, ValidationErrors, validate_submission};
