use serde_json::json;

use super::{CommandOutput, open_desk};
use crate::desk::SubmitOutcome;
use crate::desk::alert::SUBMIT_SUCCESS;
use crate::error::{Result, TicketDeskError};
use crate::types::Priority;

pub struct SubmitOptions {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Falls back to the configured default priority.
    pub priority: Option<Priority>,
}

/// Validate and create a ticket. Rejected input exits non-zero with every
/// failing field in the error message.
pub fn cmd_submit(options: SubmitOptions, output_json: bool) -> Result<()> {
    let mut desk = open_desk()?;

    let mut form = desk.blank_form();
    form.name = options.name;
    form.email = options.email;
    form.message = options.message;
    if let Some(priority) = options.priority {
        form.priority = priority;
    }

    match desk.submit(form)? {
        SubmitOutcome::Created(ticket) => CommandOutput::new(json!({
            "action": "created",
            "ticket": ticket,
        }))
        .with_text(format!(
            "{SUBMIT_SUCCESS}: #{} [{}]",
            ticket.id(),
            ticket.priority()
        ))
        .print(output_json),
        SubmitOutcome::Rejected(errors) => Err(TicketDeskError::Validation(errors)),
    }
}
