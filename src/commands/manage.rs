//! Commands that change existing tickets: toggle read state, delete, clear.
//!
//! A missing id is not an error. The store treats it as a no-op and the
//! command reports it and exits successfully.

use serde_json::json;

use super::{CommandOutput, open_desk};
use crate::error::{Result, TicketDeskError};
use crate::types::TicketId;

pub fn cmd_toggle(id: TicketId, output_json: bool) -> Result<()> {
    let mut desk = open_desk()?;

    let output = match desk.toggle_read(id)? {
        Some(is_read) => CommandOutput::new(json!({
            "id": id,
            "action": "toggled",
            "found": true,
            "is_read": is_read,
        }))
        .with_text(format!(
            "Marked #{id} as {}",
            if is_read { "read" } else { "unread" }
        )),
        None => CommandOutput::new(json!({
            "id": id,
            "action": "toggled",
            "found": false,
        }))
        .with_text(format!("No ticket #{id}; nothing changed")),
    };
    output.print(output_json)
}

pub fn cmd_delete(id: TicketId, output_json: bool) -> Result<()> {
    let mut desk = open_desk()?;
    let removed = desk.delete(id)?;

    let text = if removed {
        format!("Deleted #{id}")
    } else {
        format!("No ticket #{id}; nothing deleted")
    };
    CommandOutput::new(json!({
        "id": id,
        "action": "deleted",
        "found": removed,
    }))
    .with_text(text)
    .print(output_json)
}

/// Remove every ticket. Refuses to run without `--force`.
pub fn cmd_clear(force: bool, output_json: bool) -> Result<()> {
    if !force {
        return Err(TicketDeskError::Other(
            "refusing to delete all tickets without --force".to_string(),
        ));
    }

    let mut desk = open_desk()?;
    let removed = desk.clear()?;

    CommandOutput::new(json!({
        "action": "cleared",
        "removed": removed,
    }))
    .with_text(format!("Removed {removed} ticket(s)"))
    .print(output_json)
}
