use serde_json::json;

use super::{CommandOutput, open_desk, use_color};
use crate::display::render_stats;
use crate::error::Result;

/// Show total, unread, and high-priority counts over the whole store.
pub fn cmd_stats(output_json: bool) -> Result<()> {
    let desk = open_desk()?;
    let stats = desk.stats();
    let badge = stats.urgent_badge();

    CommandOutput::new(json!({
        "total": stats.total,
        "unread": stats.unread,
        "high": stats.high,
        "urgent_badge": badge,
    }))
    .with_text(render_stats(&stats, badge.as_deref(), use_color()))
    .print(output_json)
}

/// Print the export report as pretty JSON.
pub fn cmd_export() -> Result<()> {
    let desk = open_desk()?;
    println!("{}", desk.export().to_json_pretty()?);
    Ok(())
}
