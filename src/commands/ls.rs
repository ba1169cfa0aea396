use serde_json::json;

use super::{CommandOutput, open_desk, use_color};
use crate::display::{render_table, render_view};
use crate::error::Result;
use crate::types::PriorityFilter;

/// List tickets under a priority filter and optional search term.
pub fn cmd_ls(
    filter: PriorityFilter,
    search: Option<&str>,
    table: bool,
    output_json: bool,
) -> Result<()> {
    let mut desk = open_desk()?;
    desk.set_filter(filter);
    if let Some(term) = search {
        desk.set_search(term);
    }

    let tickets = desk.visible();
    let json = json!({
        "filter": filter.to_string(),
        "search": desk.search_term(),
        "count": tickets.len(),
        "tickets": tickets,
    });

    let view = desk.view();
    let text = if table && !view.cards.is_empty() {
        render_table(&view.cards)
    } else {
        render_view(&view, use_color())
    };

    CommandOutput::new(json).with_text(text).print(output_json)
}

pub fn cmd_search(term: &str, filter: PriorityFilter, output_json: bool) -> Result<()> {
    cmd_ls(filter, Some(term), false, output_json)
}
