//! Terminal rendering of a [`DeskView`].
//!
//! Every function takes a `color` flag; with it off the output is plain text,
//! which is what tests and piped output see.

use owo_colors::{OwoColorize, Style};
use tabled::settings::Style as TableStyle;
use tabled::{Table, Tabled};

use crate::desk::{Alert, AlertKind, DeskView, Stats, TicketCard};
use crate::types::Priority;
use crate::utils::truncate_string;

const TABLE_MESSAGE_WIDTH: usize = 40;

fn paint(text: &str, color: bool, style: Style) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

pub fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => Style::new().red().bold(),
        Priority::Normal => Style::new().yellow(),
        Priority::Low => Style::new().green(),
    }
}

pub fn format_priority_badge(priority: Priority, color: bool) -> String {
    paint(&format!("[{priority}]"), color, priority_style(priority))
}

/// One ticket card: header line, contact line, indented message, actions.
pub fn render_card(card: &TicketCard, color: bool) -> String {
    let state = if card.is_read { "read" } else { "unread" };
    let header = format!(
        "{} {} {} {}",
        paint(&format!("#{}", card.id), color, Style::new().cyan()),
        format_priority_badge(card.priority, color),
        paint(&card.name, color, Style::new().bold()),
        paint(&format!("({state})"), color, Style::new().dimmed()),
    );
    let contact = format!("  {} · {}", card.email, card.created);

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&contact);
    out.push('\n');
    for line in card.message.lines() {
        let line = format!("  > {line}");
        if card.is_read {
            out.push_str(&paint(&line, color, Style::new().dimmed()));
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out.push_str(&paint(
        &format!("  [{}] [delete {}]", card.toggle_label, card.id),
        color,
        Style::new().dimmed(),
    ));
    out
}

pub fn render_stats(stats: &Stats, badge: Option<&str>, color: bool) -> String {
    let mut line = format!(
        "Total: {}  Unread: {}  High: {}",
        stats.total, stats.unread, stats.high
    );
    if let Some(badge) = badge {
        line.push_str("  ");
        line.push_str(&paint(badge, color, Style::new().white().on_red().bold()));
    }
    line
}

pub fn render_alert(alert: &Alert, color: bool) -> String {
    let style = match alert.kind {
        AlertKind::Success => Style::new().green().bold(),
        AlertKind::Danger => Style::new().red().bold(),
    };
    paint(&alert.text, color, style)
}

/// The full page: alert, field errors, stats header, then the card list.
pub fn render_view(view: &DeskView, color: bool) -> String {
    let mut sections = Vec::new();

    if let Some(alert) = &view.alert {
        sections.push(render_alert(alert, color));
    }
    if !view.field_errors.is_empty() {
        let errors: Vec<String> = view
            .field_errors
            .iter()
            .map(|(field, message)| {
                paint(&format!("  {field}: {message}"), color, Style::new().red())
            })
            .collect();
        sections.push(errors.join("\n"));
    }

    sections.push(render_stats(&view.stats, view.urgent_badge.as_deref(), color));

    let mut scope = format!("Showing: {}", view.filter);
    if !view.search.trim().is_empty() {
        scope.push_str(&format!(" matching \"{}\"", view.search.trim()));
    }
    sections.push(paint(&scope, color, Style::new().dimmed()));

    match view.empty_message() {
        Some(message) => sections.push(paint(message, color, Style::new().dimmed())),
        None => {
            let cards: Vec<String> = view.cards.iter().map(|c| render_card(c, color)).collect();
            sections.push(cards.join("\n\n"));
        }
    }

    sections.join("\n\n")
}

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Read")]
    read: String,
    #[tabled(rename = "Message")]
    message: String,
}

/// Compact one-row-per-ticket listing.
pub fn render_table(cards: &[TicketCard]) -> String {
    let rows: Vec<CardRow> = cards
        .iter()
        .map(|c| CardRow {
            id: c.id,
            priority: c.priority.to_string(),
            name: c.name.clone(),
            email: c.email.clone(),
            created: c.created.clone(),
            read: if c.is_read { "yes" } else { "no" }.to_string(),
            message: truncate_string(&c.message.replace('\n', " "), TABLE_MESSAGE_WIDTH),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::modern());
    table.to_string()
}
