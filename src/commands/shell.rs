//! Interactive session over one desk.
//!
//! Each input line is one event: the controller handles it and the page is
//! rendered again. Input and output are generic so the loop can be driven
//! from a test with in-memory buffers.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use super::{open_desk, use_color};
use crate::desk::{TicketDesk, TicketForm};
use crate::display::{render_stats, render_view};
use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::types::{Priority, PriorityFilter, VALID_PRIORITIES, parse_ticket_id};
use crate::utils::validation::Field;
use crate::utils::{is_stdin_tty, prompt_line};

const PROMPT: &str = "ticketdesk> ";

const HELP: &str = "\
Commands:
  submit           fill in and submit a new ticket
  filter P         show only priority P (all, low, normal, high)
  search [TERM]    search name, email, and message; no term clears it
  toggle ID        mark a ticket read or unread
  delete ID        delete a ticket
  list             show the tickets again
  stats            show ticket counts
  export           print a JSON summary of every ticket
  help             show this help
  quit             leave the shell";

pub fn cmd_shell() -> Result<()> {
    let mut desk = open_desk()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    run_shell(
        &mut desk,
        &mut input,
        &mut output,
        is_stdin_tty(),
        use_color(),
    )
}

/// Run the event loop until `quit` or end of input.
pub fn run_shell<S, R, W>(
    desk: &mut TicketDesk<S>,
    input: &mut R,
    output: &mut W,
    interactive: bool,
    color: bool,
) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    if interactive {
        writeln!(output, "Type 'help' for commands.")?;
    }
    render(desk, output, color)?;

    while let Some(line) = prompt_line(input, output, PROMPT, interactive)? {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line, ""));

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => writeln!(output, "{HELP}")?,
            "submit" => {
                let Some(form) = read_form(desk, input, output, interactive, color)? else {
                    break;
                };
                desk.submit(form)?;
                render(desk, output, color)?;
            }
            "filter" => match rest.parse::<PriorityFilter>() {
                Ok(filter) => {
                    desk.set_filter(filter);
                    render(desk, output, color)?;
                }
                Err(e) => report(output, &e.to_string(), color)?,
            },
            "search" => {
                desk.set_search(rest);
                render(desk, output, color)?;
            }
            "toggle" | "read" => match parse_ticket_id(rest) {
                Ok(id) => {
                    if desk.toggle_read(id)?.is_none() {
                        report(output, &format!("no ticket #{id}"), color)?;
                    }
                    render(desk, output, color)?;
                }
                Err(e) => report(output, &e.to_string(), color)?,
            },
            "delete" | "rm" => match parse_ticket_id(rest) {
                Ok(id) => {
                    if !desk.delete(id)? {
                        report(output, &format!("no ticket #{id}"), color)?;
                    }
                    render(desk, output, color)?;
                }
                Err(e) => report(output, &e.to_string(), color)?,
            },
            "list" | "ls" => render(desk, output, color)?,
            "stats" => {
                let stats = desk.stats();
                let badge = stats.urgent_badge();
                writeln!(output, "{}", render_stats(&stats, badge.as_deref(), color))?;
            }
            "export" => writeln!(output, "{}", desk.export().to_json_pretty()?)?,
            other => report(
                output,
                &format!("unknown command '{other}'. Type 'help' for commands."),
                color,
            )?,
        }
    }

    Ok(())
}

/// Prompt for every form field, checking each one as it is entered.
///
/// Returns `None` if input ends before the form is complete.
fn read_form<S, R, W>(
    desk: &mut TicketDesk<S>,
    input: &mut R,
    output: &mut W,
    interactive: bool,
    color: bool,
) -> Result<Option<TicketForm>>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let mut form = desk.blank_form();

    for field in Field::ALL {
        let label = format!("{}: ", capitalize(&field.to_string()));
        let Some(value) = prompt_line(input, output, &label, interactive)? else {
            return Ok(None);
        };
        if !desk.validate_field(field, &value)
            && let Some(message) = desk.markers().get(field)
        {
            report(output, &format!("{field}: {message}"), color)?;
        }
        form.set(field, value);
    }

    let label = format!(
        "Priority ({}) [{}]: ",
        VALID_PRIORITIES.join("/"),
        form.priority
    );
    loop {
        let Some(value) = prompt_line(input, output, &label, interactive)? else {
            return Ok(None);
        };
        if value.trim().is_empty() {
            break;
        }
        match value.parse::<Priority>() {
            Ok(priority) => {
                form.priority = priority;
                break;
            }
            Err(e) => report(output, &e.to_string(), color)?,
        }
    }

    Ok(Some(form))
}

fn render<S: KeyValueStore, W: Write>(
    desk: &TicketDesk<S>,
    output: &mut W,
    color: bool,
) -> Result<()> {
    writeln!(output, "{}", render_view(&desk.view(), color))?;
    Ok(())
}

fn report<W: Write>(output: &mut W, message: &str, color: bool) -> Result<()> {
    if color {
        writeln!(output, "{}", message.red())?;
    } else {
        writeln!(output, "{message}")?;
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
