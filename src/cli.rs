use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::types::{
    Priority, PriorityFilter, TicketId, VALID_FILTERS, VALID_PRIORITIES, parse_ticket_id,
};

#[derive(Parser)]
#[command(name = "ticketdesk")]
#[command(about = "Single-desk support ticket manager")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a new ticket
    #[command(visible_alias = "create")]
    Submit {
        /// Requester name (at least 3 characters)
        #[arg(short, long)]
        name: String,

        /// Requester email address
        #[arg(short, long)]
        email: String,

        /// Problem description (at least 10 characters)
        #[arg(short, long)]
        message: String,

        /// Priority: low, normal, high (default: from config)
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tickets, newest first
    #[command(visible_alias = "l")]
    Ls {
        /// Show only one priority: all, low, normal, high
        #[arg(short, long, default_value = "all", value_parser = parse_filter)]
        priority: PriorityFilter,

        /// Case-insensitive search over name, email, and message
        #[arg(short, long)]
        search: Option<String>,

        /// Compact table instead of cards
        #[arg(long, conflicts_with = "json")]
        table: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search tickets by name, email, or message
    Search {
        /// Search term (case-insensitive)
        term: String,

        /// Search only within one priority
        #[arg(short, long, default_value = "all", value_parser = parse_filter)]
        priority: PriorityFilter,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle a ticket between read and unread
    #[command(visible_alias = "read")]
    Toggle {
        /// Ticket ID
        #[arg(value_parser = parse_id)]
        id: TicketId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a ticket
    #[command(visible_alias = "rm")]
    Delete {
        /// Ticket ID
        #[arg(value_parser = parse_id)]
        id: TicketId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show ticket counts
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a JSON summary of every ticket
    Export,

    /// Delete every ticket
    Clear {
        /// Required confirmation
        #[arg(long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session
    Shell,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (default_priority, alert_duration_ms, time_zone)
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (default_priority, alert_duration_ms, time_zone)
        key: String,

        /// Value to set
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            SubmitOptions, cmd_clear, cmd_config_get, cmd_config_set, cmd_config_show,
            cmd_delete, cmd_export, cmd_ls, cmd_search, cmd_shell, cmd_stats, cmd_submit,
            cmd_toggle,
        };

        match self {
            Commands::Submit {
                name,
                email,
                message,
                priority,
                json,
            } => cmd_submit(
                SubmitOptions {
                    name,
                    email,
                    message,
                    priority,
                },
                json,
            ),

            Commands::Ls {
                priority,
                search,
                table,
                json,
            } => cmd_ls(priority, search.as_deref(), table, json),

            Commands::Search {
                term,
                priority,
                json,
            } => cmd_search(&term, priority, json),

            Commands::Toggle { id, json } => cmd_toggle(id, json),
            Commands::Delete { id, json } => cmd_delete(id, json),
            Commands::Stats { json } => cmd_stats(json),
            Commands::Export => cmd_export(),
            Commands::Clear { force, json } => cmd_clear(force, json),
            Commands::Shell => cmd_shell(),

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Generic validation helper for parsing values with a standard error message format.
fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "priority",
        VALID_PRIORITIES,
    )
}

fn parse_filter(s: &str) -> Result<PriorityFilter, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "priority filter",
        VALID_FILTERS,
    )
}

fn parse_id(s: &str) -> Result<TicketId, String> {
    if s.trim().is_empty() {
        return Err("ID cannot be empty".to_string());
    }
    parse_ticket_id(s).map_err(|_| "ID must be a positive whole number".to_string())
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "ticketdesk", &mut io::stdout());
}
