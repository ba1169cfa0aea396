mod config;
mod ls;
mod manage;
mod shell;
mod stats;
mod submit;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use ls::{cmd_ls, cmd_search};
pub use manage::{cmd_clear, cmd_delete, cmd_toggle};
pub use shell::{cmd_shell, run_shell};
pub use stats::{cmd_export, cmd_stats};
pub use submit::{SubmitOptions, cmd_submit};

use serde_json::Value;

use crate::config::Config;
use crate::desk::{DeskSettings, TicketDesk};
use crate::error::Result;
use crate::storage::FileKeyValueStore;
use crate::types::store_dir;
use crate::utils::is_stdout_tty;

/// Output of a one-shot command: a JSON document and an optional
/// human-readable rendering of it.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print JSON when requested (or when there is no text form), text otherwise.
    pub fn print(self, output_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !output_json => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// Open the file-backed desk under the configured root.
pub fn open_desk() -> Result<TicketDesk<FileKeyValueStore>> {
    let config = Config::load()?;
    let settings = DeskSettings::from_config(&config)?;
    TicketDesk::open(FileKeyValueStore::new(store_dir()), settings)
}

/// Colors only when writing to a terminal.
pub fn use_color() -> bool {
    is_stdout_tty()
}
