//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Validate and persist one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, use_color};
use crate::config::{CONFIG_KEYS, Config};
use crate::error::Result;
use crate::types::config_path;
use crate::utils::format_relative_path;

pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = config_path();

    let mut json = serde_json::to_value(&config)?;
    json["config_file"] = json!(path.to_string_lossy());

    let color = use_color();
    let mut text = String::new();
    if color {
        text.push_str(&format!("{}\n", "Configuration:".cyan().bold()));
    } else {
        text.push_str("Configuration:\n");
    }
    for key in CONFIG_KEYS {
        let value = config.get(key)?;
        if color {
            text.push_str(&format!("  {}: {value}\n", key.cyan()));
        } else {
            text.push_str(&format!("  {key}: {value}\n"));
        }
    }
    text.push_str(&format!("\nConfig file: {}", format_relative_path(&path)));

    CommandOutput::new(json).with_text(text).print(output_json)
}

pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value)
    .print(output_json)
}

pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    let stored = config.get(key)?;

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
    }))
    .with_text(format!("Set {key} = {stored}"))
    .print(output_json)
}
