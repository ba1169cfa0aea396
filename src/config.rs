//! Top-level application configuration.
//!
//! Configuration is stored in `.ticketdesk/config.yaml` and includes:
//! - The priority preselected on the submission form
//! - How long form alerts stay visible
//! - The time zone used to display ticket timestamps

use std::fs;
use std::time::Duration;

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TicketDeskError};
use crate::types::{Priority, config_path};
use crate::utils::{ensure_parent_dir, format_relative_path};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Priority used when a submission does not pick one (default: normal)
    #[serde(default)]
    pub default_priority: Priority,

    /// Milliseconds before a form alert is dismissed (default: 3000)
    #[serde(default = "default_alert_duration_ms")]
    pub alert_duration_ms: u64,

    /// IANA time zone for displayed timestamps (default: system zone)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

fn default_alert_duration_ms() -> u64 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_priority: Priority::default(),
            alert_duration_ms: default_alert_duration_ms(),
            time_zone: None,
        }
    }
}

/// Keys accepted by `config get` / `config set`.
pub const CONFIG_KEYS: &[&str] = &["default_priority", "alert_duration_ms", "time_zone"];

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            TicketDeskError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read config at {}: {}",
                    format_relative_path(&path),
                    e
                ),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = config_path();
        ensure_parent_dir(&path)?;

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            TicketDeskError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to write config at {}: {}",
                    format_relative_path(&path),
                    e
                ),
            ))
        })?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.time_zone()?;
        Ok(())
    }

    pub fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_duration_ms)
    }

    /// Resolve the configured time zone, falling back to the system zone.
    pub fn time_zone(&self) -> Result<TimeZone> {
        match self.time_zone.as_deref() {
            Some(name) => {
                TimeZone::get(name).map_err(|_| TicketDeskError::InvalidTimeZone(name.to_string()))
            }
            None => Ok(TimeZone::system()),
        }
    }

    /// Read a single key as a display string.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "default_priority" => Ok(self.default_priority.to_string()),
            "alert_duration_ms" => Ok(self.alert_duration_ms.to_string()),
            "time_zone" => Ok(self.time_zone.clone().unwrap_or_else(|| "system".to_string())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single key from user input, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default_priority" => {
                self.default_priority = value.parse()?;
            }
            "alert_duration_ms" => {
                self.alert_duration_ms = value.trim().parse().map_err(|_| {
                    TicketDeskError::Config(format!(
                        "alert_duration_ms must be a whole number of milliseconds, got '{value}'"
                    ))
                })?;
            }
            "time_zone" => {
                let value = value.trim();
                if value.is_empty() || value.eq_ignore_ascii_case("system") {
                    self.time_zone = None;
                } else {
                    TimeZone::get(value)
                        .map_err(|_| TicketDeskError::InvalidTimeZone(value.to_string()))?;
                    self.time_zone = Some(value.to_string());
                }
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> TicketDeskError {
    TicketDeskError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}
