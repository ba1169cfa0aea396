use std::path::PathBuf;

use crate::types::TICKETDESK_DIR;

/// Returns the root ticketdesk directory path.
///
/// Resolution order:
/// 1. `TICKETDESK_ROOT` environment variable (if set and non-empty)
/// 2. Current working directory + `.ticketdesk`
pub fn ticketdesk_root() -> PathBuf {
    match std::env::var("TICKETDESK_ROOT") {
        Ok(root) if !root.is_empty() => PathBuf::from(root),
        _ => PathBuf::from(TICKETDESK_DIR),
    }
}

/// Returns the directory backing the key-value store.
pub fn store_dir() -> PathBuf {
    ticketdesk_root().join("store")
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    ticketdesk_root().join("config.yaml")
}
