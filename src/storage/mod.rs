//! Key-value byte storage backing the ticket desk.
//!
//! The desk persists through a narrow `KeyValueStore` seam so the store can
//! run against a directory on disk in production and a plain map in tests.
//! Values are opaque bytes; [`TicketRepository`] owns the JSON encoding.

mod repository;

pub use repository::TicketRepository;

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::error::{Result, TicketDeskError};
use crate::utils::format_relative_path;

/// Minimal string-keyed byte store.
pub trait KeyValueStore {
    /// Value under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace whatever is under `key`.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Drop `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store, for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    values: HashMap<String, Vec<u8>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.values.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key.
///
/// Writes go to a temp file in the same directory and are renamed into
/// place, so a reader sees either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            TicketDeskError::Io(io::Error::new(
                e.kind(),
                format!(
                    "Failed to create store directory at {}: {}",
                    format_relative_path(&self.dir),
                    e
                ),
            ))
        })
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TicketDeskError::Other(format!(
            "invalid storage key '{key}'"
        )));
    }
    Ok(())
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TicketDeskError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", format_relative_path(&path), e),
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        self.ensure_dir()?;
        let path = self.path_for(key);

        let write_err = |e: io::Error| {
            TicketDeskError::Io(io::Error::new(
                e.kind(),
                format!("Failed to write {}: {}", format_relative_path(&path), e),
            ))
        };

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(value).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TicketDeskError::Io(io::Error::new(
                e.kind(),
                format!("Failed to remove {}: {}", format_relative_path(&path), e),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &mut dyn KeyValueStore) {
        assert_eq!(store.get("tickets").unwrap(), None);

        store.set("tickets", b"[1]").unwrap();
        assert_eq!(store.get("tickets").unwrap().as_deref(), Some(&b"[1]"[..]));

        store.set("tickets", b"[2,3]").unwrap();
        assert_eq!(store.get("tickets").unwrap().as_deref(), Some(&b"[2,3]"[..]));

        store.remove("tickets").unwrap();
        assert_eq!(store.get("tickets").unwrap(), None);
        store.remove("tickets").unwrap();
    }

    #[test]
    fn test_memory_store_semantics() {
        exercise(&mut MemoryKeyValueStore::new());
    }

    #[test]
    fn test_file_store_semantics() {
        let temp = TempDir::new().unwrap();
        exercise(&mut FileKeyValueStore::new(temp.path().join("store")));
    }

    #[test]
    fn test_file_store_creates_directory_lazily() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested/store");
        let mut store = FileKeyValueStore::new(&dir);

        assert_eq!(store.get("tickets").unwrap(), None);
        assert!(!dir.exists());

        store.set("tickets", b"[]").unwrap();
        assert_eq!(fs::read(dir.join("tickets.json")).unwrap(), b"[]");
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp = TempDir::new().unwrap();
        let mut first = FileKeyValueStore::new(temp.path());
        first.set("tickets", b"persisted").unwrap();

        let second = FileKeyValueStore::new(temp.path());
        assert_eq!(second.get("tickets").unwrap().as_deref(), Some(&b"persisted"[..]));
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let mut store = FileKeyValueStore::new(temp.path());
        assert!(store.set("../escape", b"x").is_err());
        assert!(store.get("a/b").is_err());
        assert!(store.remove("").is_err());
    }
}
