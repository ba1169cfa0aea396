//! In-memory ticket store with write-through persistence.
//!
//! The store is the source of truth for a session: tickets live in a `Vec`
//! ordered newest first, and every mutation rewrites the persisted copy
//! before returning.

mod queries;

use jiff::Timestamp;

use crate::error::Result;
use crate::storage::{KeyValueStore, TicketRepository};
use crate::ticket::Ticket;
use crate::types::{Priority, TicketId};
use crate::utils::IdAllocator;
use crate::utils::validation::validate_submission;

pub struct TicketStore<S> {
    tickets: Vec<Ticket>,
    repository: TicketRepository<S>,
    ids: IdAllocator,
}

impl<S: KeyValueStore> TicketStore<S> {
    /// Load whatever `backend` holds and start a session on it.
    pub fn open(backend: S) -> Result<Self> {
        let repository = TicketRepository::new(backend);
        let tickets = repository.load()?;
        let ids = IdAllocator::after(tickets.iter().map(Ticket::id));
        tracing::debug!(count = tickets.len(), "opened ticket store");
        Ok(Self {
            tickets,
            repository,
            ids,
        })
    }

    pub fn backend(&self) -> &S {
        self.repository.backend()
    }

    /// Create a ticket stamped with the current time.
    pub fn create(
        &mut self,
        name: &str,
        email: &str,
        message: &str,
        priority: Priority,
    ) -> Result<Ticket> {
        self.create_at(name, email, message, priority, Timestamp::now())
    }

    /// Create a ticket stamped with `now`, insert it first, and persist.
    ///
    /// Inputs are validated again here so nothing invalid reaches storage,
    /// whichever front end called.
    pub fn create_at(
        &mut self,
        name: &str,
        email: &str,
        message: &str,
        priority: Priority,
        now: Timestamp,
    ) -> Result<Ticket> {
        validate_submission(name, email, message)?;

        // Stored timestamps carry millisecond precision.
        let created_at = Timestamp::from_millisecond(now.as_millisecond()).unwrap_or(now);
        let id = self.ids.next_at(created_at)?;
        let ticket = Ticket::new(id, name, email, message, priority, created_at);

        let mut next = Vec::with_capacity(self.tickets.len() + 1);
        next.push(ticket.clone());
        next.extend_from_slice(&self.tickets);
        self.commit(next)?;
        tracing::debug!(id, %priority, "created ticket");
        Ok(ticket)
    }

    /// Remove the ticket with `id`. Returns whether one was removed;
    /// an unknown id is not an error.
    pub fn delete(&mut self, id: TicketId) -> Result<bool> {
        let next: Vec<Ticket> = self
            .tickets
            .iter()
            .filter(|t| t.id() != id)
            .cloned()
            .collect();
        let removed = next.len() != self.tickets.len();
        self.commit(next)?;
        tracing::debug!(id, removed, "deleted ticket");
        Ok(removed)
    }

    /// Flip the read flag of `id`. Returns the new flag, or `None` for an
    /// unknown id (in which case nothing is written).
    pub fn toggle_read(&mut self, id: TicketId) -> Result<Option<bool>> {
        let Some(index) = self.tickets.iter().position(|t| t.id() == id) else {
            return Ok(None);
        };
        let mut next = self.tickets.clone();
        let is_read = next[index].toggle_read();
        self.commit(next)?;
        tracing::debug!(id, is_read, "toggled read state");
        Ok(Some(is_read))
    }

    /// Remove every ticket. Returns how many were dropped.
    pub fn clear(&mut self) -> Result<usize> {
        self.repository.clear()?;
        let count = self.tickets.len();
        self.tickets.clear();
        tracing::debug!(count, "cleared ticket store");
        Ok(count)
    }

    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id() == id)
    }

    /// Every ticket, newest first.
    pub fn list(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Persist `next`, then make it the current sequence. A failed write
    /// leaves the session unchanged.
    fn commit(&mut self, next: Vec<Ticket>) -> Result<()> {
        self.repository.save(&next)?;
        self.tickets = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TicketDeskError;
    use crate::storage::{FileKeyValueStore, MemoryKeyValueStore};
    use crate::utils::validation::Field;
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;
    use tempfile::TempDir;

    /// Memory store whose writes can be made to fail on demand.
    #[derive(Clone, Default)]
    struct FlakyStore {
        inner: MemoryKeyValueStore,
        fail_writes: Rc<Cell<bool>>,
    }

    impl FlakyStore {
        fn check(&self) -> Result<()> {
            if self.fail_writes.get() {
                return Err(TicketDeskError::Io(io::Error::other("disk full")));
            }
            Ok(())
        }
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
            self.check()?;
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.check()?;
            self.inner.remove(key)
        }
    }

    fn ts(millis: i64) -> Timestamp {
        Timestamp::from_millisecond(millis).unwrap()
    }

    fn store() -> TicketStore<MemoryKeyValueStore> {
        TicketStore::open(MemoryKeyValueStore::new()).unwrap()
    }

    fn add(store: &mut TicketStore<MemoryKeyValueStore>, name: &str, priority: Priority) -> Ticket {
        store
            .create(name, "someone@example.com", "Something is broken again", priority)
            .unwrap()
    }

    #[test]
    fn test_create_inserts_newest_first() {
        let mut s = store();
        let a = add(&mut s, "Alice", Priority::Normal);
        let b = add(&mut s, "Bobby", Priority::Normal);

        let ids: Vec<_> = s.list().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![b.id(), a.id()]);
    }

    #[test]
    fn test_create_sets_defaults() {
        let mut s = store();
        let t = s
            .create_at(
                "  Alice ",
                "alice@example.com",
                "My screen is blank",
                Priority::High,
                ts(1_760_000_000_000),
            )
            .unwrap();
        assert!(!t.is_read());
        assert_eq!(t.name(), "Alice");
        assert_eq!(t.id(), 1_760_000_000_000);
        assert_eq!(t.created_at(), ts(1_760_000_000_000));
    }

    #[test]
    fn test_create_truncates_to_milliseconds() {
        let mut s = store();
        let precise = Timestamp::new(1_760_000_000, 123_456_789).unwrap();
        let t = s
            .create_at("Alice", "a@b.co", "Precision matters", Priority::Low, precise)
            .unwrap();
        assert_eq!(t.created_at(), ts(1_760_000_000_123));
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut s = store();
        let now = ts(1_760_000_000_000);
        let a = s.create_at("Alice", "a@b.co", "first ticket here", Priority::Low, now).unwrap();
        let b = s.create_at("Bobby", "b@b.co", "second ticket here", Priority::Low, now).unwrap();
        assert!(b.id() > a.id());
    }

    #[test]
    fn test_create_rejects_invalid_input_without_mutation() {
        let mut s = store();
        let err = s.create("ab", "a@b", "short", Priority::Low).unwrap_err();
        match err {
            TicketDeskError::Validation(errors) => {
                assert!(errors.contains(Field::Name));
                assert!(errors.contains(Field::Email));
                assert!(errors.contains(Field::Message));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(s.list().is_empty());
        assert_eq!(s.backend().get("tickets").unwrap(), None);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut s = store();
        let a = add(&mut s, "Alice", Priority::Low);
        let b = add(&mut s, "Bobby", Priority::Low);

        assert!(s.delete(a.id()).unwrap());
        let once: Vec<Ticket> = s.list().to_vec();
        assert!(!s.delete(a.id()).unwrap());
        assert_eq!(s.list(), once.as_slice());
        assert_eq!(s.list()[0].id(), b.id());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut s = store();
        add(&mut s, "Alice", Priority::Low);
        assert!(!s.delete(42).unwrap());
        assert_eq!(s.count(), 1);
    }

    #[test]
    fn test_toggle_read_twice_restores() {
        let mut s = store();
        let a = add(&mut s, "Alice", Priority::Low);
        assert_eq!(s.toggle_read(a.id()).unwrap(), Some(true));
        assert_eq!(s.toggle_read(a.id()).unwrap(), Some(false));
        assert!(!s.get(a.id()).unwrap().is_read());
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut s = store();
        assert_eq!(s.toggle_read(7).unwrap(), None);
    }

    #[test]
    fn test_reload_restores_everything() {
        let mut s = store();
        let a = add(&mut s, "Alice", Priority::High);
        let b = add(&mut s, "Bobby", Priority::Low);
        s.toggle_read(a.id()).unwrap();

        let reopened = TicketStore::open(s.backend().clone()).unwrap();
        assert_eq!(reopened.list(), s.list());
        assert_eq!(reopened.list()[0].id(), b.id());
        assert!(reopened.get(a.id()).unwrap().is_read());
        assert_eq!(reopened.get(b.id()).unwrap().created_at(), b.created_at());
    }

    #[test]
    fn test_reload_continues_id_sequence() {
        let mut s = store();
        let now = ts(5_000);
        let a = s.create_at("Alice", "a@b.co", "first ticket here", Priority::Low, now).unwrap();

        let mut reopened = TicketStore::open(s.backend().clone()).unwrap();
        let b = reopened
            .create_at("Bobby", "b@b.co", "after the reload", Priority::Low, now)
            .unwrap();
        assert!(b.id() > a.id());
    }

    #[test]
    fn test_file_backed_roundtrip() {
        let temp = TempDir::new().unwrap();
        let created = {
            let mut s = TicketStore::open(FileKeyValueStore::new(temp.path())).unwrap();
            s.create("Alice", "alice@example.com", "Persist me across runs", Priority::Normal)
                .unwrap()
        };

        let s = TicketStore::open(FileKeyValueStore::new(temp.path())).unwrap();
        assert_eq!(s.list(), &[created]);
    }

    #[test]
    fn test_clear_empties_store_and_storage() {
        let mut s = store();
        add(&mut s, "Alice", Priority::Low);
        add(&mut s, "Bobby", Priority::Low);
        assert_eq!(s.clear().unwrap(), 2);
        assert!(s.list().is_empty());
        assert!(TicketStore::open(s.backend().clone()).unwrap().list().is_empty());
    }

    #[test]
    fn test_create_after_highest_possible_id_fails() {
        let mut repo = TicketRepository::new(MemoryKeyValueStore::new());
        let taken = Ticket::new(
            u64::MAX,
            "Alice",
            "alice@example.com",
            "Seeded with the last id",
            Priority::Low,
            ts(1_000),
        );
        repo.save(std::slice::from_ref(&taken)).unwrap();

        let mut s = TicketStore::open(repo.backend().clone()).unwrap();
        let err = s
            .create("Bobby", "bobby@example.com", "Wants a fresh id", Priority::High)
            .unwrap_err();
        assert!(matches!(err, TicketDeskError::IdsExhausted(u64::MAX)));
        assert_eq!(s.list(), &[taken]);

        assert!(s.delete(u64::MAX).unwrap());
        assert_eq!(s.count(), 0);
    }

    #[test]
    fn test_failed_write_leaves_session_unchanged() {
        let backend = FlakyStore::default();
        let fail = Rc::clone(&backend.fail_writes);
        let mut s = TicketStore::open(backend).unwrap();
        let a = s
            .create("Alice", "alice@example.com", "Saved before the disk filled", Priority::High)
            .unwrap();
        let before = s.list().to_vec();

        fail.set(true);
        assert!(s
            .create("Bobby", "bobby@example.com", "Never makes it to disk", Priority::Low)
            .is_err());
        assert!(s.toggle_read(a.id()).is_err());
        assert!(s.delete(a.id()).is_err());
        assert!(s.clear().is_err());
        assert_eq!(s.list(), before.as_slice());

        fail.set(false);
        let reopened = TicketStore::open(s.backend().clone()).unwrap();
        assert_eq!(reopened.list(), before.as_slice());
    }
}
