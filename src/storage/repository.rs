use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::ticket::Ticket;
use crate::types::TICKETS_KEY;

/// JSON persistence of the full ticket sequence under a single key.
#[derive(Debug, Clone)]
pub struct TicketRepository<S> {
    backend: S,
}

impl<S: KeyValueStore> TicketRepository<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Overwrite the stored sequence with `tickets`, order included.
    pub fn save(&mut self, tickets: &[Ticket]) -> Result<()> {
        let bytes = serde_json::to_vec(tickets)?;
        self.backend.set(TICKETS_KEY, &bytes)?;
        tracing::debug!(count = tickets.len(), bytes = bytes.len(), "saved tickets");
        Ok(())
    }

    /// Read the stored sequence.
    ///
    /// A missing key is an empty desk. So is a value that no longer parses:
    /// it is reported and left in place until the next save replaces it.
    pub fn load(&self) -> Result<Vec<Ticket>> {
        let Some(bytes) = self.backend.get(TICKETS_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice::<Vec<Ticket>>(&bytes) {
            Ok(tickets) => {
                tracing::debug!(count = tickets.len(), "loaded tickets");
                Ok(tickets)
            }
            Err(e) => {
                tracing::warn!("Stored tickets are unreadable, starting empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Forget the stored sequence entirely.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove(TICKETS_KEY)
    }
}
