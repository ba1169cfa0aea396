use jiff::Timestamp;

use crate::error::{Result, TicketDeskError};
use crate::types::TicketId;

/// Hands out strictly increasing ticket ids.
///
/// Ids track the creation time in milliseconds, so they sort like the
/// timestamps they came from, but two tickets created within the same
/// millisecond (or after the clock steps backwards) still get distinct ids.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: TicketId,
}

impl IdAllocator {
    /// Start after the highest id already in use.
    pub fn after(existing: impl IntoIterator<Item = TicketId>) -> Self {
        Self {
            last: existing.into_iter().max().unwrap_or(0),
        }
    }

    /// Next id for a ticket created at `now`.
    ///
    /// Fails once every id above the highest one seen is used up.
    pub fn next_at(&mut self, now: Timestamp) -> Result<TicketId> {
        let millis = TicketId::try_from(now.as_millisecond()).unwrap_or(0);
        let next = self
            .last
            .checked_add(1)
            .ok_or(TicketDeskError::IdsExhausted(self.last))?;
        let id = millis.max(next);
        self.last = id;
        Ok(id)
    }
}
