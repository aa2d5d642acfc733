//! Sequential certificate-number allocation
//!
//! Read the counter, increment in memory, write it back, return the number.
//! Both halves degrade independently: an unreadable backend counts as an
//! empty one, and a failed write is reported through the `persisted` flag
//! rather than as an error. A failed write means the same number can be
//! handed out again on the next call; that duplication is an accepted
//! property of this design, not a defect the allocator tries to repair.

use crate::store::{CounterStore, Snapshot};
use std::sync::Arc;
use tracing::warn;
use types::counter::CounterDocument;

/// Outcome of one allocation
///
/// `number` is always present; `persisted` reports whether the incremented
/// counter actually landed in the backend. Callers surface a non-fatal
/// advisory when it did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub number: u64,
    pub persisted: bool,
}

/// Allocator owning an injected counter store
pub struct Allocator {
    store: Arc<dyn CounterStore>,
}

impl Allocator {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store }
    }

    /// Allocate the next certificate number.
    ///
    /// Never fails: the worst case is a number that was not durably
    /// recorded, flagged via `persisted = false`.
    pub async fn allocate_next(&self) -> Allocation {
        let snapshot = match self.store.load().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("counter read failed, starting from zero: {err}");
                Snapshot::empty()
            }
        };

        // Saturates instead of wrapping if a document ever holds u64::MAX.
        let number = snapshot.document.last_number.saturating_add(1);
        let updated = CounterDocument::new(number);

        // Single conditional write attempt; no retry, no verification.
        let persisted = match self.store.save(&updated, snapshot.version.as_ref()).await {
            Ok(()) => true,
            Err(err) => {
                warn!("counter update to {number} failed, number may repeat: {err}");
                false
            }
        };

        Allocation { number, persisted }
    }
}
