//! Counter store contract
//!
//! The abstract get/put-with-optional-version interface every backend
//! implements. A `load` returns the document together with whatever version
//! tag the backend assigns; a `save` hands that tag back so the backend can
//! reject a stale write. Backends without conditional writes ignore the tag.

use async_trait::async_trait;
use types::counter::{CounterDocument, VersionTag};
use types::errors::StoreError;

/// A point-in-time view of the counter document as read from a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub document: CounterDocument,
    /// Backend-assigned version of the read, if the backend versions at all.
    pub version: Option<VersionTag>,
}

impl Snapshot {
    /// The degraded default used when the backend is absent or unreadable:
    /// a zeroed counter with no version tag.
    pub fn empty() -> Self {
        Self {
            document: CounterDocument::default(),
            version: None,
        }
    }
}

/// Pluggable persistence backend for the counter document
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Fetch the current counter document.
    async fn load(&self) -> Result<Snapshot, StoreError>;

    /// Write the counter document back, supplying the previously-read
    /// version tag when one exists. Whether a stale tag is actually
    /// rejected is up to the backend.
    async fn save(
        &self,
        document: &CounterDocument,
        version: Option<&VersionTag>,
    ) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_is_zeroed_and_unversioned() {
        let snapshot = Snapshot::empty();
        assert_eq!(snapshot.document.last_number, 0);
        assert!(snapshot.version.is_none());
    }
}
