//! In-memory counter store
//!
//! Backend fake used by allocator and service tests. Versions every write
//! with a revision counter and rejects saves carrying a stale tag, which is
//! stricter than the real backends are required to be. Failure injection
//! switches force the degraded paths.

use crate::store::{CounterStore, Snapshot};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use types::counter::{CounterDocument, VersionTag};
use types::errors::StoreError;

#[derive(Default)]
struct Inner {
    document: Option<CounterDocument>,
    revision: u64,
}

/// In-memory `CounterStore` with failure injection
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    /// An empty store: the first `load` reports `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with an existing counter document.
    pub fn with_document(document: CounterDocument) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().expect("memory store lock poisoned");
            inner.document = Some(document);
            inner.revision = 1;
        }
        store
    }

    /// Force every subsequent `load` to fail as unreachable.
    pub fn fail_loads(&self, enabled: bool) {
        self.fail_loads.store(enabled, Ordering::SeqCst);
    }

    /// Force every subsequent `save` to fail as unreachable.
    pub fn fail_saves(&self, enabled: bool) {
        self.fail_saves.store(enabled, Ordering::SeqCst);
    }

    /// Inspect the stored document (test helper).
    pub fn document(&self) -> Option<CounterDocument> {
        self.inner
            .lock()
            .expect("memory store lock poisoned")
            .document
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn load(&self) -> Result<Snapshot, StoreError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StoreError::Unreachable("injected load failure".into()));
        }

        let inner = self.inner.lock().expect("memory store lock poisoned");
        match inner.document {
            Some(document) => Ok(Snapshot {
                document,
                version: Some(VersionTag::new(inner.revision.to_string())),
            }),
            None => Err(StoreError::NotFound),
        }
    }

    async fn save(
        &self,
        document: &CounterDocument,
        version: Option<&VersionTag>,
    ) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Unreachable("injected save failure".into()));
        }

        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        if inner.document.is_some() {
            if let Some(tag) = version {
                if tag.as_str() != inner.revision.to_string() {
                    return Err(StoreError::Conflict(format!(
                        "expected revision {}, got {}",
                        inner.revision, tag
                    )));
                }
            }
        }

        inner.document = Some(*document);
        inner.revision += 1;
        Ok(())
    }
}
