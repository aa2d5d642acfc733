//! Hybrid counter store: remote primary with a local mirror
//!
//! Reads prefer the remote store and fall back to the mirror when the
//! remote is unreadable for any reason. Writes always land in the mirror
//! first (failures are logged, never propagated) and then go to the
//! remote, whose result is the result of the operation. Version tags are
//! the remote store's; the mirror is written untagged.

use crate::store::{CounterStore, Snapshot};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use types::counter::{CounterDocument, VersionTag};
use types::errors::StoreError;

/// Remote store with a best-effort local mirror
pub struct HybridStore {
    remote: Arc<dyn CounterStore>,
    mirror: Arc<dyn CounterStore>,
}

impl HybridStore {
    pub fn new(remote: Arc<dyn CounterStore>, mirror: Arc<dyn CounterStore>) -> Self {
        Self { remote, mirror }
    }
}

#[async_trait]
impl CounterStore for HybridStore {
    async fn load(&self) -> Result<Snapshot, StoreError> {
        match self.remote.load().await {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                warn!("remote counter read failed, using local mirror: {err}");
                self.mirror.load().await
            }
        }
    }

    async fn save(
        &self,
        document: &CounterDocument,
        version: Option<&VersionTag>,
    ) -> Result<(), StoreError> {
        if let Err(err) = self.mirror.save(document, None).await {
            warn!("local counter mirror update failed: {err}");
        }

        self.remote.save(document, version).await
    }
}
