//! Local file counter store
//!
//! Keeps the counter document as pretty-printed JSON at a configured path.
//! A plain file has no compare-and-set, so this store produces no version
//! tags and ignores the one supplied on save.

use crate::store::{CounterStore, Snapshot};
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use tokio::fs;
use types::counter::{CounterDocument, VersionTag};
use types::errors::StoreError;

/// `CounterStore` backed by a JSON file on the local filesystem
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CounterStore for FileStore {
    async fn load(&self) -> Result<Snapshot, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound)
            }
            Err(err) => return Err(StoreError::Unreachable(err.to_string())),
        };

        let document: CounterDocument =
            serde_json::from_slice(&bytes).map_err(|err| StoreError::Malformed(err.to_string()))?;

        Ok(Snapshot {
            document,
            version: None,
        })
    }

    async fn save(
        &self,
        document: &CounterDocument,
        _version: Option<&VersionTag>,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(document)
            .map_err(|err| StoreError::Malformed(err.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|err| StoreError::Unreachable(err.to_string()))
    }
}
