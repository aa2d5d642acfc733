//! Error taxonomy for counter store backends
//!
//! Every variant is recovered locally by the allocator: a failed read falls
//! back to a zeroed document, a failed write downgrades the allocation to
//! "not persisted". Nothing here is fatal to a request.

use thiserror::Error;

/// Errors surfaced by a counter store backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// Network failure, timeout, or an unexpected HTTP status.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// The backend rejected a write carrying a stale version tag.
    #[error("version conflict: {0}")]
    Conflict(String),

    /// The document exists but could not be parsed.
    #[error("malformed counter document: {0}")]
    Malformed(String),

    /// The document does not exist yet.
    #[error("counter document not found")]
    NotFound,
}
