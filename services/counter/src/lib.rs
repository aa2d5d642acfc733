//! Counter Allocation Service
//!
//! Provides sequential certificate-number allocation backed by a pluggable
//! counter store. The store holds a single JSON document with the last
//! allocated number; backends exist for a local file, a remote
//! GitHub-hosted document (REST contents API), and a hybrid of the two.
//!
//! Allocation is deliberately fail-soft: an unreadable backend is treated
//! as an empty counter, and a failed write never blocks number issuance.
//! The caller receives an advisory flag instead.

pub mod allocator;
pub mod file;
pub mod github;
pub mod hybrid;
pub mod memory;
pub mod store;

pub use allocator::{Allocation, Allocator};
pub use file::FileStore;
pub use github::{GithubConfig, GithubStore};
pub use hybrid::HybridStore;
pub use memory::MemoryStore;
pub use store::{CounterStore, Snapshot};
