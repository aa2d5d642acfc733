//! Laudo issuance HTTP service
//!
//! Exposes certificate issuance over HTTP: a POST endpoint that allocates
//! the next certificate number and records the issued laudo, a read-only
//! listing of what this process has issued, and a status endpoint
//! reporting the backend's current counter. Which counter backend serves
//! the allocator is chosen by configuration at startup.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
