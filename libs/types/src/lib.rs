//! Types library for the laudo issuance service
//!
//! This library provides the domain type definitions shared by the counter
//! allocator and the HTTP issuer, keeping serialization formats and the
//! store error taxonomy in one place.
//!
//! # Modules
//! - `number`: Certificate numbers and display formatting (LaudoNumber, NumberFormat)
//! - `counter`: The persisted counter document and opaque version tags
//! - `certificate`: Issued certificate records with fixed-offset expiry
//! - `errors`: Store error taxonomy

// Public modules
pub mod certificate;
pub mod counter;
pub mod errors;
pub mod number;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::certificate::*;
    pub use crate::counter::*;
    pub use crate::errors::*;
    pub use crate::number::*;
}
