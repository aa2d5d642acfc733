//! The persisted counter document and backend version tags
//!
//! The counter is the sole persisted entity of the service: a JSON document
//! holding the last allocated number. Backends that support conditional
//! writes attach an opaque version tag to every read, which must be handed
//! back on the next write so a stale update can be rejected. The check is
//! best effort only; no backend is required to honor it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted counter state: `{ "last_number": N }`
///
/// A missing `last_number` field deserializes as `0`, matching the
/// degraded default used when the document is absent entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterDocument {
    #[serde(default)]
    pub last_number: u64,
}

impl CounterDocument {
    pub fn new(last_number: u64) -> Self {
        Self { last_number }
    }
}

/// Opaque backend-assigned document version
///
/// For the GitHub store this is the blob SHA; the in-memory fake uses a
/// revision counter. The allocator treats it as an opaque token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionTag(String);

impl VersionTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VersionTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}
