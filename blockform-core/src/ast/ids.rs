//! Block identifiers
//!
//!     Ids are opaque: they are assigned once when a node is created and never take part in
//!     comparisons. Generation is injected so that tests can produce reproducible trees while
//!     real conversions use random UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Opaque, unique identifier of a block node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Source of fresh block ids
///
/// Takes `&self` so one generator can be shared by formats that are themselves `Send + Sync`.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> BlockId;
}

/// Deterministic ids: `<prefix><n>` with n counting up from 1
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("block-")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> BlockId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        BlockId(format!("{}{}", self.prefix, n))
    }
}

/// Random v4 UUID ids
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> BlockId {
        BlockId(Uuid::new_v4().to_string())
    }
}
