//! Unique identifiers for domain entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a domain entity.
///
/// Freshly minted identifiers use UUIDv7 (time-ordered); identifiers supplied
/// by the caller at rehydration time are adopted verbatim. The backing store
/// is a string so both paths share one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Mint a fresh, globally-unique identifier.
    ///
    /// Safe to call from concurrent call sites; uniqueness is delegated to
    /// the UUID source. Prefer passing IDs explicitly in tests for
    /// determinism.
    pub fn generate() -> Self {
        let id = Self(Uuid::now_v7().to_string());
        tracing::trace!(id = %id, "minted fresh entity id");
        id
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
