//! # Framework Identity Newtypes
//!
//! Newtype wrappers for all identifiers in the Readiness Stack. These
//! prevent accidental identifier confusion: you cannot pass an
//! `ObjectiveId` where a `ControlId` is expected.
//!
//! Framework-defined identifiers (`FamilyId`, `ControlId`, `ObjectiveId`)
//! wrap strings because their format varies by framework revision
//! (`"3.1.1[a]"` under rev 2, `"03.01.01.a[01]"` under rev 3). Identifiers
//! minted by this tool (`SnapshotId`, `PoamId`) wrap UUIDs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Two-letter control family code (e.g. `AC`, `AU`, `SC`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyId(pub String);

/// Framework control identifier (e.g. `3.1.1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlId(pub String);

/// Framework assessment objective identifier (e.g. `3.1.1[a]`).
///
/// The smallest assessable unit; assessment status, evidence links, and
/// implementation notes are all keyed by this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectiveId(pub String);

/// Identifier of an evidence artifact linked to an objective.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceId(pub String);

/// Unique identifier for a saved readiness snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotId(pub Uuid);

/// Unique identifier for a POA&M entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoamId(pub Uuid);

impl FamilyId {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ControlId {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ObjectiveId {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl EvidenceId {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SnapshotId {
    /// Generate a new random snapshot identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SnapshotId {
    fn default() -> Self {
        Self::new()
    }
}

impl PoamId {
    /// Generate a new random POA&M entry identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PoamId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FamilyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ObjectiveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "snapshot:{}", self.0)
    }
}

impl std::fmt::Display for PoamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "poam:{}", self.0)
    }
}

impl From<&str> for ObjectiveId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
