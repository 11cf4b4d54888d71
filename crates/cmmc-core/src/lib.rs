//! # cmmc-core — Foundational Types for the CMMC Readiness Stack
//!
//! This crate is the bedrock of the Readiness Stack. It defines the
//! type-system primitives that every other crate in the workspace builds on;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for framework identifiers.** `FamilyId`,
//!    `ControlId`, `ObjectiveId`, `EvidenceId` are all newtypes. No bare
//!    strings for identifiers, so an objective id can never be passed where
//!    a control id is expected.
//!
//! 2. **Single `AssessmentStatus` enum.** One definition, four variants,
//!    exhaustive `match` everywhere. Both scoring models in `cmmc-score`
//!    consume the same taxonomy, so a new status forces every consumer to
//!    handle it at compile time.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so snapshot ordering and trend
//!    day-bucketing are deterministic across machines.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cmmc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::CmmcError;
pub use identity::{ControlId, EvidenceId, FamilyId, ObjectiveId, PoamId, SnapshotId};
pub use status::{AssessmentStatus, STATUS_COUNT};
pub use temporal::Timestamp;
