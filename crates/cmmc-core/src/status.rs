//! # Assessment Status — Single Source of Truth
//!
//! Defines the `AssessmentStatus` enum with the four per-objective states.
//! This is the ONE definition used across the stack. Every `match` on
//! `AssessmentStatus` must be exhaustive, so both scoring models and the
//! edit log handle all four states at compile time.
//!
//! ## Scoring Invariant
//!
//! `NotMet` and `NotAssessed` both contribute zero credit in the percentage
//! model and both fail a control in the point-deduction model. The collapse
//! is intentional, carried over from the original tool for score parity;
//! the two are distinguished only in reported counts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CmmcError;

/// Assessment status of a single objective.
///
/// Objectives absent from the assessment store are implicitly
/// [`AssessmentStatus::NotAssessed`]; the store keeps at most one status
/// per objective id (last write wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentStatus {
    /// Objective is fully implemented and verified.
    Met,
    /// Objective is partially implemented (half credit in the percentage model).
    Partial,
    /// Objective was assessed and found not implemented.
    NotMet,
    /// Objective has not been assessed yet.
    #[default]
    NotAssessed,
}

/// Total number of assessment states. Used for compile-time assertions.
pub const STATUS_COUNT: usize = 4;

impl AssessmentStatus {
    /// Returns all statuses in canonical display order.
    pub fn all() -> &'static [AssessmentStatus] {
        &[Self::Met, Self::Partial, Self::NotMet, Self::NotAssessed]
    }

    /// Returns the kebab-case string identifier for this status.
    ///
    /// This must match the serde serialization format and the status strings
    /// persisted by earlier releases of the tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Met => "met",
            Self::Partial => "partial",
            Self::NotMet => "not-met",
            Self::NotAssessed => "not-assessed",
        }
    }

    /// Whether an assessor has recorded a verdict for the objective.
    pub fn is_assessed(&self) -> bool {
        !matches!(self, Self::NotAssessed)
    }

    /// Credit contributed to the percentage score, out of 100.
    ///
    /// `NotMet` and `NotAssessed` are deliberately identical here; see the
    /// module docs.
    pub fn credit(&self) -> u32 {
        match self {
            Self::Met => 100,
            Self::Partial => 50,
            Self::NotMet | Self::NotAssessed => 0,
        }
    }

    /// Whether this status fails the owning control in the point-deduction
    /// model. Only `Met` avoids a deduction.
    pub fn fails_control(&self) -> bool {
        !matches!(self, Self::Met)
    }
}

impl std::fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentStatus {
    type Err = CmmcError;

    /// Parse a status from its kebab-case string identifier.
    ///
    /// Accepts the same identifiers produced by [`AssessmentStatus::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "met" => Ok(Self::Met),
            "partial" => Ok(Self::Partial),
            "not-met" => Ok(Self::NotMet),
            "not-assessed" => Ok(Self::NotAssessed),
            other => Err(CmmcError::Validation(format!(
                "unknown assessment status: {other:?}"
            ))),
        }
    }
}
