//! # cmmc-score — Readiness Scoring Engines
//!
//! The computational core of the Readiness Stack. Two deliberately distinct
//! scoring models over the same (catalog, assessment state) inputs:
//!
//! - **Readiness scorecard** (`scorecard.rs`): percentage-weighted score
//!   (met = full credit, partial = half, everything else zero), letter
//!   grade, readiness level, per-family breakdown, coverage percentages,
//!   and derived gap findings.
//!
//! - **Executive view** (`executive.rs`): the SPRS point-deduction model
//!   (ceiling 110, a control's full weight deducted when any of its
//!   objectives is not met), risk-area ranking, rule-driven
//!   recommendations, and a day-bucketed transition trend series.
//!
//! The two models are separate reports in the tool and are NOT reconciled;
//! neither is derived from the other.
//!
//! ## Design
//!
//! Both engines are pure functions. External state (assessment store,
//! evidence links, implementation notes, POA&M log) is injected through the
//! collaborator traits in `collaborators.rs`; the engines never mutate
//! anything and never perform I/O. Missing collaborators degrade to zero
//! contributions rather than failing the computation.

pub mod collaborators;
pub mod executive;
pub mod scorecard;

pub use collaborators::{
    AssessmentMap, AssessmentState, EvidenceIndex, EvidenceMap, NotesIndex, NotesMap, PoamEntry,
    PoamLog, PoamTracker, ScoringContext, StatusTransition,
};
pub use executive::{
    compute_executive_view, ExecutiveAnalysis, Priority, Recommendation, RiskArea, TrendPoint,
    SPRS_CEILING,
};
pub use scorecard::{
    compute_scorecard, FamilyScore, Gap, GapArea, GapSeverity, Grade, ReadinessLevel,
    ReadinessSnapshot, StatusCounts, FAMILY_GAP_THRESHOLD, POAM_GAP_THRESHOLD,
};
