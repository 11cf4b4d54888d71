//! # Readiness Scorecard
//!
//! The percentage-weighted scoring model: one pass over the catalog
//! resolving each objective's status, then a weighted score where `met`
//! earns full credit, `partial` earns half, and both `not-met` and
//! `not-assessed` earn zero. The collapse of the last two is intentional,
//! carried over for score parity with earlier tool releases; they are
//! distinguished only in the reported counts.
//!
//! Rounding is round-half-away-from-zero (`f64::round`), matching the
//! `Math.round` behavior of prior output for the non-negative operands
//! that occur here. The documented worked example: met=2, partial=1,
//! notMet=1, total=4 gives round(250/4) = round(62.5) = 63.
//!
//! Two independent threshold ladders map the score to a letter grade and
//! a readiness level. They differ in the middle rungs and must never be
//! conflated.

use cmmc_catalog::Catalog;
use cmmc_core::{AssessmentStatus, FamilyId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::collaborators::{AssessmentState, ScoringContext};

/// A family scoring below this threshold produces a high-severity gap.
pub const FAMILY_GAP_THRESHOLD: u8 = 70;

/// More open POA&M entries than this produces a medium-severity gap.
pub const POAM_GAP_THRESHOLD: usize = 10;

// ─── Ladders ─────────────────────────────────────────────────────────

/// Letter grade for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 95 and above.
    A,
    /// 85 and above.
    B,
    /// 75 and above.
    C,
    /// 65 and above.
    D,
    /// Below 65.
    F,
}

impl Grade {
    /// Map a 0–100 score to a grade. Thresholds are checked in descending
    /// order; the first satisfied threshold wins.
    pub fn from_score(score: u8) -> Self {
        if score >= 95 {
            Self::A
        } else if score >= 85 {
            Self::B
        } else if score >= 75 {
            Self::C
        } else if score >= 65 {
            Self::D
        } else {
            Self::F
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(s)
    }
}

/// Readiness level for an overall score.
///
/// A second, independently tunable ladder. Its middle rungs (70, 50)
/// deliberately differ from the grade ladder's (75, 65).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadinessLevel {
    /// 95 and above.
    Ready,
    /// 85 and above.
    NearReady,
    /// 70 and above.
    InProgress,
    /// 50 and above.
    EarlyStage,
    /// Below 50.
    GettingStarted,
}

impl ReadinessLevel {
    /// Map a 0–100 score to a readiness level, descending thresholds.
    pub fn from_score(score: u8) -> Self {
        if score >= 95 {
            Self::Ready
        } else if score >= 85 {
            Self::NearReady
        } else if score >= 70 {
            Self::InProgress
        } else if score >= 50 {
            Self::EarlyStage
        } else {
            Self::GettingStarted
        }
    }

    /// The kebab-case label used on the wire and in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::NearReady => "near-ready",
            Self::InProgress => "in-progress",
            Self::EarlyStage => "early-stage",
            Self::GettingStarted => "getting-started",
        }
    }
}

impl std::fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Counts ──────────────────────────────────────────────────────────

/// Per-status objective counts with the weighted score formula.
///
/// Shared by the global tally and each per-family tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Total objectives tallied.
    pub total: u32,
    /// Count with status `met`.
    pub met: u32,
    /// Count with status `partial`.
    pub partial: u32,
    /// Count with status `not-met`.
    pub not_met: u32,
    /// Count with status `not-assessed`.
    pub not_assessed: u32,
}

impl StatusCounts {
    /// Tally one objective.
    pub fn record(&mut self, status: AssessmentStatus) {
        self.total += 1;
        match status {
            AssessmentStatus::Met => self.met += 1,
            AssessmentStatus::Partial => self.partial += 1,
            AssessmentStatus::NotMet => self.not_met += 1,
            AssessmentStatus::NotAssessed => self.not_assessed += 1,
        }
    }

    /// The weighted percentage score: `round((met*100 + partial*50) / total)`.
    ///
    /// An empty tally scores 0 rather than dividing by zero.
    pub fn score(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let credit = (self.met * 100 + self.partial * 50) as f64;
        (credit / self.total as f64).round() as u8
    }

    /// Count of objectives with a recorded verdict.
    pub fn assessed(&self) -> u32 {
        self.total - self.not_assessed
    }
}

// ─── Output types ────────────────────────────────────────────────────

/// Per-family score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyScore {
    /// Family code.
    pub family_id: FamilyId,
    /// Family display name.
    pub name: String,
    /// Weighted score restricted to this family's objectives.
    pub score: u8,
    /// Objectives in this family.
    pub total: u32,
    /// Met count.
    pub met: u32,
    /// Partial count.
    pub partial: u32,
    /// Not-met count.
    pub not_met: u32,
    /// Not-assessed count.
    pub not_assessed: u32,
}

/// Gap severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapSeverity {
    /// Blocks readiness; address first.
    High,
    /// Address before assessment.
    Medium,
    /// Improvement opportunity.
    Low,
}

/// The kind of deficiency a gap describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapArea {
    /// A family scoring below [`FAMILY_GAP_THRESHOLD`].
    Family,
    /// Met objectives with no linked evidence.
    Evidence,
    /// POA&M backlog above [`POAM_GAP_THRESHOLD`].
    Poam,
}

/// A derived readiness deficiency. Never persisted; recomputed on every
/// scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    /// Severity of the finding.
    pub severity: GapSeverity,
    /// What kind of deficiency this is.
    pub area: GapArea,
    /// The family concerned, for family gaps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_id: Option<FamilyId>,
    /// Human-readable finding.
    pub description: String,
    /// Count of items behind the finding (unmet objectives, unverified
    /// objectives, or open POA&M entries).
    pub count: u32,
}

/// A point-in-time computed readiness summary.
///
/// Field names are a wire contract shared with earlier releases of the
/// tool; they round-trip losslessly through JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessSnapshot {
    /// When the scorecard was computed.
    pub timestamp: Timestamp,
    /// Weighted percentage score, 0–100.
    pub overall_score: u8,
    /// Letter grade for the score.
    pub grade: Grade,
    /// Readiness level for the score.
    pub readiness_level: ReadinessLevel,
    /// Total objectives in the catalog.
    pub total_objectives: u32,
    /// Objectives with status `met`.
    pub met_objectives: u32,
    /// Objectives with status `partial`.
    pub partial_objectives: u32,
    /// Objectives with status `not-met`.
    pub not_met_objectives: u32,
    /// Objectives never assessed.
    pub not_assessed: u32,
    /// Percentage of objectives with a recorded verdict.
    pub assessment_progress: u8,
    /// Percentage of objectives with linked evidence.
    pub evidence_coverage: u8,
    /// Percentage of objectives with implementation notes.
    pub implementation_documentation: u8,
    /// Open POA&M entries at computation time.
    pub poam_count: u32,
    /// Per-family breakdown in catalog order.
    pub family_scores: Vec<FamilyScore>,
    /// Derived gaps: family gaps in catalog order, then the evidence gap,
    /// then the POA&M gap.
    pub gaps: Vec<Gap>,
}

// ─── Engine ──────────────────────────────────────────────────────────

/// Compute the readiness scorecard for a catalog and assessment state.
///
/// Pure function of its inputs. Collaborators absent from `ctx` contribute
/// zeros: no evidence index means 0% evidence coverage and no evidence gap,
/// no POA&M tracker means a zero count and no POA&M gap.
pub fn compute_scorecard(
    catalog: &Catalog,
    state: &dyn AssessmentState,
    ctx: &ScoringContext<'_>,
) -> ReadinessSnapshot {
    let mut global = StatusCounts::default();
    let mut family_scores = Vec::with_capacity(catalog.families.len());

    let mut with_evidence: u32 = 0;
    let mut with_notes: u32 = 0;
    let mut met_without_evidence: u32 = 0;

    for family in &catalog.families {
        let mut counts = StatusCounts::default();
        for control in &family.controls {
            for objective in &control.objectives {
                let status = state.status(&objective.id);
                counts.record(status);
                global.record(status);

                if let Some(evidence) = ctx.evidence {
                    if evidence.has_evidence(&objective.id) {
                        with_evidence += 1;
                    } else if status == AssessmentStatus::Met {
                        met_without_evidence += 1;
                    }
                }
                if let Some(notes) = ctx.notes {
                    if notes.has_notes(&objective.id) {
                        with_notes += 1;
                    }
                }
            }
        }
        family_scores.push(FamilyScore {
            family_id: family.id.clone(),
            name: family.name.clone(),
            score: counts.score(),
            total: counts.total,
            met: counts.met,
            partial: counts.partial,
            not_met: counts.not_met,
            not_assessed: counts.not_assessed,
        });
    }

    let overall_score = global.score();
    let poam_count = ctx.poam.map(|p| p.open_count()).unwrap_or(0);
    let gaps = derive_gaps(&family_scores, met_without_evidence, poam_count);

    if global.total == 0 {
        tracing::warn!("scoring an empty catalog; returning zero score");
    }
    tracing::debug!(
        score = overall_score,
        objectives = global.total,
        gaps = gaps.len(),
        "scorecard computed"
    );

    ReadinessSnapshot {
        timestamp: Timestamp::now(),
        overall_score,
        grade: Grade::from_score(overall_score),
        readiness_level: ReadinessLevel::from_score(overall_score),
        total_objectives: global.total,
        met_objectives: global.met,
        partial_objectives: global.partial,
        not_met_objectives: global.not_met,
        not_assessed: global.not_assessed,
        assessment_progress: percentage(global.assessed(), global.total),
        evidence_coverage: percentage(with_evidence, global.total),
        implementation_documentation: percentage(with_notes, global.total),
        poam_count: poam_count as u32,
        family_scores,
        gaps,
    }
}

/// Derive the gap list in its fixed order: family gaps (catalog order),
/// then the aggregate evidence gap, then the POA&M gap.
fn derive_gaps(
    family_scores: &[FamilyScore],
    met_without_evidence: u32,
    poam_count: usize,
) -> Vec<Gap> {
    let mut gaps = Vec::new();

    for fs in family_scores {
        if fs.score < FAMILY_GAP_THRESHOLD {
            let unmet = fs.total - fs.met;
            gaps.push(Gap {
                severity: GapSeverity::High,
                area: GapArea::Family,
                family_id: Some(fs.family_id.clone()),
                description: format!(
                    "{} scores {}% with {} objectives not fully met",
                    fs.name, fs.score, unmet
                ),
                count: unmet,
            });
        }
    }

    // One aggregate gap, not one per objective.
    if met_without_evidence > 0 {
        gaps.push(Gap {
            severity: GapSeverity::Medium,
            area: GapArea::Evidence,
            family_id: None,
            description: format!(
                "{met_without_evidence} objectives marked met have no linked evidence"
            ),
            count: met_without_evidence,
        });
    }

    if poam_count > POAM_GAP_THRESHOLD {
        gaps.push(Gap {
            severity: GapSeverity::Medium,
            area: GapArea::Poam,
            family_id: None,
            description: format!("{poam_count} POA&M entries are open"),
            count: poam_count as u32,
        });
    }

    gaps
}

/// `round(part / whole * 100)`, 0 when `whole` is 0.
fn percentage(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u8
}
