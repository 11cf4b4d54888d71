//! # Executive View — SPRS Aggregation
//!
//! The point-deduction scoring model and the executive report built on it.
//! Scoring starts at a ceiling of 110 and subtracts each control's full
//! weight the moment any objective under that control is not `met`; a
//! `partial` or `not-assessed` objective fails its control exactly like a
//! `not-met` one. The sum of weights can exceed the ceiling, so the score
//! is signed and may go negative. This mirrors the official SPRS
//! convention and is deliberately not reconciled with the percentage
//! model in `scorecard.rs`.
//!
//! On top of the score the view derives a ranked risk-area list, an
//! ordered rule-driven recommendation list, and a day-bucketed trend
//! series from the edit-history log.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use cmmc_catalog::Catalog;
use cmmc_core::{AssessmentStatus, FamilyId};
use serde::{Deserialize, Serialize};

use crate::collaborators::{AssessmentState, PoamTracker, StatusTransition};
use crate::scorecard::{StatusCounts, POAM_GAP_THRESHOLD};

/// The SPRS scoring ceiling: a fully met assessment scores 110.
pub const SPRS_CEILING: i32 = 110;

/// Control weight at or above which a failed objective counts as a
/// critical risk item.
const CRITICAL_WEIGHT: u32 = 5;

/// Control weight at or above which a failed objective counts as a
/// high risk item.
const HIGH_WEIGHT: u32 = 3;

// ─── Output types ────────────────────────────────────────────────────

/// Recommendation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// Act now.
    High,
    /// Schedule soon.
    Medium,
    /// Steady state.
    Low,
}

/// One entry in the ranked risk-area list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskArea {
    /// Family code.
    pub family_id: FamilyId,
    /// Family display name.
    pub name: String,
    /// Failed objectives under POA&M-ineligible or weight ≥ 5 controls.
    pub critical: u32,
    /// Failed objectives under weight ≥ 3 controls.
    pub high: u32,
    /// Remaining failed objectives.
    pub moderate: u32,
    /// Total SPRS points this family's failed controls deduct.
    pub sprs_impact: u32,
}

/// A generated recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Priority of the recommendation.
    pub priority: Priority,
    /// The recommended action.
    pub action: String,
}

/// One day of the transition trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// UTC calendar day.
    pub date: NaiveDate,
    /// Transitions to `met` recorded on this day.
    pub up: u32,
    /// Transitions to `not-met` recorded on this day.
    pub down: u32,
}

/// The executive report: SPRS score, risk ranking, recommendations, trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveAnalysis {
    /// Point-deduction score; ceiling 110, may be negative.
    pub sprs_score: i32,
    /// Percentage of objectives fully met.
    pub compliance_rate: u8,
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
    /// Open POA&M entries.
    pub poam_count: u32,
    /// Families with concentrated risk, ranked by critical count then
    /// SPRS impact, both descending.
    pub risk_areas: Vec<RiskArea>,
    /// Ordered recommendations; never empty.
    pub recommendations: Vec<Recommendation>,
    /// Day-bucketed transition series, ascending by day.
    pub trend: Vec<TrendPoint>,
}

// ─── Engine ──────────────────────────────────────────────────────────

/// Compute the executive view for a catalog and assessment state.
///
/// `poam` degrades to a zero count when absent; `edit_log` may be empty,
/// yielding an empty trend series.
pub fn compute_executive_view(
    catalog: &Catalog,
    state: &dyn AssessmentState,
    poam: Option<&dyn PoamTracker>,
    edit_log: &[StatusTransition],
) -> ExecutiveAnalysis {
    let mut counts = StatusCounts::default();
    let mut deducted: u32 = 0;
    let mut risk_areas = Vec::new();

    for family in &catalog.families {
        let mut critical: u32 = 0;
        let mut high: u32 = 0;
        let mut moderate: u32 = 0;
        let mut sprs_impact: u32 = 0;

        for control in &family.controls {
            let mut control_failed = false;
            for objective in &control.objectives {
                let status = state.status(&objective.id);
                counts.record(status);
                if status.fails_control() {
                    control_failed = true;
                }
                // Risk items count only assessed shortfalls.
                if matches!(status, AssessmentStatus::NotMet | AssessmentStatus::Partial) {
                    if !control.poam_eligible || control.sprs_weight() >= CRITICAL_WEIGHT {
                        critical += 1;
                    } else if control.sprs_weight() >= HIGH_WEIGHT {
                        high += 1;
                    } else {
                        moderate += 1;
                    }
                }
            }
            if control_failed {
                deducted += control.sprs_weight();
                sprs_impact += control.sprs_weight();
            }
        }

        if critical >= 1 || high > 2 {
            risk_areas.push(RiskArea {
                family_id: family.id.clone(),
                name: family.name.clone(),
                critical,
                high,
                moderate,
                sprs_impact,
            });
        }
    }

    risk_areas.sort_by(|a, b| {
        b.critical
            .cmp(&a.critical)
            .then(b.sprs_impact.cmp(&a.sprs_impact))
    });

    let sprs_score = SPRS_CEILING - deducted as i32;
    let compliance_rate = if counts.total == 0 {
        0
    } else {
        (counts.met as f64 / counts.total as f64 * 100.0).round() as u8
    };
    let poam_count = poam.map(|p| p.open_count()).unwrap_or(0);

    let recommendations = recommend(&counts, compliance_rate, sprs_score, poam_count);
    tracing::debug!(
        sprs = sprs_score,
        risk_areas = risk_areas.len(),
        "executive view computed"
    );

    ExecutiveAnalysis {
        sprs_score,
        compliance_rate,
        total_objectives: counts.total,
        met_objectives: counts.met,
        partial_objectives: counts.partial,
        not_met_objectives: counts.not_met,
        not_assessed: counts.not_assessed,
        poam_count: poam_count as u32,
        risk_areas,
        recommendations,
        trend: trend_series(edit_log),
    }
}

/// Evaluate the recommendation rules top to bottom. Rules are independent
/// (several may fire) and each contributes at most one entry; the fallback
/// fires only when nothing else did.
fn recommend(
    counts: &StatusCounts,
    compliance_rate: u8,
    sprs_score: i32,
    poam_count: usize,
) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let total = counts.total as f64;

    if counts.total > 0 && compliance_rate < 50 {
        out.push(Recommendation {
            priority: Priority::High,
            action: format!(
                "Launch a prioritized remediation program: only {compliance_rate}% of \
                 objectives are met"
            ),
        });
    }
    if sprs_score < 0 {
        out.push(Recommendation {
            priority: Priority::High,
            action: format!(
                "SPRS score is negative ({sprs_score}); remediate high-weight controls first"
            ),
        });
    }
    if counts.total > 0 && counts.not_assessed as f64 / total > 0.25 {
        out.push(Recommendation {
            priority: Priority::Medium,
            action: format!(
                "Complete assessment coverage: {} objectives have never been assessed",
                counts.not_assessed
            ),
        });
    }
    if counts.total > 0 && counts.partial as f64 / total > 0.20 {
        out.push(Recommendation {
            priority: Priority::Medium,
            action: format!(
                "Close out partially implemented objectives: {} are at half credit",
                counts.partial
            ),
        });
    }
    if poam_count > POAM_GAP_THRESHOLD {
        out.push(Recommendation {
            priority: Priority::Medium,
            action: format!("Burn down the POA&M backlog: {poam_count} entries are open"),
        });
    }

    if out.is_empty() {
        out.push(Recommendation {
            priority: Priority::Low,
            action: "Maintain current posture and keep evidence current".to_string(),
        });
    }
    out
}

/// Bucket edit-log transitions by UTC calendar day. Transitions to `met`
/// count up, transitions to `not-met` count down; other targets are
/// ignored. Ascending day order.
fn trend_series(edit_log: &[StatusTransition]) -> Vec<TrendPoint> {
    let mut days: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    for t in edit_log {
        match t.to {
            AssessmentStatus::Met => days.entry(t.at.day()).or_default().0 += 1,
            AssessmentStatus::NotMet => days.entry(t.at.day()).or_default().1 += 1,
            AssessmentStatus::Partial | AssessmentStatus::NotAssessed => {}
        }
    }
    days.into_iter()
        .map(|(date, (up, down))| TrendPoint { date, up, down })
        .collect()
}
