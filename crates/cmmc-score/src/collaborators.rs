//! # Scoring Collaborators
//!
//! Traits for the external state the scoring engines read, plus in-memory
//! serde-loadable implementations used by the CLI and tests.
//!
//! The original tool resolved this state through ambient browser storage;
//! here every collaborator is an explicit parameter so both engines are
//! pure functions. A `ScoringContext` bundles the optional collaborators;
//! `None` degrades to zero contributions per the error-handling policy.

use std::collections::HashMap;
use std::path::Path;

use cmmc_core::{AssessmentStatus, CmmcError, ControlId, EvidenceId, ObjectiveId, PoamId, Timestamp};
use serde::{Deserialize, Serialize};

// ─── Traits ──────────────────────────────────────────────────────────

/// Read access to per-objective assessment status.
pub trait AssessmentState {
    /// Status for an objective. Objectives the store has never seen are
    /// [`AssessmentStatus::NotAssessed`].
    fn status(&self, objective: &ObjectiveId) -> AssessmentStatus;
}

/// Read access to evidence artifacts linked to objectives.
pub trait EvidenceIndex {
    /// Evidence ids linked to an objective; empty when none are linked.
    fn linked_evidence(&self, objective: &ObjectiveId) -> &[EvidenceId];

    /// Whether at least one evidence artifact is linked.
    fn has_evidence(&self, objective: &ObjectiveId) -> bool {
        !self.linked_evidence(objective).is_empty()
    }
}

/// Read access to implementation notes recorded per objective.
pub trait NotesIndex {
    /// Whether a non-empty implementation note exists for the objective.
    fn has_notes(&self, objective: &ObjectiveId) -> bool;
}

/// Read access to the POA&M log.
pub trait PoamTracker {
    /// Number of currently open POA&M entries.
    fn open_count(&self) -> usize;
}

/// Optional collaborators for a scoring pass. Absent collaborators
/// contribute zeros; they never fail the computation.
#[derive(Default, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// Evidence linkage, if available.
    pub evidence: Option<&'a dyn EvidenceIndex>,
    /// Implementation notes, if available.
    pub notes: Option<&'a dyn NotesIndex>,
    /// POA&M log, if available.
    pub poam: Option<&'a dyn PoamTracker>,
}

// ─── In-memory implementations ───────────────────────────────────────

/// Objective id → status map. Last write wins; at most one status per
/// objective at any time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentMap(HashMap<ObjectiveId, AssessmentStatus>);

impl AssessmentMap {
    /// Create an empty assessment map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a status for an objective, replacing any prior status.
    pub fn set(&mut self, objective: ObjectiveId, status: AssessmentStatus) {
        self.0.insert(objective, status);
    }

    /// Number of objectives with an explicit status entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Load from a JSON file of the form `{"3.1.1[a]": "met", ...}`.
    pub fn from_file(path: &Path) -> Result<Self, CmmcError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl AssessmentState for AssessmentMap {
    fn status(&self, objective: &ObjectiveId) -> AssessmentStatus {
        self.0.get(objective).copied().unwrap_or_default()
    }
}

/// Objective id → linked evidence ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceMap(HashMap<ObjectiveId, Vec<EvidenceId>>);

impl EvidenceMap {
    /// Create an empty evidence map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Link an evidence artifact to an objective.
    pub fn link(&mut self, objective: ObjectiveId, evidence: EvidenceId) {
        self.0.entry(objective).or_default().push(evidence);
    }

    /// Load from a JSON file of the form `{"3.1.1[a]": ["ev-1"], ...}`.
    pub fn from_file(path: &Path) -> Result<Self, CmmcError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl EvidenceIndex for EvidenceMap {
    fn linked_evidence(&self, objective: &ObjectiveId) -> &[EvidenceId] {
        self.0.get(objective).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Objective id → free-text implementation note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotesMap(HashMap<ObjectiveId, String>);

impl NotesMap {
    /// Create an empty notes map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an implementation note for an objective.
    pub fn set(&mut self, objective: ObjectiveId, note: String) {
        self.0.insert(objective, note);
    }

    /// Load from a JSON file of the form `{"3.1.1[a]": "note text", ...}`.
    pub fn from_file(path: &Path) -> Result<Self, CmmcError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl NotesIndex for NotesMap {
    fn has_notes(&self, objective: &ObjectiveId) -> bool {
        self.0.get(objective).is_some_and(|n| !n.trim().is_empty())
    }
}

/// A tracked remediation commitment for an unmet control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoamEntry {
    /// Entry identifier, minted on creation.
    #[serde(default)]
    pub id: PoamId,
    /// The control this entry remediates.
    pub control_id: ControlId,
    /// Remediation description and milestones.
    #[serde(default)]
    pub description: String,
    /// When the entry was opened.
    pub opened: Timestamp,
    /// When the entry was closed, if it has been.
    #[serde(default)]
    pub closed: Option<Timestamp>,
}

impl PoamEntry {
    /// Whether the entry is still open.
    pub fn is_open(&self) -> bool {
        self.closed.is_none()
    }
}

/// The POA&M log: an ordered list of remediation entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoamLog(Vec<PoamEntry>);

impl PoamLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: PoamEntry) {
        self.0.push(entry);
    }

    /// All entries, open and closed.
    pub fn entries(&self) -> &[PoamEntry] {
        &self.0
    }

    /// Load from a JSON file holding an array of entries.
    pub fn from_file(path: &Path) -> Result<Self, CmmcError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl PoamTracker for PoamLog {
    fn open_count(&self) -> usize {
        self.0.iter().filter(|e| e.is_open()).count()
    }
}

// ─── Edit log ────────────────────────────────────────────────────────

/// A single recorded status change, the unit of the edit-history log
/// feeding the executive trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTransition {
    /// The objective whose status changed.
    pub objective_id: ObjectiveId,
    /// Status before the change.
    pub from: AssessmentStatus,
    /// Status after the change.
    pub to: AssessmentStatus,
    /// When the change was recorded.
    pub at: Timestamp,
}

/// Load an edit log from a JSON file holding an array of transitions.
pub fn load_transitions(path: &Path) -> Result<Vec<StatusTransition>, CmmcError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(id: &str) -> ObjectiveId {
        ObjectiveId::from(id)
    }

    #[test]
    fn test_missing_objective_is_not_assessed() {
        let map = AssessmentMap::new();
        assert_eq!(map.status(&obj("3.1.1[a]")), AssessmentStatus::NotAssessed);
    }

    #[test]
    fn test_last_write_wins() {
        let mut map = AssessmentMap::new();
        map.set(obj("3.1.1[a]"), AssessmentStatus::Partial);
        map.set(obj("3.1.1[a]"), AssessmentStatus::Met);
        assert_eq!(map.status(&obj("3.1.1[a]")), AssessmentStatus::Met);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_assessment_map_serde_shape() {
        let mut map = AssessmentMap::new();
        map.set(obj("3.1.1[a]"), AssessmentStatus::NotMet);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"3.1.1[a]":"not-met"}"#);
        let parsed: AssessmentMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_evidence_default_empty() {
        let map = EvidenceMap::new();
        assert!(map.linked_evidence(&obj("3.1.1[a]")).is_empty());
        assert!(!map.has_evidence(&obj("3.1.1[a]")));
    }

    #[test]
    fn test_evidence_link() {
        let mut map = EvidenceMap::new();
        map.link(obj("3.1.1[a]"), EvidenceId("ev-1".to_string()));
        map.link(obj("3.1.1[a]"), EvidenceId("ev-2".to_string()));
        assert_eq!(map.linked_evidence(&obj("3.1.1[a]")).len(), 2);
        assert!(map.has_evidence(&obj("3.1.1[a]")));
    }

    #[test]
    fn test_blank_note_does_not_count() {
        let mut map = NotesMap::new();
        map.set(obj("3.1.1[a]"), "   ".to_string());
        assert!(!map.has_notes(&obj("3.1.1[a]")));
        map.set(obj("3.1.1[a]"), "enforced via IdP group policy".to_string());
        assert!(map.has_notes(&obj("3.1.1[a]")));
    }

    #[test]
    fn test_poam_open_count_ignores_closed() {
        let mut log = PoamLog::new();
        log.push(PoamEntry {
            id: PoamId::new(),
            control_id: ControlId("3.1.1".to_string()),
            description: "deploy MFA".to_string(),
            opened: Timestamp::parse("2026-01-01T00:00:00Z").unwrap(),
            closed: None,
        });
        log.push(PoamEntry {
            id: PoamId::new(),
            control_id: ControlId("3.3.1".to_string()),
            description: "enable audit log forwarding".to_string(),
            opened: Timestamp::parse("2026-01-02T00:00:00Z").unwrap(),
            closed: Some(Timestamp::parse("2026-02-01T00:00:00Z").unwrap()),
        });
        assert_eq!(log.open_count(), 1);
    }

    #[test]
    fn test_poam_entry_defaults_from_json() {
        let json = r#"{"controlId": "3.1.1", "opened": "2026-01-01T00:00:00Z"}"#;
        let entry: PoamEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_open());
        assert_eq!(entry.description, "");
    }

    #[test]
    fn test_transition_serde_roundtrip() {
        let t = StatusTransition {
            objective_id: obj("3.1.1[a]"),
            from: AssessmentStatus::NotAssessed,
            to: AssessmentStatus::Met,
            at: Timestamp::parse("2026-03-01T09:30:00Z").unwrap(),
        };
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"objectiveId\""));
        let parsed: StatusTransition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t);
    }
}
