//! # Bounded Trend History
//!
//! An append-only log of saved readiness snapshots, capped at
//! [`HISTORY_CAP`] entries with FIFO eviction: snapshots are never
//! re-accessed for recency, so the oldest entry is always the one to go.
//!
//! Eviction happens *before* insertion, so the newest snapshot is never
//! the one dropped even at the cap.

use std::collections::VecDeque;

use cmmc_score::ReadinessSnapshot;
use serde::{Deserialize, Serialize};

/// Retention policy: the history keeps at most this many snapshots.
pub const HISTORY_CAP: usize = 50;

/// The bounded snapshot log. Entries are in append order, which is
/// time-ascending because snapshots are appended as they are created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrendHistory {
    snapshots: VecDeque<ReadinessSnapshot>,
}

impl TrendHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot, evicting the oldest entry first when at the cap.
    pub fn append(&mut self, snapshot: ReadinessSnapshot) {
        if self.snapshots.len() >= HISTORY_CAP {
            let evicted = self.snapshots.pop_front();
            if let Some(old) = evicted {
                tracing::debug!(timestamp = %old.timestamp, "evicted oldest snapshot at cap");
            }
        }
        self.snapshots.push_back(snapshot);
    }

    /// All snapshots, oldest first.
    pub fn list(&self) -> impl Iterator<Item = &ReadinessSnapshot> {
        self.snapshots.iter()
    }

    /// The most recently appended snapshot.
    pub fn latest(&self) -> Option<&ReadinessSnapshot> {
        self.snapshots.back()
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmmc_catalog::Catalog;
    use cmmc_score::{compute_scorecard, AssessmentMap, ScoringContext};

    fn snapshot(marker: u32) -> ReadinessSnapshot {
        // An empty-catalog snapshot, tagged through poam_count so entries
        // are tellable apart.
        let mut snap = compute_scorecard(
            &Catalog { families: vec![] },
            &AssessmentMap::new(),
            &ScoringContext::default(),
        );
        snap.poam_count = marker;
        snap
    }

    #[test]
    fn test_append_and_list_ascending() {
        let mut history = TrendHistory::new();
        history.append(snapshot(1));
        history.append(snapshot(2));
        history.append(snapshot(3));
        let markers: Vec<u32> = history.list().map(|s| s.poam_count).collect();
        assert_eq!(markers, vec![1, 2, 3]);
        assert_eq!(history.latest().unwrap().poam_count, 3);
    }

    #[test]
    fn test_cap_enforced_fifo() {
        let mut history = TrendHistory::new();
        for i in 0..(HISTORY_CAP as u32 + 7) {
            history.append(snapshot(i));
        }
        assert_eq!(history.len(), HISTORY_CAP);
        // Oldest seven were evicted; the newest is always retained.
        assert_eq!(history.list().next().unwrap().poam_count, 7);
        assert_eq!(
            history.latest().unwrap().poam_count,
            HISTORY_CAP as u32 + 6
        );
    }

    #[test]
    fn test_newest_survives_every_append() {
        let mut history = TrendHistory::new();
        for i in 0..(HISTORY_CAP as u32 * 2) {
            history.append(snapshot(i));
            assert_eq!(history.latest().unwrap().poam_count, i);
            assert!(history.len() <= HISTORY_CAP);
        }
    }

    #[test]
    fn test_serde_is_transparent_array() {
        let mut history = TrendHistory::new();
        history.append(snapshot(1));
        let json = serde_json::to_string(&history).unwrap();
        assert!(json.starts_with('['));
        let parsed: TrendHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, history);
    }
}
