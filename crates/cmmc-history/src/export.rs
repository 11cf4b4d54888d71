//! # Export Document
//!
//! The one exportable artifact: the current scorecard plus the saved
//! history, stamped with the export time. Field names are a compatibility
//! contract with earlier releases and must round-trip losslessly.

use cmmc_core::{CmmcError, Timestamp};
use cmmc_score::ReadinessSnapshot;
use serde::{Deserialize, Serialize};

use crate::store::TrendHistory;

/// The exportable readiness report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// When the export was produced.
    pub export_date: Timestamp,
    /// The scorecard at export time.
    pub scorecard: ReadinessSnapshot,
    /// Saved snapshots, oldest first.
    pub history: Vec<ReadinessSnapshot>,
}

impl ExportDocument {
    /// Assemble an export from a freshly computed scorecard and the saved
    /// history.
    pub fn new(scorecard: ReadinessSnapshot, history: &TrendHistory) -> Self {
        Self {
            export_date: Timestamp::now(),
            scorecard,
            history: history.list().cloned().collect(),
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CmmcError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a previously exported document.
    pub fn from_json(json: &str) -> Result<Self, CmmcError> {
        Ok(serde_json::from_str(json)?)
    }
}
