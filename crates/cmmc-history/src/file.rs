//! # File-Backed History Persistence
//!
//! Loads and saves the trend history as a JSON array. Malformed persisted
//! data (missing file, corrupt JSON, non-array shape) degrades to an empty
//! history with a warning: the engine recomputes from current state either
//! way, so losing the trend is recoverable while crashing is not.
//!
//! Loading also re-enforces the cap: a file written by a build with a
//! larger cap keeps only the newest [`HISTORY_CAP`] entries.

use std::path::{Path, PathBuf};

use cmmc_core::CmmcError;
use cmmc_score::ReadinessSnapshot;

use crate::store::{TrendHistory, HISTORY_CAP};

/// Handle to a history file.
#[derive(Debug, Clone)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    /// Create a handle for the given path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The underlying path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the history, degrading to empty on any read or parse failure.
    pub fn load(&self) -> TrendHistory {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return TrendHistory::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e,
                    "could not read history file, starting empty");
                return TrendHistory::new();
            }
        };
        let snapshots: Vec<ReadinessSnapshot> = match serde_json::from_str(&json) {
            Ok(snapshots) => snapshots,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e,
                    "corrupt history file, starting empty");
                return TrendHistory::new();
            }
        };
        let mut history = TrendHistory::new();
        let skip = snapshots.len().saturating_sub(HISTORY_CAP);
        for snapshot in snapshots.into_iter().skip(skip) {
            history.append(snapshot);
        }
        history
    }

    /// Write the history back out as a pretty-printed JSON array.
    pub fn save(&self, history: &TrendHistory) -> Result<(), CmmcError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(history)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
