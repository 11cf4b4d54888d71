//! # `cmmc snapshot` — Trend History Management
//!
//! Saving a snapshot is the one mutating action in the stack: the
//! scorecard is computed, appended to the file-backed history (evicting
//! the oldest entry at the cap), and written back out.

use std::path::{Path, PathBuf};

use cmmc_history::HistoryFile;
use cmmc_score::compute_scorecard;

use crate::inputs::InputArgs;

/// Arguments for the `snapshot` subcommand.
#[derive(clap::Args, Debug)]
pub struct SnapshotArgs {
    #[command(subcommand)]
    pub command: SnapshotCommand,
}

/// Snapshot operations.
#[derive(clap::Subcommand, Debug)]
pub enum SnapshotCommand {
    /// Compute the current scorecard and append it to the history.
    Save {
        #[command(flatten)]
        inputs: InputArgs,

        /// History JSON file.
        #[arg(long)]
        history: PathBuf,
    },
    /// List saved snapshots, oldest first.
    List {
        /// History JSON file.
        #[arg(long)]
        history: PathBuf,
    },
}

/// Dispatch the snapshot operation.
pub fn run(args: &SnapshotArgs) -> anyhow::Result<()> {
    match &args.command {
        SnapshotCommand::Save { inputs, history } => save(inputs, history),
        SnapshotCommand::List { history } => list(history),
    }
}

fn save(inputs: &InputArgs, history_path: &Path) -> anyhow::Result<()> {
    let loaded = inputs.load()?;
    let snapshot = compute_scorecard(&loaded.catalog, &loaded.state, &loaded.context());
    let file = HistoryFile::new(history_path);
    let mut history = file.load();
    tracing::info!(
        score = snapshot.overall_score,
        retained = history.len(),
        "saving snapshot"
    );
    history.append(snapshot);
    file.save(&history)?;
    println!(
        "Saved snapshot ({} retained) to {}",
        history.len(),
        history_path.display()
    );
    Ok(())
}

fn list(history_path: &Path) -> anyhow::Result<()> {
    let history = HistoryFile::new(history_path).load();
    if history.is_empty() {
        println!("No snapshots saved.");
        return Ok(());
    }
    for snapshot in history.list() {
        println!(
            "{}  {:>3}%  grade {}  {}",
            snapshot.timestamp, snapshot.overall_score, snapshot.grade,
            snapshot.readiness_level
        );
    }
    Ok(())
}
