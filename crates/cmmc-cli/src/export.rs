//! # `cmmc export` — Report Export
//!
//! Assembles the `{exportDate, scorecard, history}` document from a fresh
//! scorecard and the saved history, writing it to a file or stdout.

use std::path::PathBuf;

use cmmc_history::{ExportDocument, HistoryFile};
use cmmc_score::compute_scorecard;

use crate::inputs::InputArgs;

/// Arguments for the `export` subcommand.
#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// History JSON file.
    #[arg(long)]
    pub history: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Build and write the export document.
pub fn run(args: &ExportArgs) -> anyhow::Result<()> {
    let loaded = args.inputs.load()?;
    let scorecard = compute_scorecard(&loaded.catalog, &loaded.state, &loaded.context());
    let history = HistoryFile::new(&args.history).load();
    let document = ExportDocument::new(scorecard, &history);
    let json = document.to_json()?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)?;
            println!("Exported report to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
