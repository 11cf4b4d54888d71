//! # `cmmc sprs` — Executive / SPRS View
//!
//! Computes the point-deduction executive view, optionally folding in an
//! edit-history log for the trend series.

use std::path::PathBuf;

use anyhow::Context;
use cmmc_score::{collaborators::load_transitions, compute_executive_view, ExecutiveAnalysis};

use crate::inputs::InputArgs;

/// Arguments for the `sprs` subcommand.
#[derive(clap::Args, Debug)]
pub struct SprsArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Edit-history log JSON file (array of status transitions).
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Emit the full analysis as JSON instead of the summary.
    #[arg(long)]
    pub json: bool,
}

/// Compute and print the executive view.
pub fn run(args: &SprsArgs) -> anyhow::Result<()> {
    let loaded = args.inputs.load()?;
    let edit_log = match &args.log {
        Some(path) => load_transitions(path)
            .with_context(|| format!("loading edit log {}", path.display()))?,
        None => Vec::new(),
    };
    let analysis = compute_executive_view(
        &loaded.catalog,
        &loaded.state,
        loaded.poam_tracker(),
        &edit_log,
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_summary(&analysis);
    }
    Ok(())
}

fn print_summary(analysis: &ExecutiveAnalysis) {
    println!(
        "SPRS score: {} (compliance {}%)",
        analysis.sprs_score, analysis.compliance_rate
    );
    println!(
        "Objectives: {} met, {} partial, {} not met, {} not assessed of {}",
        analysis.met_objectives,
        analysis.partial_objectives,
        analysis.not_met_objectives,
        analysis.not_assessed,
        analysis.total_objectives
    );
    if !analysis.risk_areas.is_empty() {
        println!();
        println!("Risk areas:");
        for area in &analysis.risk_areas {
            println!(
                "  {:<4} {:<40} critical {}, high {}, moderate {} (-{} SPRS)",
                area.family_id.as_str(),
                area.name,
                area.critical,
                area.high,
                area.moderate,
                area.sprs_impact
            );
        }
    }
    println!();
    println!("Recommendations:");
    for rec in &analysis.recommendations {
        println!("  [{:?}] {}", rec.priority, rec.action);
    }
}
