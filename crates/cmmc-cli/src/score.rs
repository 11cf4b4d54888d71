//! # `cmmc score` — Readiness Scorecard
//!
//! Computes the percentage-weighted scorecard and prints either a summary
//! or the full snapshot JSON.

use cmmc_score::{compute_scorecard, ReadinessSnapshot};

use crate::inputs::InputArgs;

/// Arguments for the `score` subcommand.
#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Emit the full snapshot as JSON instead of the summary.
    #[arg(long)]
    pub json: bool,
}

/// Compute and print the scorecard.
pub fn run(args: &ScoreArgs) -> anyhow::Result<()> {
    let loaded = args.inputs.load()?;
    let snapshot = compute_scorecard(&loaded.catalog, &loaded.state, &loaded.context());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_summary(&snapshot);
    }
    Ok(())
}

fn print_summary(snapshot: &ReadinessSnapshot) {
    println!(
        "Overall: {}% (grade {}, {})",
        snapshot.overall_score, snapshot.grade, snapshot.readiness_level
    );
    println!(
        "Objectives: {} met, {} partial, {} not met, {} not assessed of {}",
        snapshot.met_objectives,
        snapshot.partial_objectives,
        snapshot.not_met_objectives,
        snapshot.not_assessed,
        snapshot.total_objectives
    );
    println!(
        "Progress {}% | evidence {}% | documentation {}% | open POA&Ms {}",
        snapshot.assessment_progress,
        snapshot.evidence_coverage,
        snapshot.implementation_documentation,
        snapshot.poam_count
    );
    println!();
    for family in &snapshot.family_scores {
        println!(
            "  {:<4} {:<40} {:>3}%  ({}/{} met)",
            family.family_id.as_str(),
            family.name,
            family.score,
            family.met,
            family.total
        );
    }
    if !snapshot.gaps.is_empty() {
        println!();
        println!("Gaps:");
        for gap in &snapshot.gaps {
            println!("  [{:?}] {}", gap.severity, gap.description);
        }
    }
}
