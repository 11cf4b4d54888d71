//! # cmmc CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// CMMC Readiness Stack CLI.
///
/// Computes readiness scorecards and SPRS estimates from a control catalog
/// and assessment state, manages the snapshot trend history, and exports
/// the readiness report.
#[derive(Parser, Debug)]
#[command(name = "cmmc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compute the percentage-weighted readiness scorecard.
    Score(cmmc_cli::score::ScoreArgs),
    /// Compute the SPRS point-deduction executive view.
    Sprs(cmmc_cli::sprs::SprsArgs),
    /// Save or list trend-history snapshots.
    Snapshot(cmmc_cli::snapshot::SnapshotArgs),
    /// Export the readiness report document.
    Export(cmmc_cli::export::ExportArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score(args) => cmmc_cli::score::run(&args),
        Commands::Sprs(args) => cmmc_cli::sprs::run(&args),
        Commands::Snapshot(args) => cmmc_cli::snapshot::run(&args),
        Commands::Export(args) => cmmc_cli::export::run(&args),
    }
}
