//! # cmmc-cli — Command Handlers
//!
//! Handler modules for the `cmmc` binary. Each subcommand gets its own
//! module with a clap `Args` struct and a `run` function; `inputs.rs`
//! holds the shared input-file loading used by every scoring subcommand.

pub mod export;
pub mod inputs;
pub mod score;
pub mod snapshot;
pub mod sprs;
