//! # Shared Input Loading
//!
//! Every scoring subcommand takes the same input files: the catalog, the
//! assessment state, and the optional evidence/notes/POA&M collaborators.
//! This module owns the flag definitions and the loading, so the
//! collaborator wiring is identical across subcommands.

use std::path::PathBuf;

use anyhow::Context;
use cmmc_catalog::Catalog;
use cmmc_score::{
    AssessmentMap, EvidenceIndex, EvidenceMap, NotesIndex, NotesMap, PoamLog, PoamTracker,
    ScoringContext,
};

/// Input-file flags shared by the scoring subcommands.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Catalog JSON file (the Family → Control → Objective tree).
    #[arg(long)]
    pub catalog: PathBuf,

    /// Assessment state JSON file (objective id → status).
    #[arg(long)]
    pub assessment: PathBuf,

    /// Evidence linkage JSON file (objective id → evidence ids).
    #[arg(long)]
    pub evidence: Option<PathBuf>,

    /// Implementation notes JSON file (objective id → note text).
    #[arg(long)]
    pub notes: Option<PathBuf>,

    /// POA&M log JSON file (array of entries).
    #[arg(long)]
    pub poam: Option<PathBuf>,
}

/// The loaded inputs. Collaborators stay owned here so a borrowing
/// [`ScoringContext`] can be handed to the engines.
#[derive(Debug)]
pub struct LoadedInputs {
    /// The validated catalog.
    pub catalog: Catalog,
    /// The assessment state.
    pub state: AssessmentMap,
    /// Evidence linkage, when a file was given.
    pub evidence: Option<EvidenceMap>,
    /// Implementation notes, when a file was given.
    pub notes: Option<NotesMap>,
    /// POA&M log, when a file was given.
    pub poam: Option<PoamLog>,
}

impl InputArgs {
    /// Load and validate all input files.
    pub fn load(&self) -> anyhow::Result<LoadedInputs> {
        let catalog = Catalog::from_file(&self.catalog)
            .with_context(|| format!("loading catalog {}", self.catalog.display()))?;
        let state = AssessmentMap::from_file(&self.assessment)
            .with_context(|| format!("loading assessment {}", self.assessment.display()))?;
        let evidence = self
            .evidence
            .as_deref()
            .map(EvidenceMap::from_file)
            .transpose()
            .context("loading evidence linkage")?;
        let notes = self
            .notes
            .as_deref()
            .map(NotesMap::from_file)
            .transpose()
            .context("loading implementation notes")?;
        let poam = self
            .poam
            .as_deref()
            .map(PoamLog::from_file)
            .transpose()
            .context("loading POA&M log")?;
        tracing::debug!(
            objectives = catalog.total_objectives(),
            assessed = state.len(),
            "inputs loaded"
        );
        Ok(LoadedInputs {
            catalog,
            state,
            evidence,
            notes,
            poam,
        })
    }
}

impl LoadedInputs {
    /// Borrowing scoring context over the loaded collaborators.
    pub fn context(&self) -> ScoringContext<'_> {
        ScoringContext {
            evidence: self.evidence.as_ref().map(|e| e as &dyn EvidenceIndex),
            notes: self.notes.as_ref().map(|n| n as &dyn NotesIndex),
            poam: self.poam.as_ref().map(|p| p as &dyn PoamTracker),
        }
    }

    /// The POA&M tracker alone, for the executive view.
    pub fn poam_tracker(&self) -> Option<&dyn PoamTracker> {
        self.poam.as_ref().map(|p| p as &dyn PoamTracker)
    }
}
