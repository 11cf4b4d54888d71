//! # cmmc-catalog — Objective Catalog
//!
//! Models the static control catalog consumed by both scoring engines:
//! a tree of Families, each holding ordered Controls, each holding ordered
//! assessment Objectives.
//!
//! The catalog is read-only reference data. It is loaded once from JSON,
//! validated structurally (`load.rs`), and thereafter only iterated. All
//! mutation in the system happens in the assessment and history stores,
//! never here.

pub mod load;
pub mod model;

pub use model::{Catalog, Control, Family, FlatObjective, Objective};
