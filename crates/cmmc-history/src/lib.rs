//! # cmmc-history — Trend History and Export
//!
//! The one place in the stack where mutation happens, and only by explicit
//! user action: saving a readiness snapshot appends it to a bounded,
//! time-ascending history log.
//!
//! - `store.rs` — the in-memory bounded log: FIFO eviction at the
//!   [`HISTORY_CAP`] policy cap, newest entry never dropped.
//! - `file.rs` — JSON-file persistence; a corrupt or missing file degrades
//!   to an empty history with a warning rather than failing.
//! - `export.rs` — the exportable `{exportDate, scorecard, history}`
//!   document.

pub mod export;
pub mod file;
pub mod store;

pub use export::ExportDocument;
pub use file::HistoryFile;
pub use store::{TrendHistory, HISTORY_CAP};
