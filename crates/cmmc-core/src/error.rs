//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the Readiness Stack. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Catalog shape errors fail loudly at load time with the offending
//!   identifier in the message; they never surface inside a scoring pass.
//! - Corrupt persisted state is not an error at this level: the history
//!   store degrades to empty and logs, per the graceful-degradation policy.
//! - Timestamp and status parse errors include the rejected input.

use thiserror::Error;

/// Top-level error type for the Readiness Stack.
#[derive(Error, Debug)]
pub enum CmmcError {
    /// Catalog failed structural validation.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Input value failed validation (bad status string, bad timestamp).
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Trend history persistence error.
    #[error("history error: {0}")]
    History(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
