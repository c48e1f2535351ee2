//! Error types for trend scoring
//!
//! This module defines the errors reported when evidence is rejected or a
//! report is requested before enough evidence exists, along with a
//! convenient `Result` alias.
//!
//! None of these are fatal: a rejected score leaves the series untouched, and
//! numerical trouble inside the fitters is recovered locally and never shows up here.

/// Errors that can occur while collecting evidence or producing a trend report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The score is an integer, but outside the accepted range.
    #[error("Score `{0}` is outside the accepted range 1..=4")]
    ScoreOutOfRange(i64),

    /// The input could not be read as an integer score.
    #[error("`{0}` is not an integer score")]
    NotAnInteger(String),

    /// A report was demanded while the series is still too short.
    ///
    /// Only surfaced by callers that insist on a report; the calculator itself
    /// treats this as a state and returns `None`.
    #[error("Not enough evidence to predict a trend; {needed} more score(s) needed")]
    InsufficientData {
        /// Number of additional scores required
        needed: usize,
    },

    /// The model name did not match any of the known models.
    #[error("Unknown model `{0}`; expected one of Average, Linear, Power Law")]
    UnknownModel(String),

    /// A stored report does not match the report recomputed from its observations.
    #[error("Stored trend report does not match its observations")]
    ReportMismatch,

    /// A numeric value could not be cast to the target type.
    #[error("Failed to cast value to target type")]
    CastFailed,

    /// Reading an evidence file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing or writing JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for trend scoring
pub type Result<T> = std::result::Result<T, Error>;
