//! Utilities for displaying trend reports
//!
//! This module renders reports and series states as human-readable text. It is a thin
//! presentation layer: no value is changed here, only formatted.
//!
//! # Layout
//! A [`TrendReport`] renders as a headline followed by one row per model:
//! ```text
//! Trend score: 3.5 (Power Law model, raw 3.71)
//!
//! Model        Current   Total Δ Average Δ
//! Average         2.33      3.33     1.111
//! Linear          3.83      0.67     0.222
//! Power Law       3.71      0.58     0.194   ✓ Best
//! ```
//!
//! # Precision
//! - [`CURRENT_PRECISION`] for each model's prediction at the last index.
//! - [`TOTAL_DELTA_PRECISION`] for total Δ.
//! - [`AVERAGE_DELTA_PRECISION`] for average Δ, one digit more since it drives the selection.
use std::fmt::{self, Write};

use crate::{evidence::SeriesState, report::TrendReport, score::ModelResult, value::Value};

/// Digits after the decimal point for a model's current prediction
pub const CURRENT_PRECISION: usize = 2;

/// Digits after the decimal point for a model's total Δ
pub const TOTAL_DELTA_PRECISION: usize = 2;

/// Digits after the decimal point for a model's average Δ
pub const AVERAGE_DELTA_PRECISION: usize = 3;

const NAME_WIDTH: usize = 10;
const COLUMN_WIDTH: usize = 10;
const BEST_MARKER: &str = "✓ Best";

/// Writes the column header of the model table.
///
/// # Errors
/// Returns an error if writing to `buffer` fails.
pub fn write_header<W: Write>(buffer: &mut W) -> fmt::Result {
    writeln!(
        buffer,
        "{:<NAME_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}",
        "Model", "Current", "Total Δ", "Average Δ"
    )
}

/// Writes one row of the model table.
///
/// # Errors
/// Returns an error if writing to `buffer` fails.
///
/// # Example
/// ```
/// # use trendfit::{display::write_row, score::ModelResult, Model};
/// let result = ModelResult::new(Model::Average, &[1.0, 2.0, 3.0], vec![2.0; 3]);
/// let mut row = String::new();
/// write_row(&mut row, &result).unwrap();
/// assert_eq!(row, "Average         2.00      2.00     0.667\n");
/// ```
pub fn write_row<W: Write, T: Value>(buffer: &mut W, result: &ModelResult<T>) -> fmt::Result {
    write!(buffer, "{:<NAME_WIDTH$}", result.model.name())?;
    match result.current() {
        Some(current) => write!(buffer, "{current:>COLUMN_WIDTH$.CURRENT_PRECISION$}")?,
        None => write!(buffer, "{:>COLUMN_WIDTH$}", "—")?,
    }
    write!(
        buffer,
        "{:>COLUMN_WIDTH$.TOTAL_DELTA_PRECISION$}{:>COLUMN_WIDTH$.AVERAGE_DELTA_PRECISION$}",
        result.total_delta, result.average_delta
    )?;
    if result.selected {
        write!(buffer, "   {BEST_MARKER}")?;
    }
    writeln!(buffer)
}

impl<T: Value> fmt::Display for TrendReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Trend score: {:.1} ({} model, raw {:.CURRENT_PRECISION$})",
            self.display_score(),
            self.best_model(),
            self.trend_score()
        )?;
        writeln!(f)?;

        write_header(f)?;
        for result in self.results() {
            write_row(f, result)?;
        }
        Ok(())
    }
}

impl fmt::Display for SeriesState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Insufficient { needed } => write!(f, "need {needed} more to predict"),
            Self::Ready => write!(f, "ready"),
        }
    }
}
