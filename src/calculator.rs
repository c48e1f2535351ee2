//! Stateful owner of an evidence series.
//!
//! [`TrendCalculator`] is the surface an input form or chart talks to. It holds the series,
//! validates every mutation, and rebuilds the report in full after each accepted change.
use crate::{
    error::Result,
    evidence::{EvidenceSeries, Score, SeriesState},
    report::{self, TrendReport},
    value::Value,
};

/// Collects scores one at a time and keeps the trend report in step with them.
///
/// Mutations take `&mut self`, so there is exactly one writer at a time and every read
/// observes a completed mutation.
///
/// # Example
/// ```
/// # use trendfit::{Model, SeriesState, TrendCalculator};
/// let mut calc = TrendCalculator::<f64>::new();
/// calc.append(1).unwrap();
/// calc.append(2).unwrap();
/// assert_eq!(calc.state(), SeriesState::Insufficient { needed: 1 });
/// assert!(calc.report().is_none());
///
/// calc.append(3).unwrap();
/// let report = calc.report().unwrap();
/// assert_eq!(report.best_model(), Model::Linear);
///
/// // Out of range: rejected, nothing changes
/// assert!(calc.append(5).is_err());
/// assert_eq!(calc.series().len(), 3);
///
/// calc.remove_last();
/// assert!(calc.report().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrendCalculator<T: Value = f64> {
    series: EvidenceSeries,
    report: Option<TrendReport<T>>,
}
impl<T: Value> Default for TrendCalculator<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Value> TrendCalculator<T> {
    /// Creates a calculator with an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self {
            series: EvidenceSeries::new(),
            report: None,
        }
    }

    /// Creates a calculator from an existing series, computing its report immediately.
    #[must_use]
    pub fn from_series(series: EvidenceSeries) -> Self {
        let report = report::compute(&series);
        Self { series, report }
    }

    /// Appends an integer score.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::ScoreOutOfRange`] if `score` is not in `1..=4`.
    /// The series is left unchanged.
    pub fn append(&mut self, score: i64) -> Result<()> {
        match Score::new(score) {
            Ok(score) => {
                self.push(score);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(score, "rejected score");
                Err(e)
            }
        }
    }

    /// Appends a score from raw text input, such as a form field.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::NotAnInteger`] for non-numeric or fractional text, and
    /// [`crate::error::Error::ScoreOutOfRange`] for integers outside `1..=4`.
    /// The series is left unchanged.
    pub fn append_str(&mut self, input: &str) -> Result<()> {
        match input.parse::<Score>() {
            Ok(score) => {
                self.push(score);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(input, "rejected score");
                Err(e)
            }
        }
    }

    /// Appends an already validated score.
    pub fn push(&mut self, score: Score) {
        self.series.push(score);
        tracing::trace!(score = score.get(), len = self.series.len(), "score appended");
        self.recompute();
    }

    /// Removes and returns the most recent score. Does nothing on an empty series.
    pub fn remove_last(&mut self) -> Option<Score> {
        let removed = self.series.pop()?;
        tracing::trace!(score = removed.get(), len = self.series.len(), "score removed");
        self.recompute();
        Some(removed)
    }

    /// Whether the series is empty, too short, or ready to report.
    #[must_use]
    pub fn state(&self) -> SeriesState {
        self.series.state()
    }

    /// The current report; `None` unless [`TrendCalculator::state`] is [`SeriesState::Ready`].
    #[must_use]
    pub fn report(&self) -> Option<&TrendReport<T>> {
        self.report.as_ref()
    }

    /// The current evidence series
    #[must_use]
    pub fn series(&self) -> &EvidenceSeries {
        &self.series
    }

    /// Consumes the calculator, returning the series (for example to persist it).
    #[must_use]
    pub fn into_series(self) -> EvidenceSeries {
        self.series
    }

    fn recompute(&mut self) {
        self.report = report::compute(&self.series);
        match &self.report {
            Some(report) => tracing::debug!(
                best_model = report.best_model().name(),
                trend_score = %report.trend_score(),
                "trend recomputed"
            ),
            None => tracing::debug!(state = %self.series.state(), "no trend yet"),
        }
    }
}
