//! Evidence scores and the ordered series they form.
//!
//! - A [`Score`] is an integer in `1..=4`, validated on construction.
//! - An [`EvidenceSeries`] is the time-ordered list of scores (index 0 is the earliest).
//!   It only grows at the end or shrinks from the end.
//! - [`SeriesState`] describes whether the series is long enough to predict a trend.
//!
//! The series serializes as a plain list of integers. Deserializing replays each value
//! through validation, so a stored series can never smuggle in an invalid score.
use std::str::FromStr;

use crate::{
    error::{Error, Result},
    value::Value,
};

/// Minimum number of scores needed before any model is fitted.
pub const MIN_EVIDENCE: usize = 3;

/// A single observed score in the closed range `1..=4`.
///
/// # Example
/// ```
/// # use trendfit::evidence::Score;
/// let score = Score::new(3).unwrap();
/// assert_eq!(score.get(), 3);
///
/// assert!(Score::new(0).is_err());
/// assert!("4".parse::<Score>().is_ok());
/// assert!("2.5".parse::<Score>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);
impl Score {
    /// Lowest accepted score
    pub const MIN: u8 = 1;

    /// Highest accepted score
    pub const MAX: u8 = 4;

    /// Validates and wraps a score.
    ///
    /// # Errors
    /// Returns [`Error::ScoreOutOfRange`] if `value` is not in `1..=4`.
    pub fn new(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(Error::ScoreOutOfRange(value)),
        }
    }

    /// Returns the raw score.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the score in the numeric type used for fitting.
    #[must_use]
    pub fn value<T: Value>(self) -> T {
        T::from_positive_int(usize::from(self.0))
    }
}

impl TryFrom<i64> for Score {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl FromStr for Score {
    type Err = Error;

    /// Parses user-entered text. Surrounding whitespace is ignored; anything that is not
    /// a whole number (including `2.5` or `abc`) is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| Error::NotAnInteger(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a series holds enough evidence to produce a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SeriesState {
    /// No scores recorded
    Empty,

    /// Some scores recorded, but fewer than [`MIN_EVIDENCE`]
    Insufficient {
        /// Number of additional scores required before a prediction is possible
        needed: usize,
    },

    /// At least [`MIN_EVIDENCE`] scores; models and a report are available
    Ready,
}
impl SeriesState {
    /// Derives the state for a series of length `n`.
    #[must_use]
    pub fn for_len(n: usize) -> Self {
        match n {
            0 => Self::Empty,
            n if n < MIN_EVIDENCE => Self::Insufficient {
                needed: MIN_EVIDENCE - n,
            },
            _ => Self::Ready,
        }
    }

    /// True only in the [`SeriesState::Ready`] state.
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Time-ordered list of scores.
///
/// Mutation is limited to [`EvidenceSeries::push`] and [`EvidenceSeries::pop`]; there is no
/// arbitrary insertion or removal. Repeated values are expected and kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u8>")]
pub struct EvidenceSeries {
    scores: Vec<Score>,
}
impl EvidenceSeries {
    /// Creates an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series by appending each value in order.
    ///
    /// # Errors
    /// Returns the error for the first value that is not a valid score.
    ///
    /// # Example
    /// ```
    /// # use trendfit::evidence::EvidenceSeries;
    /// let series = EvidenceSeries::from_values([1, 2, 4]).unwrap();
    /// assert_eq!(series.len(), 3);
    /// assert!(EvidenceSeries::from_values([1, 7]).is_err());
    /// ```
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Result<Self> {
        let scores = values
            .into_iter()
            .map(Score::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { scores })
    }

    /// Appends a validated score.
    pub fn push(&mut self, score: Score) {
        self.scores.push(score);
    }

    /// Removes and returns the most recent score, if any.
    pub fn pop(&mut self) -> Option<Score> {
        self.scores.pop()
    }

    /// Number of recorded scores
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if no scores are recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// The most recent score
    #[must_use]
    pub fn last(&self) -> Option<Score> {
        self.scores.last().copied()
    }

    /// The recorded scores, earliest first
    #[must_use]
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Current readiness of the series.
    #[must_use]
    pub fn state(&self) -> SeriesState {
        SeriesState::for_len(self.len())
    }

    /// The scores converted to the numeric type used for fitting.
    #[must_use]
    pub fn observations<T: Value>(&self) -> Vec<T> {
        self.scores.iter().map(|s| s.value()).collect()
    }
}

impl TryFrom<Vec<i64>> for EvidenceSeries {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<Self> {
        Self::from_values(values)
    }
}

impl From<EvidenceSeries> for Vec<u8> {
    fn from(series: EvidenceSeries) -> Self {
        series.scores.into_iter().map(Score::get).collect()
    }
}

impl std::fmt::Display for EvidenceSeries {
    /// Lists the entered scores as `#1: 2, #2: 3, ...`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, score) in self.scores.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "#{}: {score}", i + 1)?;
        }
        Ok(())
    }
}
