//! The three trend models and their fitters
//!
//! A [`Model`] maps a full series of observations to one predicted value per index.
//! Each fitter is a pure function with no state carried between calls.
//!
//! # Provided Models
//! - [`Model::Average`]: a flat line at the mean of the series.
//! - [`Model::Linear`]: least squares line over the 1-based positions `x = 1..n`.
//! - [`Model::PowerLaw`]: `y = a·x^b`, fitted as a line in log-log space.
//!
//! # Evaluation order
//! [`Model::ALL`] lists the models in the fixed order they are scored and compared in.
//! That order is also the tie-break: on equal average error the earlier model wins.
//!
//! # Degenerate input
//! Neither regression can fail. A zero denominator collapses the slope (or exponent) to 0,
//! and any non-finite predicted value is replaced by the average model's value at that index.
use std::str::FromStr;

use crate::{
    error::{Error, Result},
    value::Value,
};

pub(crate) mod average;
pub(crate) mod linear;
pub(crate) mod power_law;

/// One of the three trend models.
///
/// # Example
/// ```
/// # use trendfit::Model;
/// let observed: [f64; 3] = [1.0, 2.0, 3.0];
/// let predicted = Model::Linear.fit(&observed);
/// assert!((predicted[2] - 3.0).abs() < 1e-9);
///
/// let model: Model = "power law".parse().unwrap();
/// assert_eq!(model, Model::PowerLaw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Model {
    /// Constant prediction at the arithmetic mean
    Average,

    /// Ordinary least squares line
    Linear,

    /// Power curve fitted on log-transformed coordinates
    #[serde(rename = "Power Law")]
    PowerLaw,
}
impl Model {
    /// Every model, in evaluation order.
    pub const ALL: [Model; 3] = [Model::Average, Model::Linear, Model::PowerLaw];

    /// Human-readable model name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Average => "Average",
            Self::Linear => "Linear",
            Self::PowerLaw => "Power Law",
        }
    }

    /// Position of the model in [`Model::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Average => 0,
            Self::Linear => 1,
            Self::PowerLaw => 2,
        }
    }

    /// Fits this model to `observed` and returns one prediction per index.
    ///
    /// The output always has the same length as the input. An empty input yields an empty output.
    #[must_use]
    pub fn fit<T: Value>(self, observed: &[T]) -> Vec<T> {
        match self {
            Self::Average => average::fit(observed),
            Self::Linear => linear::fit(observed),
            Self::PowerLaw => power_law::fit(observed),
        }
    }
}

impl FromStr for Model {
    type Err = Error;

    /// Case-insensitive; spaces, dashes and underscores are ignored (`power-law`, `PowerLaw`, `Power Law`).
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "average" | "mean" => Ok(Self::Average),
            "linear" => Ok(Self::Linear),
            "powerlaw" | "power" => Ok(Self::PowerLaw),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 1-based positions `1, 2, …, n` used as the x-axis by every regression.
pub(crate) fn positions<T: Value>(n: usize) -> impl Iterator<Item = T> {
    (1..=n).map(T::from_positive_int)
}

/// Keeps `value` unless it is `NaN` or infinite, in which case `fallback` is used.
pub(crate) fn finite_or<T: Value>(value: T, fallback: T) -> T {
    if value.is_valid() {
        value
    } else {
        fallback
    }
}
