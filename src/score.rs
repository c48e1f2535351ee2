//! Scoring and selecting models by prediction error.
//!
//! Every model is scored the same way: the absolute difference (Δ) between each observation
//! and the model's prediction at that index, summed, then divided by the number of observations.
//! The model with the smallest average Δ is selected.
//!
//! # Tie-break
//! [`select`] scans results left to right and only replaces its current best on a strictly
//! smaller average Δ. Given results in [`Model::ALL`] order, the earlier model wins any exact tie.
//! This matters in practice: on a flat series all three models fit with zero error.
use crate::{model::Model, statistics, value::Value};

/// Predictions and errors of one model against one series.
///
/// `predicted` and `deltas` always have the same length as the observations they were scored against.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelResult<T: Value = f64> {
    /// The model that produced the predictions
    pub model: Model,

    /// Predicted value at each index
    pub predicted: Vec<T>,

    /// Absolute error at each index
    pub deltas: Vec<T>,

    /// Sum of `deltas`
    pub total_delta: T,

    /// `total_delta` divided by the number of observations
    pub average_delta: T,

    /// True if this model was chosen as the trend
    pub selected: bool,
}
impl<T: Value> ModelResult<T> {
    /// Scores a set of predictions against the observations.
    ///
    /// `selected` starts out false; it is set once all models have been compared.
    ///
    /// # Example
    /// ```
    /// # use trendfit::{score::ModelResult, Model};
    /// let result = ModelResult::new(Model::Average, &[1.0f64, 2.0, 3.0], vec![2.0, 2.0, 2.0]);
    /// assert_eq!(result.deltas, vec![1.0, 0.0, 1.0]);
    /// assert_eq!(result.total_delta, 2.0);
    /// assert!((result.average_delta - 2.0 / 3.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn new(model: Model, observed: &[T], predicted: Vec<T>) -> Self {
        let deltas = statistics::absolute_deltas(observed, &predicted);
        let total_delta = deltas.iter().fold(T::zero(), |acc, &d| acc + d);
        let average_delta =
            statistics::mean_absolute_error(observed.iter().copied(), predicted.iter().copied());

        Self {
            model,
            predicted,
            deltas,
            total_delta,
            average_delta,
            selected: false,
        }
    }

    /// Fits `model` to `observed` and scores the result.
    #[must_use]
    pub fn fit(model: Model, observed: &[T]) -> Self {
        let predicted = model.fit(observed);
        Self::new(model, observed, predicted)
    }

    /// Prediction at the most recent index
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.predicted.last().copied()
    }
}

/// Picks the model with the strictly smallest average Δ.
///
/// Ties keep the earlier result. Returns `None` for an empty slice.
///
/// # Example
/// ```
/// # use trendfit::{score::{self, ModelResult}, Model};
/// let observed = [2.0, 2.0, 2.0];
/// let results: Vec<_> = Model::ALL.iter().map(|&m| ModelResult::fit(m, &observed)).collect();
///
/// // Every model fits a flat series; the first in evaluation order wins
/// assert_eq!(score::select(&results), Some(Model::Average));
/// ```
#[must_use]
pub fn select<T: Value>(results: &[ModelResult<T>]) -> Option<Model> {
    let mut best: Option<&ModelResult<T>> = None;
    for result in results {
        if best.map_or(true, |current| result.average_delta < current.average_delta) {
            best = Some(result);
        }
    }
    best.map(|r| r.model)
}
