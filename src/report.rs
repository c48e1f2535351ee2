//! The full pipeline: fit every model, score them, select one, report the trend.
//!
//! [`compute`] is a pure function of the evidence series. Nothing is cached between calls;
//! callers that own a changing series (see [`crate::TrendCalculator`]) simply call it again
//! after every mutation.
//!
//! ```rust
//! # use trendfit::{evidence, report, Model};
//! let report = report::compute::<f64>(&evidence![1, 2, 3]).unwrap();
//! assert_eq!(report.best_model(), Model::Linear);
//! assert!((report.trend_score() - 3.0).abs() < 1e-9);
//!
//! // Fewer than three scores: no report
//! assert!(report::compute::<f64>(&evidence![1, 2]).is_none());
//! ```
use crate::{
    error::Error,
    evidence::{EvidenceSeries, MIN_EVIDENCE},
    model::Model,
    score::{self, ModelResult},
    value::Value,
};

/// Computes the trend report for a series.
///
/// Returns `None` unless the series holds at least [`MIN_EVIDENCE`] scores.
#[must_use]
pub fn compute<T: Value>(series: &EvidenceSeries) -> Option<TrendReport<T>> {
    TrendReport::from_observations(series.observations())
}

/// Results of every model against one series, plus the selected trend.
///
/// Deserializing recomputes the report from `observed` and rejects stored results that disagree.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(
    try_from = "StoredReport<T>",
    bound(deserialize = "T: serde::Deserialize<'de>")
)]
pub struct TrendReport<T: Value = f64> {
    observed: Vec<T>,
    results: Vec<ModelResult<T>>,
    best_model: Model,
    trend_score: T,
}
impl<T: Value> TrendReport<T> {
    /// Fits, scores and selects over raw observations.
    ///
    /// Returns `None` if there are fewer than [`MIN_EVIDENCE`] observations.
    #[must_use]
    pub fn from_observations(observed: Vec<T>) -> Option<Self> {
        if observed.len() < MIN_EVIDENCE {
            return None;
        }

        let mut results: Vec<ModelResult<T>> = Model::ALL
            .iter()
            .map(|&model| ModelResult::fit(model, &observed))
            .collect();

        let best_model = score::select(&results)?;
        let best = results.iter_mut().find(|r| r.model == best_model)?;
        best.selected = true;
        let trend_score = best.current()?;

        Some(Self {
            observed,
            results,
            best_model,
            trend_score,
        })
    }

    /// The model with the lowest average Δ
    #[must_use]
    pub fn best_model(&self) -> Model {
        self.best_model
    }

    /// The selected model's prediction at the most recent index, unrounded.
    #[must_use]
    pub fn trend_score(&self) -> T {
        self.trend_score
    }

    /// [`TrendReport::trend_score`] rounded to the nearest 0.5, for display.
    ///
    /// ```
    /// # use trendfit::{evidence, report};
    /// let report = report::compute::<f64>(&evidence![1, 2, 4]).unwrap();
    /// assert!((report.trend_score() - 3.712).abs() < 1e-3);
    /// assert_eq!(report.display_score(), 3.5);
    /// ```
    #[must_use]
    pub fn display_score(&self) -> T {
        self.trend_score.round_to_half()
    }

    /// Every model's result, in evaluation order.
    #[must_use]
    pub fn results(&self) -> &[ModelResult<T>] {
        &self.results
    }

    /// The result of one model.
    #[must_use]
    pub fn result(&self, model: Model) -> &ModelResult<T> {
        &self.results[model.index()]
    }

    /// The result of the selected model.
    #[must_use]
    pub fn best(&self) -> &ModelResult<T> {
        self.result(self.best_model)
    }

    /// True if `model` is the selected model.
    #[must_use]
    pub fn is_selected(&self, model: Model) -> bool {
        self.best_model == model
    }

    /// The observations the report was computed from.
    #[must_use]
    pub fn observed(&self) -> &[T] {
        &self.observed
    }

    /// One row per observation, with every model's prediction at that index.
    ///
    /// This is the data a chart of observed scores against the three trend lines needs.
    #[must_use]
    pub fn chart_points(&self) -> Vec<ChartPoint<T>> {
        let at = |model: Model, i: usize| self.result(model).predicted[i];
        self.observed
            .iter()
            .enumerate()
            .map(|(i, &observed)| ChartPoint {
                assessment: i + 1,
                observed,
                average: at(Model::Average, i),
                linear: at(Model::Linear, i),
                power_law: at(Model::PowerLaw, i),
            })
            .collect()
    }
}

#[derive(serde::Deserialize)]
struct StoredReport<T: Value> {
    observed: Vec<T>,
    results: Vec<ModelResult<T>>,
    best_model: Model,
    trend_score: T,
}

impl<T: Value> TryFrom<StoredReport<T>> for TrendReport<T> {
    type Error = Error;

    #[allow(clippy::float_cmp)]
    fn try_from(stored: StoredReport<T>) -> Result<Self, Self::Error> {
        let needed = MIN_EVIDENCE.saturating_sub(stored.observed.len());
        let report =
            Self::from_observations(stored.observed).ok_or(Error::InsufficientData { needed })?;

        if report.results != stored.results
            || report.best_model != stored.best_model
            || report.trend_score != stored.trend_score
        {
            return Err(Error::ReportMismatch);
        }
        Ok(report)
    }
}

/// A single x-position of the trend chart.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartPoint<T: Value = f64> {
    /// 1-based position of the observation
    pub assessment: usize,

    /// Observed score
    pub observed: T,

    /// Average model prediction
    pub average: T,

    /// Linear model prediction
    pub linear: T,

    /// Power law model prediction
    pub power_law: T,
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::{assert_all_close, assert_close, assert_selected, evidence};

    #[test]
    fn test_too_short() {
        assert!(compute::<f64>(&evidence![]).is_none());
        assert!(compute::<f64>(&evidence![4]).is_none());
        assert!(compute::<f64>(&evidence![4, 1]).is_none());
        assert!(compute::<f64>(&evidence![4, 1, 2]).is_some());
    }

    #[test]
    fn test_scenario_flat() {
        let report = compute::<f64>(&evidence![2, 2, 2]).unwrap();
        let average = report.result(Model::Average);
        assert_all_close!(average.predicted, [2.0, 2.0, 2.0]);
        assert_eq!(average.total_delta, 0.0);

        let linear = report.result(Model::Linear);
        assert_all_close!(linear.predicted, [2.0, 2.0, 2.0]);
        assert_close!(linear.average_delta, 0.0);

        assert_selected!(report, Model::Average);
        assert!(average.selected);
        assert!(!linear.selected);
        assert_close!(report.trend_score(), 2.0);
    }

    #[test]
    fn test_scenario_linear() {
        let report = compute::<f64>(&evidence![1, 2, 3]).unwrap();

        let average = report.result(Model::Average);
        assert_all_close!(average.predicted, [2.0, 2.0, 2.0]);
        assert_all_close!(average.deltas, [1.0, 0.0, 1.0]);
        assert_close!(average.average_delta, 2.0 / 3.0);

        let linear = report.result(Model::Linear);
        assert_all_close!(linear.predicted, [1.0, 2.0, 3.0]);
        assert_all_close!(linear.deltas, [0.0, 0.0, 0.0]);

        assert_selected!(report, Model::Linear);
        assert_close!(report.trend_score(), 3.0);
        assert_eq!(report.display_score(), 3.0);
    }

    #[test]
    fn test_scenario_superlinear() {
        let report = compute::<f64>(&evidence![1, 2, 4]).unwrap();
        let power = report.result(Model::PowerLaw);
        let linear = report.result(Model::Linear);
        let average = report.result(Model::Average);

        assert!(power.average_delta < linear.average_delta);
        assert!(power.average_delta < average.average_delta);
        assert_selected!(report, Model::PowerLaw);

        let trend = report.trend_score();
        assert!(trend.is_finite());
        assert!(trend > 7.0 / 3.0);
        assert_eq!(report.best().model, Model::PowerLaw);
    }

    #[test]
    fn test_decreasing_series() {
        let report = compute::<f64>(&evidence![4, 3, 2, 1]).unwrap();
        assert_selected!(report, Model::Linear);
        assert_close!(report.trend_score(), 1.0);
    }

    #[test]
    fn test_exactly_one_selected() {
        let report = compute::<f64>(&evidence![3, 1, 3, 1]).unwrap();
        let selected: Vec<_> = report.results().iter().filter(|r| r.selected).collect();
        assert_eq!(selected.len(), 1);
        assert!(report.is_selected(selected[0].model));
        assert_eq!(selected[0].model, report.best_model());
    }

    #[test]
    fn test_chart_points() {
        let report = compute::<f64>(&evidence![1, 2, 3]).unwrap();
        let points = report.chart_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].assessment, 1);
        assert_eq!(points[2].assessment, 3);
        assert_eq!(points[1].observed, 2.0);
        assert_close!(points[2].average, 2.0);
        assert_close!(points[2].linear, 3.0);
    }

    #[test]
    fn test_f32_report() {
        let report = compute::<f32>(&evidence![1, 2, 3]).unwrap();
        assert_eq!(report.result(Model::Average).predicted, vec![2.0_f32; 3]);
        assert_close!(report.trend_score(), 3.0_f32);
    }

    #[test]
    fn test_invariants_on_random_series() {
        let mut rng = StdRng::seed_from_u64(0x7e4d);
        for _ in 0..500 {
            let n = rng.gen_range(3..=40);
            let values: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=4)).collect();
            let series = EvidenceSeries::from_values(values.iter().copied()).unwrap();
            let report = compute::<f64>(&series).unwrap();

            assert_eq!(report.results().len(), Model::ALL.len());
            for (result, model) in report.results().iter().zip(Model::ALL) {
                assert_eq!(result.model, model);
                assert_eq!(result.predicted.len(), n, "{values:?}");
                assert_eq!(result.deltas.len(), n, "{values:?}");
                assert!(result.predicted.iter().all(|p| p.is_finite()));

                let sum: f64 = result.deltas.iter().sum();
                assert_close!(result.total_delta, sum, "{:?} {}", values, model);
                assert_close!(result.average_delta, result.total_delta / n as f64);
            }

            let average = report.result(Model::Average);
            let mean = values.iter().sum::<i64>() as f64 / n as f64;
            for p in &average.predicted {
                assert_eq!(*p, average.predicted[0]);
                assert_close!(*p, mean);
            }

            let min = report
                .results()
                .iter()
                .map(|r| r.average_delta)
                .fold(f64::INFINITY, f64::min);
            let first_min = report
                .results()
                .iter()
                .find(|r| r.average_delta == min)
                .unwrap();
            assert_eq!(report.best_model(), first_min.model, "{values:?}");
            assert_eq!(Some(report.trend_score()), report.best().current());
        }
    }

    #[test]
    fn test_deserialize_round_trip() {
        let report = compute::<f64>(&evidence![1, 2, 4, 3]).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let restored: TrendReport<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, report);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_report() {
        // Results missing entirely
        let json = r#"{"observed":[1.0,2.0,3.0],"results":[],"best_model":"Linear","trend_score":3.0}"#;
        assert!(serde_json::from_str::<TrendReport<f64>>(json).is_err());

        // Too few observations to have a report at all
        let json = r#"{"observed":[1.0],"results":[],"best_model":"Average","trend_score":1.0}"#;
        assert!(serde_json::from_str::<TrendReport<f64>>(json).is_err());

        // Results reordered
        let report = compute::<f64>(&evidence![1, 2, 3]).unwrap();
        let mut value = serde_json::to_value(&report).unwrap();
        value["results"].as_array_mut().unwrap().reverse();
        assert!(serde_json::from_value::<TrendReport<f64>>(value).is_err());

        // Another model claimed as best
        let mut value = serde_json::to_value(&report).unwrap();
        value["best_model"] = "Average".into();
        assert!(serde_json::from_value::<TrendReport<f64>>(value).is_err());
    }

    #[test]
    fn test_serialize() {
        let report = compute::<f64>(&evidence![1, 2, 3]).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["best_model"], "Linear");
        assert_eq!(json["results"].as_array().unwrap().len(), 3);
        assert_eq!(json["results"][2]["model"], "Power Law");
        assert_eq!(json["results"][1]["selected"], true);
    }
}
