//! # Trendfit
//! ## Which of three simple lines best explains your last few scores?
//!
//! Given a short, time-ordered run of assessment scores (integers from 1 to 4), this crate
//! predicts a "current trend score". It fits three simple models to the whole series, measures
//! how far each one is from the observations, and reports the prediction of the model that
//! missed by the least.
//!
//! ```rust
//! use trendfit::{Model, TrendCalculator};
//!
//! let mut calc = TrendCalculator::<f64>::new();
//! for score in [1, 2, 4] {
//!     calc.append(score).expect("scores are in range");
//! }
//!
//! let report = calc.report().expect("three scores are enough");
//! assert_eq!(report.best_model(), Model::PowerLaw);
//! println!("{report}");
//! ```
//!
//! # Core Concepts
//! - A [`evidence::Score`] is one observation, always in `1..=4`. Anything else is rejected
//!   and leaves the series untouched.
//! - An [`EvidenceSeries`] is the ordered list of scores. It only grows and shrinks at the end.
//!   - Fewer than [`evidence::MIN_EVIDENCE`] scores means no prediction; see [`SeriesState`].
//! - A [`Model`] turns the series into one prediction per index:
//!     - [`Model::Average`] is a flat line at the mean.
//!     - [`Model::Linear`] is the least squares line over positions `1..n`.
//!     - [`Model::PowerLaw`] is `a·x^b`, fitted in log-log space.
//! - Each model is scored by its average Δ, the mean absolute error against the observations.
//!   The lowest average Δ wins; ties go to the earlier model in the order above.
//! - A [`TrendReport`] holds every model's result plus the winner's prediction at the last index,
//!   both raw and rounded to the nearest 0.5 for display.
//!
//! # Implementation Details
//!
//! Everything is recomputed from scratch on every change. [`report::compute`] is a pure function
//! of the series; [`TrendCalculator`] just owns the series and calls it after each mutation.
//!
//! All numeric code is generic over [`value::Value`], which defaults to `f64` and builds on
//! `nalgebra`'s `RealField`.
//!
//! # Testing utilities
//!
//! This crate includes a small set of test macros. See [`test`].
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)] // Series lengths are tiny
#![allow(clippy::similar_names)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod test;

pub mod display;
pub mod error;
pub mod evidence;
pub mod report;
pub mod score;
pub mod statistics;
pub mod value;

mod calculator;
mod model;

pub use calculator::TrendCalculator;
pub use evidence::{EvidenceSeries, SeriesState};
pub use model::Model;
pub use report::TrendReport;

pub use nalgebra;
