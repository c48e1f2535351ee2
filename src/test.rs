//! Test helpers for trend models and reports.
//!
//! # Features
//!
//! ## General Purpose Macros
//!
//! ### [`crate::evidence!`]
//! Builds an [`crate::evidence::EvidenceSeries`] from literal scores. Panics on an invalid score,
//! which is what you want in a test.
//! ```rust
//! let series = trendfit::evidence![1, 2, 4];
//! assert_eq!(series.len(), 3);
//! ```
//!
//! ## Assertions
//!
//! ### [`crate::assert_close`]
//! Asserts that two floating-point values are approximately equal.
//! - Defaults to a tolerance of `1e-9` (or a few machine epsilons for narrower types).
//! - A custom tolerance is given as `tol = <value>`.
//!
//! ### [`crate::assert_all_close`]
//! Element-wise [`crate::assert_close`] over two slices of equal length.
//!
//! ### [`crate::assert_selected`]
//! Asserts that a [`crate::TrendReport`] selected the expected model. On failure the
//! message lists every model's average Δ so the reason for the choice is visible.
use crate::value::Value;


/// Absolute tolerance used by [`crate::assert_close`] when none is given.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Returns [`DEFAULT_TOLERANCE`] in the type of `like`, widened to a few machine epsilons
/// for types too narrow to represent it meaningfully.
#[doc(hidden)]
pub fn default_tolerance<T: Value>(_like: T) -> T {
    let four = T::two() + T::two();
    let eps = <T as num_traits::float::FloatCore>::epsilon();
    let tol = T::try_cast(DEFAULT_TOLERANCE).unwrap_or(eps);
    nalgebra::RealField::max(tol, eps * four)
}

/// Builds an evidence series from literal scores.
///
/// # Panics
/// Panics if any value is outside `1..=4`.
///
/// # Example
/// ```
/// # use trendfit::evidence;
/// let series = evidence![2, 2, 3, 4];
/// assert_eq!(series.to_string(), "#1: 2, #2: 2, #3: 3, #4: 4");
/// ```
#[macro_export]
macro_rules! evidence {
    ($($score:expr),* $(,)?) => {
        $crate::evidence::EvidenceSeries::from_values([$($score),*])
            .expect("evidence! requires scores in 1..=4")
    };
}
