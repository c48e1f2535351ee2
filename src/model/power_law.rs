use crate::{
    model::{finite_or, positions},
    statistics::{self, LeastSquares},
    value::Value,
};

/// Observations are clamped to at least this before taking the logarithm.
const LOG_FLOOR: f64 = 0.1;

/// Power curve `y = a·x^b` over `x = 1..n`.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// The curve is fitted as a least squares line through the log-transformed points:
/// ```math
/// lx = ln(x), ly = ln(max(y, 0.1))
/// b  = slope of (lx, ly)
/// a  = exp(intercept of (lx, ly))
/// ```
/// A zero denominator gives `b = 0`, so `a` is the geometric mean of the observations.
/// Non-finite points fall back to the arithmetic mean.
/// </div>
pub fn fit<T: Value>(observed: &[T]) -> Vec<T> {
    let n = observed.len();
    let fallback = statistics::mean(observed.iter().copied());
    let floor = T::try_cast(LOG_FLOOR).unwrap_or(<T as num_traits::float::FloatCore>::epsilon());

    let log_points = positions::<T>(n)
        .zip(observed.iter().copied())
        .map(|(x, y)| (x.ln(), nalgebra::RealField::max(y, floor).ln()));
    let line = LeastSquares::fit(log_points);

    let b = line.slope;
    let a = line.intercept.exp();
    positions(n)
        .map(|x: T| finite_or(a * x.powf(b), fallback))
        .collect()
}
