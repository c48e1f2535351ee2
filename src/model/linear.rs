use crate::{
    model::{finite_or, positions},
    statistics::{self, LeastSquares},
    value::Value,
};

/// Least squares line `y = slope·x + intercept` over `x = 1..n`.
///
/// A zero denominator gives a flat line at the mean; any non-finite point falls back to the mean.
pub fn fit<T: Value>(observed: &[T]) -> Vec<T> {
    let n = observed.len();
    let fallback = statistics::mean(observed.iter().copied());

    let line = LeastSquares::fit(positions(n).zip(observed.iter().copied()));
    positions(n)
        .map(|x| finite_or(line.y(x), fallback))
        .collect()
}
