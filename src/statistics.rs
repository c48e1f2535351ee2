//! Statistical helpers shared by the trend models.
//!
//! - [`mean`]: arithmetic mean of a sequence.
//! - [`LeastSquares`]: ordinary least squares line through `(x, y)` pairs, with a guard for
//!   a degenerate (zero) denominator.
//! - [`absolute_deltas`] and [`mean_absolute_error`]: the error metric models are ranked by.
use crate::value::Value;

/// Computes the arithmetic mean of a sequence of values.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// Mean = (Σ x_i) / N
/// where
///   x_i = each value in the dataset, N = total number of values
/// ```
/// </div>
///
/// # Returns
/// The arithmetic mean of all elements in `data`.
/// - Returns `NaN` if the iterator yields no elements.
///
/// # Examples
/// ```rust
/// let values = vec![1.0, 2.0, 3.0];
/// let m = trendfit::statistics::mean(values.into_iter());
/// assert_eq!(m, 2.0);
/// ```
pub fn mean<T: Value>(data: impl Iterator<Item = T>) -> T {
    let mut sum = T::zero();
    let mut count = T::zero();
    for value in data {
        sum += value;
        count += T::one();
    }
    sum / count
}

/// Ordinary least squares line `y = slope·x + intercept`.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
/// intercept = (Σy − slope·Σx) / n
/// ```
/// If the denominator is exactly zero (every `x` identical, or a single point) the slope is
/// taken as zero, which leaves the intercept at the mean of `y`.
/// </div>
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeastSquares<T: Value = f64> {
    /// Gradient of the fitted line
    pub slope: T,

    /// Value of the fitted line at `x = 0`
    pub intercept: T,
}
impl<T: Value> LeastSquares<T> {
    /// Fits a line through the given `(x, y)` pairs.
    ///
    /// Returns `NaN` coefficients for an empty input; callers only fit non-empty series.
    ///
    /// # Example
    /// ```
    /// # use trendfit::statistics::LeastSquares;
    /// let line = LeastSquares::fit([(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)].into_iter());
    /// assert_eq!(line.slope, 1.0);
    /// assert_eq!(line.intercept, 0.0);
    /// ```
    pub fn fit(points: impl Iterator<Item = (T, T)>) -> Self {
        let mut n = T::zero();
        let mut sum_x = T::zero();
        let mut sum_y = T::zero();
        let mut sum_xy = T::zero();
        let mut sum_x2 = T::zero();
        for (x, y) in points {
            n += T::one();
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_x2 += x * x;
        }

        let denominator = n * sum_x2 - sum_x * sum_x;
        let slope = if denominator == T::zero() {
            T::zero()
        } else {
            (n * sum_xy - sum_x * sum_y) / denominator
        };
        let intercept = (sum_y - slope * sum_x) / n;

        Self { slope, intercept }
    }

    /// Evaluates the line at `x`.
    pub fn y(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

/// Per-point absolute differences between observed and predicted values.
///
/// # Example
/// ```
/// # use trendfit::statistics::absolute_deltas;
/// let deltas = absolute_deltas(&[1.0, 2.0, 3.0], &[2.0, 2.0, 2.0]);
/// assert_eq!(deltas, vec![1.0, 0.0, 1.0]);
/// ```
pub fn absolute_deltas<T: Value>(y: &[T], y_fit: &[T]) -> Vec<T> {
    y.iter()
        .zip(y_fit)
        .map(|(&y, &y_fit)| y.delta(y_fit))
        .collect()
}

/// Computes the mean absolute error (MAE) between two sets of values.
///
/// MAE is the average of the absolute differences between observed and predicted values.
/// It is the criterion the model selector ranks by.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// MAE = (Σ |y_i - y_fit_i|) / N
/// where
///   y_i = observed values, y_fit_i = predicted values,
///   N = number of observations
/// ```
/// </div>
///
/// # Example
/// ```rust
/// # use trendfit::statistics::mean_absolute_error;
/// let y: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y_fit = vec![2.0, 2.0, 2.0];
/// let mae = mean_absolute_error(y.into_iter(), y_fit.into_iter());
/// assert!((mae - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn mean_absolute_error<T: Value>(
    y: impl Iterator<Item = T>,
    y_fit: impl Iterator<Item = T>,
) -> T {
    let mut total = T::zero();
    let mut n = T::zero();
    for (y, y_fit) in y.zip(y_fit) {
        total += y.delta(y_fit);
        n += T::one();
    }
    total / n
}
