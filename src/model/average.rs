use crate::{statistics, value::Value};

/// Constant prediction at the arithmetic mean of `observed`.
///
/// This is also the fallback value the regressions substitute for any non-finite point.
pub fn fit<T: Value>(observed: &[T]) -> Vec<T> {
    let mean = statistics::mean(observed.iter().copied());
    vec![mean; observed.len()]
}
