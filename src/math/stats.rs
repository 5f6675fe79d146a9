//! Summary statistics used by the least-squares fit and the evaluator.
//!
//! `covariance` and `variance` are plain sums of deviations (not divided by `n`).
//! The factor cancels in the slope ratio `cov / var`, so keeping raw sums avoids
//! two divisions and keeps intermediate values easy to check by hand.

/// Arithmetic mean. Returns `NaN` for an empty slice; callers guard emptiness.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// `Σ (x_i - mean_x)(y_i - mean_y)` over paired values.
pub fn covariance(x: &[f64], mean_x: f64, y: &[f64], mean_y: f64) -> f64 {
    x.iter()
        .zip(y)
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum()
}

/// `Σ (v_i - mean)²`.
pub fn variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum()
}

/// Root mean squared error `sqrt((1/n) Σ (predicted_i - actual_i)²)`.
///
/// Returns `None` when the slices are empty or have different lengths.
pub fn rmse_metric(actual: &[f64], predicted: &[f64]) -> Option<f64> {
    if actual.is_empty() || actual.len() != predicted.len() {
        return None;
    }
    let sum_error: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (p - a).powi(2))
        .sum();
    Some((sum_error / actual.len() as f64).sqrt())
}
