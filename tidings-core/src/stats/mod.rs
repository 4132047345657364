/// Pearson correlation.
pub mod correlation;
/// Descriptive statistics.
pub mod describe;
/// IQR outlier detection.
pub mod outliers;
/// Peak bucket detection.
pub mod peaks;
/// Volatility and Sharpe ratio.
pub mod risk;

#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (n - 1) standard deviation; `None` below two values.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Linearly interpolated quantile of an ascending slice (R type 7).
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

pub(crate) fn ensure_finite(values: &[f64], operation: &str) -> Result<(), crate::TidingsError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(crate::TidingsError::invalid_input(format!(
            "{operation}: non-finite value {v}"
        ))),
        None => Ok(()),
    }
}

pub(crate) fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}
