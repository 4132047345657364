use serde::{Deserialize, Serialize};

use super::{ensure_finite, quantile_sorted, sorted_copy};
use crate::TidingsError;

/// Conventional Tukey fence multiplier.
pub const DEFAULT_IQR_THRESHOLD: f64 = 1.5;

/// Tukey fences derived from the quartiles of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrBounds {
    /// First quartile.
    pub q1: f64,
    /// Third quartile.
    pub q3: f64,
    /// `q3 - q1`.
    pub iqr: f64,
    /// `q1 - threshold * iqr`.
    pub lower: f64,
    /// `q3 + threshold * iqr`.
    pub upper: f64,
}

impl IqrBounds {
    /// Fences for `values` with the given multiplier.
    ///
    /// # Errors
    /// Returns `EmptyInput` for no values, `InvalidArgument` for a negative or
    /// non-finite threshold, and `InvalidInput` for non-finite values.
    pub fn from_values(values: &[f64], threshold: f64) -> Result<Self, TidingsError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(TidingsError::invalid_arg(format!(
                "outlier threshold must be finite and non-negative, got {threshold}"
            )));
        }
        if values.is_empty() {
            return Err(TidingsError::empty("detect_outliers"));
        }
        ensure_finite(values, "detect_outliers")?;
        let sorted = sorted_copy(values);
        let q1 = quantile_sorted(&sorted, 0.25);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        Ok(Self {
            q1,
            q3,
            iqr,
            lower: threshold.mul_add(-iqr, q1),
            upper: threshold.mul_add(iqr, q3),
        })
    }

    /// Strictly outside `[lower, upper]`.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Records flagged as outliers together with the fences used.
#[derive(Debug, Clone, PartialEq)]
pub struct Outliers<'a, T> {
    /// Fences the records fell outside of.
    pub bounds: IqrBounds,
    /// Flagged records in input order.
    pub records: Vec<&'a T>,
}

/// Flag the records whose extracted value lies outside the IQR fences.
///
/// # Errors
/// See [`IqrBounds::from_values`].
pub fn detect_outliers_by<T, F>(
    records: &[T],
    threshold: f64,
    value_of: F,
) -> Result<Outliers<'_, T>, TidingsError>
where
    F: Fn(&T) -> f64,
{
    let values: Vec<f64> = records.iter().map(&value_of).collect();
    let bounds = IqrBounds::from_values(&values, threshold)?;
    let records = records
        .iter()
        .zip(&values)
        .filter(|(_, v)| bounds.is_outlier(**v))
        .map(|(r, _)| r)
        .collect();
    Ok(Outliers { bounds, records })
}

/// Values lying outside the IQR fences, in input order.
///
/// # Errors
/// See [`IqrBounds::from_values`].
pub fn detect_outliers(values: &[f64], threshold: f64) -> Result<Vec<f64>, TidingsError> {
    let found = detect_outliers_by(values, threshold, |v| *v)?;
    Ok(found.records.into_iter().copied().collect())
}
