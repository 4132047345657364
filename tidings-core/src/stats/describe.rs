use super::{ensure_finite, mean, quantile_sorted, sample_std, sorted_copy};
use crate::{Summary, TidingsError};

/// Count, mean, sample standard deviation, min, quartiles and max.
///
/// # Errors
/// Returns `EmptyInput` for no values and `InvalidInput` for non-finite ones.
pub fn describe(values: &[f64]) -> Result<Summary, TidingsError> {
    if values.is_empty() {
        return Err(TidingsError::empty("describe"));
    }
    ensure_finite(values, "describe")?;
    let sorted = sorted_copy(values);
    Ok(Summary {
        count: values.len(),
        mean: mean(values),
        std: sample_std(values),
        min: sorted[0],
        p25: quantile_sorted(&sorted, 0.25),
        p50: quantile_sorted(&sorted, 0.5),
        p75: quantile_sorted(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}
