use super::{ensure_finite, mean};
use crate::{AlignedPoint, CorrelationResult, TidingsError};

/// Pearson correlation between the two columns of an alignment.
///
/// # Errors
/// See [`pearson`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "tidings::stats",
        skip(aligned),
        fields(points = aligned.len()),
    )
)]
pub fn correlate(aligned: &[AlignedPoint]) -> Result<CorrelationResult, TidingsError> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = aligned.iter().map(|p| (p.left, p.right)).unzip();
    pearson(&xs, &ys)
}

/// Pearson coefficient of two equally long samples, clamped to `[-1, 1]`.
///
/// # Errors
/// - `InvalidArgument` if the lengths differ.
/// - `InsufficientData` below two points; checked before anything else about the values.
/// - `InvalidInput` for non-finite values.
/// - `UndefinedCorrelation` if either sample is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Result<CorrelationResult, TidingsError> {
    if xs.len() != ys.len() {
        return Err(TidingsError::invalid_arg(format!(
            "samples differ in length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    let n = xs.len();
    if n < 2 {
        return Err(TidingsError::insufficient(2, n));
    }
    ensure_finite(xs, "correlate")?;
    ensure_finite(ys, "correlate")?;
    if is_constant(xs) || is_constant(ys) {
        return Err(TidingsError::undefined_correlation(format!(
            "one of the {n}-point series has zero variance"
        )));
    }

    let (Some(dx), Some(dy)) = (unit_deviations(xs), unit_deviations(ys)) else {
        return Err(TidingsError::undefined_correlation(format!(
            "one of the {n}-point series has zero variance"
        )));
    };
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in dx.iter().zip(&dy) {
        sxy += x * y;
        sxx += x * x;
        syy += y * y;
    }
    Ok(CorrelationResult {
        coefficient: (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0),
        sample_size: n,
    })
}

/// Deviations from the mean scaled into `[-1, 1]`, so squaring them neither
/// overflows nor underflows. `None` when every deviation is zero.
fn unit_deviations(values: &[f64]) -> Option<Vec<f64>> {
    let scale = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if scale == 0.0 {
        return None;
    }
    let scaled: Vec<f64> = values.iter().map(|v| v / scale).collect();
    let m = mean(&scaled);
    let mut dev: Vec<f64> = scaled.iter().map(|v| v - m).collect();
    let spread = dev.iter().fold(0.0_f64, |m, d| m.max(d.abs()));
    if spread == 0.0 {
        return None;
    }
    dev.iter_mut().for_each(|d| *d /= spread);
    Some(dev)
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}
