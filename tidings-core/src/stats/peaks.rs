use serde::{Deserialize, Serialize};

use crate::{Observation, TidingsError};

/// Which buckets count as peaks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PeakRule {
    /// Every bucket whose value is strictly greater than the threshold.
    Above(f64),
    /// The N highest buckets.
    TopN(usize),
}

impl PeakRule {
    /// Build a rule from the two optional knobs; exactly one must be set.
    ///
    /// # Errors
    /// Returns `InvalidArgument` when both or neither are set, when the
    /// threshold is not finite, or when `top_n` is zero.
    pub fn from_options(threshold: Option<f64>, top_n: Option<usize>) -> Result<Self, TidingsError> {
        match (threshold, top_n) {
            (Some(t), None) if t.is_finite() => Ok(Self::Above(t)),
            (Some(t), None) => Err(TidingsError::invalid_arg(format!(
                "peak threshold must be finite, got {t}"
            ))),
            (None, Some(0)) => Err(TidingsError::invalid_arg("top_n must be at least 1")),
            (None, Some(n)) => Ok(Self::TopN(n)),
            _ => Err(TidingsError::invalid_arg(
                "exactly one of threshold or top_n must be given",
            )),
        }
    }
}

/// Peak buckets, highest first; ties go to the earlier date.
///
/// # Errors
/// See [`PeakRule::from_options`].
pub fn detect_peaks(
    counts: &[Observation],
    threshold: Option<f64>,
    top_n: Option<usize>,
) -> Result<Vec<Observation>, TidingsError> {
    let rule = PeakRule::from_options(threshold, top_n)?;
    let mut ranked: Vec<Observation> = match rule {
        PeakRule::Above(t) => counts.iter().copied().filter(|o| o.value > t).collect(),
        PeakRule::TopN(_) => counts.to_vec(),
    };
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value).then(a.date.cmp(&b.date)));
    if let PeakRule::TopN(n) = rule {
        ranked.truncate(n);
    }
    Ok(ranked)
}
