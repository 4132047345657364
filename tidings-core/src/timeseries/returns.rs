use crate::timeseries::resample::aggregate;
use crate::{Frequency, Observation, PriceBar, PricePoint, Reducer, ReturnsPolicy, TidingsError};

fn checked_close(bar: &PriceBar, prefer_adjusted: bool) -> Result<f64, TidingsError> {
    let close = bar.effective_close(prefer_adjusted);
    if !close.is_finite() || close <= 0.0 {
        return Err(TidingsError::invalid_input(format!(
            "close {close} on {} is not a positive finite price",
            bar.date
        )));
    }
    Ok(close)
}

fn sorted_unique(bars: &[PriceBar]) -> Result<Vec<PriceBar>, TidingsError> {
    let mut sorted = bars.to_vec();
    sorted.sort_by_key(|b| b.date);
    if let Some(w) = sorted.windows(2).find(|w| w[0].date == w[1].date) {
        return Err(TidingsError::invalid_input(format!(
            "duplicate price bar on {}",
            w[0].date
        )));
    }
    Ok(sorted)
}

/// Effective closes in date order with the change from the previous close.
///
/// # Errors
/// Returns `InvalidInput` for repeated dates or closes that are not positive and finite.
pub fn price_points(bars: &[PriceBar], prefer_adjusted: bool) -> Result<Vec<PricePoint>, TidingsError> {
    let mut prev: Option<f64> = None;
    sorted_unique(bars)?
        .iter()
        .map(|bar| {
            let close = checked_close(bar, prefer_adjusted)?;
            let pct_change = prev.map(|p| close / p - 1.0);
            prev = Some(close);
            Ok(PricePoint {
                date: bar.date,
                close,
                pct_change,
            })
        })
        .collect()
}

/// Fractional return per calendar bucket, keyed by bucket start.
///
/// Each bucket's close is its last effective close; the return is the change
/// from the previous bucket that has a close. Buckets without trades are
/// skipped rather than reported as zero.
///
/// # Errors
/// Returns `EmptyInput` for no bars, plus everything [`price_points`] rejects.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "tidings::timeseries",
        skip(bars),
        fields(bars = bars.len()),
    )
)]
pub fn bucket_returns(
    bars: &[PriceBar],
    frequency: Frequency,
    prefer_adjusted: bool,
    policy: ReturnsPolicy,
) -> Result<Vec<Observation>, TidingsError> {
    if bars.is_empty() {
        return Err(TidingsError::empty("bucket_returns"));
    }
    let closes: Vec<Observation> = price_points(bars, prefer_adjusted)?
        .into_iter()
        .map(|p| Observation::new(p.date, p.close))
        .collect();
    let bucketed = aggregate(&closes, frequency, Reducer::Last)?.observations();

    let mut out = Vec::with_capacity(bucketed.len());
    if let (Some(first), ReturnsPolicy::ZeroFill) = (bucketed.first(), policy) {
        out.push(Observation::new(first.date, 0.0));
    }
    out.extend(
        bucketed
            .windows(2)
            .map(|w| Observation::new(w[1].date, w[1].value / w[0].value - 1.0)),
    );
    Ok(out)
}
