use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::{bucket_start, next_bucket_start};
use crate::{AggregatedSeries, Bucket, Fill, Frequency, Observation, Reducer, TidingsError};

/// How to aggregate a series: bucket width, reduction and empty-bucket fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Bucket width.
    pub frequency: Frequency,
    /// Reduction within each bucket.
    pub reducer: Reducer,
    /// Value of buckets without input.
    pub fill: Fill,
}

impl Aggregation {
    /// Aggregation with the reducer's default fill.
    #[must_use]
    pub const fn new(frequency: Frequency, reducer: Reducer) -> Self {
        Self {
            frequency,
            reducer,
            fill: reducer.default_fill(),
        }
    }

    /// Override the fill for empty buckets.
    #[must_use]
    pub const fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }
}

#[derive(Default)]
struct BucketAcc {
    sum: f64,
    count: usize,
    last: f64,
}

impl BucketAcc {
    fn push(&mut self, v: f64) {
        self.sum += v;
        self.count += 1;
        self.last = v;
    }

    #[allow(clippy::cast_precision_loss)]
    fn reduce(&self, reducer: Reducer, fill: Fill) -> Option<f64> {
        if self.count == 0 {
            return fill.value();
        }
        match reducer {
            Reducer::Sum => Some(self.sum),
            Reducer::Last => Some(self.last),
            _ => Some(self.sum / self.count as f64),
        }
    }
}

/// Aggregate dated values into calendar buckets using the reducer's default fill.
///
/// # Errors
/// See [`aggregate_with`].
pub fn aggregate(
    series: &[Observation],
    frequency: Frequency,
    reducer: Reducer,
) -> Result<AggregatedSeries, TidingsError> {
    aggregate_with(series, Aggregation::new(frequency, reducer))
}

/// Aggregate dated values into contiguous calendar buckets.
///
/// Buckets run from the bucket containing the earliest date to the one
/// containing the latest, with no gaps. Input order does not matter; values
/// sharing a date keep their input order, which decides `Reducer::Last`.
///
/// # Errors
/// Returns `EmptyInput` for an empty series and `InvalidInput` if any value is
/// not finite.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "tidings::timeseries",
        skip(series),
        fields(len = series.len()),
    )
)]
pub fn aggregate_with(
    series: &[Observation],
    agg: Aggregation,
) -> Result<AggregatedSeries, TidingsError> {
    if series.is_empty() {
        return Err(TidingsError::empty("aggregate"));
    }
    if let Some(bad) = series.iter().find(|o| !o.value.is_finite()) {
        return Err(TidingsError::invalid_input(format!(
            "non-finite value {} on {}",
            bad.value, bad.date
        )));
    }

    let mut sorted = series.to_vec();
    sorted.sort_by_key(|o| o.date);

    let mut iter = sorted.into_iter().peekable();
    let mut buckets = Vec::new();
    let Some(first) = iter.peek().map(|o| o.date) else {
        return Err(TidingsError::empty("aggregate"));
    };
    let mut start = bucket_start(first, agg.frequency)?;

    loop {
        let end = next_bucket_start(start, agg.frequency)?;
        let mut acc = BucketAcc::default();
        while let Some(o) = iter.next_if(|o| o.date < end) {
            acc.push(o.value);
        }
        buckets.push(Bucket {
            start,
            end,
            value: acc.reduce(agg.reducer, agg.fill),
            samples: acc.count,
        });
        if iter.peek().is_none() {
            break;
        }
        start = end;
    }

    Ok(AggregatedSeries {
        frequency: agg.frequency,
        reducer: agg.reducer,
        buckets,
    })
}

/// Number of dates per bucket, with empty buckets counted as zero.
///
/// # Errors
/// Returns `EmptyInput` when `dates` is empty.
pub fn count_by_bucket(
    dates: &[NaiveDate],
    frequency: Frequency,
) -> Result<AggregatedSeries, TidingsError> {
    let ones: Vec<Observation> = dates.iter().map(|&d| Observation::new(d, 1.0)).collect();
    aggregate_with(
        &ones,
        Aggregation::new(frequency, Reducer::Sum).with_fill(Fill::Zero),
    )
}
