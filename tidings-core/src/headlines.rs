use std::collections::HashMap;

use chrono::NaiveDate;

use crate::stats::describe::describe;
use crate::stats::outliers::detect_outliers_by;
use crate::stats::peaks::detect_peaks;
use crate::timeseries::resample::count_by_bucket;
use crate::{AggregatedSeries, Frequency, NewsRecord, Observation, PublisherCount, Summary, TidingsError};

/// Headline length in characters (not bytes).
#[must_use]
pub fn headline_length(record: &NewsRecord) -> usize {
    record.headline.chars().count()
}

/// Character length of every headline, in input order.
#[must_use]
pub fn headline_lengths(records: &[NewsRecord]) -> Vec<usize> {
    records.iter().map(headline_length).collect()
}

/// Descriptive statistics of headline lengths.
///
/// # Errors
/// Returns `EmptyInput` when there are no records.
#[allow(clippy::cast_precision_loss)]
pub fn length_summary(records: &[NewsRecord]) -> Result<Summary, TidingsError> {
    let lengths: Vec<f64> = records.iter().map(|r| headline_length(r) as f64).collect();
    describe(&lengths)
}

/// Records whose headline length is an IQR outlier.
///
/// # Errors
/// Returns `EmptyInput` when there are no records and `InvalidArgument` for a
/// negative or non-finite threshold.
#[allow(clippy::cast_precision_loss)]
pub fn length_outliers(records: &[NewsRecord], threshold: f64) -> Result<Vec<NewsRecord>, TidingsError> {
    let found = detect_outliers_by(records, threshold, |r| headline_length(r) as f64)?;
    Ok(found.records.into_iter().cloned().collect())
}

/// Articles per publisher, busiest first; equal counts sort by name.
#[must_use]
pub fn articles_per_publisher(records: &[NewsRecord]) -> Vec<PublisherCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        *counts.entry(r.publisher.as_str()).or_default() += 1;
    }
    let mut out: Vec<PublisherCount> = counts
        .into_iter()
        .map(|(publisher, articles)| PublisherCount {
            publisher: publisher.to_string(),
            articles,
        })
        .collect();
    out.sort_by(|a, b| {
        b.articles
            .cmp(&a.articles)
            .then_with(|| a.publisher.cmp(&b.publisher))
    });
    out
}

/// Articles per calendar bucket, empty buckets counted as zero.
///
/// # Errors
/// Returns `EmptyInput` when there are no records.
pub fn publication_counts(
    records: &[NewsRecord],
    frequency: Frequency,
) -> Result<AggregatedSeries, TidingsError> {
    let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    count_by_bucket(&dates, frequency)
}

/// Busiest publication buckets; exactly one of `threshold` or `top_n` must be set.
///
/// # Errors
/// `EmptyInput` when there are no records; `InvalidArgument` for a bad peak rule.
pub fn publication_peaks(
    records: &[NewsRecord],
    frequency: Frequency,
    threshold: Option<f64>,
    top_n: Option<usize>,
) -> Result<Vec<Observation>, TidingsError> {
    let counts = publication_counts(records, frequency)?.observations();
    detect_peaks(&counts, threshold, top_n)
}
