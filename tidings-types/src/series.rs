//! Dated observations, price rows and bucketed series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{Frequency, Reducer};
use crate::error::TidingsError;

/// A single dated numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date.
    pub date: NaiveDate,
    /// Observed value.
    pub value: f64,
}

impl Observation {
    /// Create an observation.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

impl From<(NaiveDate, f64)> for Observation {
    fn from((date, value): (NaiveDate, f64)) -> Self {
        Self { date, value }
    }
}

/// Inclusive calendar date range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, validating that `start <= end`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TidingsError> {
        if start > end {
            return Err(TidingsError::invalid_arg(format!(
                "date range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` lies within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One row of a daily price feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date.
    pub date: NaiveDate,
    /// Raw close.
    pub close: f64,
    /// Split/dividend adjusted close, when the provider reports one.
    pub adj_close: Option<f64>,
}

impl PriceBar {
    /// Create a bar with only a raw close.
    #[must_use]
    pub const fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            close,
            adj_close: None,
        }
    }

    /// Attach an adjusted close.
    #[must_use]
    pub const fn with_adjusted(mut self, adj_close: f64) -> Self {
        self.adj_close = Some(adj_close);
        self
    }

    /// Close used for return computations.
    ///
    /// The adjusted close wins when present and `prefer_adjusted` is set.
    #[must_use]
    pub fn effective_close(&self, prefer_adjusted: bool) -> f64 {
        match self.adj_close {
            Some(adj) if prefer_adjusted => adj,
            _ => self.close,
        }
    }
}

/// A close and its change relative to the previous point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date.
    pub date: NaiveDate,
    /// Effective close.
    pub close: f64,
    /// Fractional change from the previous close; `None` for the first point.
    pub pct_change: Option<f64>,
}

/// One half-open calendar bucket `[start, end)` of an aggregated series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// First day in the bucket.
    pub start: NaiveDate,
    /// First day of the following bucket.
    pub end: NaiveDate,
    /// Reduced value; `None` marks an empty bucket whose fill policy is "missing".
    pub value: Option<f64>,
    /// Number of input values that fell into the bucket.
    pub samples: usize,
}

impl Bucket {
    /// Returns true if no input value fell into the bucket.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.samples == 0
    }
}

/// Contiguous, non-overlapping buckets covering the input's date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedSeries {
    /// Bucket width.
    pub frequency: Frequency,
    /// Reduction applied within each bucket.
    pub reducer: Reducer,
    /// Buckets in ascending date order.
    pub buckets: Vec<Bucket>,
}

impl AggregatedSeries {
    /// Number of buckets, including empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the series has no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate over buckets in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bucket> {
        self.buckets.iter()
    }

    /// Buckets with a defined value, keyed by bucket start.
    #[must_use]
    pub fn observations(&self) -> Vec<Observation> {
        self.buckets
            .iter()
            .filter_map(|b| b.value.map(|v| Observation::new(b.start, v)))
            .collect()
    }

    /// Value of the bucket starting at `start`, if any.
    #[must_use]
    pub fn get(&self, start: NaiveDate) -> Option<f64> {
        self.buckets
            .binary_search_by_key(&start, |b| b.start)
            .ok()
            .and_then(|i| self.buckets[i].value)
    }
}

impl<'a> IntoIterator for &'a AggregatedSeries {
    type Item = &'a Bucket;
    type IntoIter = std::slice::Iter<'a, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Two series joined on a shared date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    /// Shared date.
    pub date: NaiveDate,
    /// Value from the left series.
    pub left: f64,
    /// Value from the right series.
    pub right: f64,
}

impl AlignedPoint {
    /// Swap the left and right columns.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            date: self.date,
            left: self.right,
            right: self.left,
        }
    }
}
