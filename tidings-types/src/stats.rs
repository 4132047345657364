//! Statistic result envelopes.

use serde::{Deserialize, Serialize};

/// Pearson correlation between two aligned series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Coefficient in `[-1, 1]`.
    pub coefficient: f64,
    /// Number of aligned points used.
    pub sample_size: usize,
}

/// Descriptive statistics over a numeric sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation; undefined for a single value.
    pub std: Option<f64>,
    /// Smallest value.
    pub min: f64,
    /// First quartile.
    pub p25: f64,
    /// Median.
    pub p50: f64,
    /// Third quartile.
    pub p75: f64,
    /// Largest value.
    pub max: f64,
}

impl Summary {
    /// Interquartile range (`p75 - p25`).
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.p75 - self.p25
    }
}

/// Number of articles attributed to one publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherCount {
    /// Publisher name.
    pub publisher: String,
    /// Article count.
    pub articles: usize,
}

/// Frequency of an n-gram across headlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    /// Space-joined n-gram.
    pub ngram: String,
    /// Occurrences across all headlines.
    pub count: usize,
}
