//! Configuration types shared by the core computations and the orchestrator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Calendar bucket width used for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Frequency {
    /// One bucket per calendar day.
    #[default]
    Day,
    /// Monday through Sunday.
    Week,
    /// First through last calendar day of the month.
    Month,
}

/// Reduction applied to the values falling into one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Reducer {
    /// Arithmetic mean.
    #[default]
    Mean,
    /// Sum (counts are sums of ones).
    Sum,
    /// Last value by date; input order breaks ties within a day.
    Last,
}

impl Reducer {
    /// Fill used for empty buckets when the caller does not choose one.
    ///
    /// Sums of nothing are zero; means and last values of nothing are missing.
    #[must_use]
    pub const fn default_fill(self) -> Fill {
        match self {
            Self::Sum => Fill::Zero,
            Self::Mean | Self::Last => Fill::Missing,
        }
    }
}

/// Value given to buckets that received no input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Fill {
    /// Leave the bucket value undefined.
    #[default]
    Missing,
    /// Use `0.0`.
    Zero,
    /// Use a caller supplied constant.
    Value(f64),
}

impl Fill {
    /// Resolve the fill into an optional bucket value.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Missing => None,
            Self::Zero => Some(0.0),
            Self::Value(v) => Some(v),
        }
    }
}

/// Treatment of the first bucket of a return series, which has no predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ReturnsPolicy {
    /// Omit the first bucket.
    #[default]
    DropFirst,
    /// Emit `0.0` for the first bucket.
    ZeroFill,
}

/// Settings for the sentiment/price correlation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Bucket width for both sentiment and price returns.
    pub frequency: Frequency,
    /// Reduction of per-article polarities within a bucket.
    pub sentiment_reducer: Reducer,
    /// Use adjusted closes when the price feed has them.
    pub prefer_adjusted: bool,
    /// Treatment of the first return bucket.
    pub returns_policy: ReturnsPolicy,
    /// IQR multiplier for outlier detection.
    pub outlier_threshold: f64,
    /// Minimum number of aligned points required to report a correlation (at least 2).
    pub min_overlap: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frequency: Frequency::Day,
            sentiment_reducer: Reducer::Mean,
            prefer_adjusted: true,
            returns_policy: ReturnsPolicy::DropFirst,
            outlier_threshold: 1.5,
            min_overlap: 2,
        }
    }
}

/// Settings for headline statistics reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineConfig {
    /// Bucket width used to count publications.
    pub publication_frequency: Frequency,
    /// Number of busiest buckets reported as publication peaks.
    pub peak_top_n: usize,
    /// Number of keywords reported.
    pub keyword_top_n: usize,
    /// Smallest n-gram length considered for keywords.
    pub ngram_min: usize,
    /// Largest n-gram length considered for keywords.
    pub ngram_max: usize,
}

impl Default for HeadlineConfig {
    fn default() -> Self {
        Self {
            publication_frequency: Frequency::Day,
            peak_top_n: 5,
            keyword_top_n: 10,
            ngram_min: 1,
            ngram_max: 2,
        }
    }
}

/// Global configuration for the `Tidings` orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TidingsConfig {
    /// Correlation pipeline settings.
    pub analysis: AnalysisConfig,
    /// Headline statistics settings.
    pub headlines: HeadlineConfig,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional deadline for a whole multi-ticker batch.
    pub request_timeout: Option<Duration>,
}

impl Default for TidingsConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            headlines: HeadlineConfig::default(),
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}
