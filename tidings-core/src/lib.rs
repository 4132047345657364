//! tidings-core
//!
//! Pure computations behind the tidings news/price analysis.
//!
//! - `sentiment`: polarity scoring through a pluggable scorer, and categories.
//! - `timeseries`: calendar buckets, aggregation, alignment and bucket returns.
//! - `stats`: descriptive statistics, IQR outliers, peaks, correlation, risk.
//! - `headlines`: headline length and publisher statistics.
//! - `keywords`: n-gram keyword extraction with caller-owned stopwords.
//! - `connector`: provider traits for news and price feeds.
//!
//! Everything except the provider traits is synchronous and free of shared
//! state; independent calls can be run in parallel by the caller.
#![warn(missing_docs)]

/// News and price provider traits.
pub mod connector;
/// Headline length, publisher and publication statistics.
pub mod headlines;
/// Keyword (n-gram) extraction.
pub mod keywords;
/// Polarity scoring and sentiment categories.
pub mod sentiment;
/// Descriptive statistics, outliers, peaks, correlation and risk.
pub mod stats;
/// Calendar aggregation, alignment and returns.
pub mod timeseries;
pub mod types;

pub use connector::{NewsProvider, PriceProvider};
pub use keywords::{Stopwords, top_keywords};
pub use sentiment::{
    Lexicon, LexiconScorer, PolarityScorer, SentimentScorer, categorize, category_breakdown,
};
pub use stats::correlation::{correlate, pearson};
pub use stats::describe::describe;
pub use stats::outliers::{
    DEFAULT_IQR_THRESHOLD, IqrBounds, Outliers, detect_outliers, detect_outliers_by,
};
pub use stats::peaks::{PeakRule, detect_peaks};
pub use stats::risk::{annualized_volatility, daily_returns, sharpe_ratio};
pub use timeseries::align::{PairCorrelation, Panel, align, align_all, align_series};
pub use timeseries::resample::{Aggregation, aggregate, aggregate_with, count_by_bucket};
pub use timeseries::returns::{bucket_returns, price_points};
pub use types::*;
