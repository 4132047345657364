//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::TidingsError;
use crate::news::{CategoryBreakdown, NewsRecord};
use crate::series::{AggregatedSeries, AlignedPoint, Observation};
use crate::stats::{CorrelationResult, KeywordCount, PublisherCount, Summary};
use crate::config::Frequency;

/// Sentiment/price correlation for one ticker, with the series it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerCorrelation {
    /// Ticker symbol.
    pub ticker: String,
    /// Bucket width used for both series.
    pub frequency: Frequency,
    /// Pearson correlation of bucket sentiment against bucket returns.
    pub correlation: CorrelationResult,
    /// Aggregated sentiment.
    pub sentiment: AggregatedSeries,
    /// Bucket returns.
    pub returns: Vec<Observation>,
    /// Points present in both series (`left` = sentiment, `right` = return).
    pub aligned: Vec<AlignedPoint>,
}

/// A ticker that was skipped in a batch, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerWarning {
    /// Ticker symbol.
    pub ticker: String,
    /// Error that ended the ticker's computation.
    pub error: TidingsError,
}

/// Result of correlating several tickers.
///
/// Successful tickers land in `results`; failures are recorded in `warnings`
/// without aborting the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// Per-ticker results in request order.
    pub results: Vec<TickerCorrelation>,
    /// Non-fatal per-ticker failures in request order.
    pub warnings: Vec<TickerWarning>,
}

impl CorrelationReport {
    /// Result for a ticker, if it succeeded.
    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<&TickerCorrelation> {
        self.results.iter().find(|r| r.ticker == ticker)
    }

    /// Coefficients keyed by ticker, in request order.
    #[must_use]
    pub fn coefficients(&self) -> Vec<(&str, f64)> {
        self.results
            .iter()
            .map(|r| (r.ticker.as_str(), r.correlation.coefficient))
            .collect()
    }
}

/// Headline and publisher statistics over a set of news records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineReport {
    /// Number of records analyzed.
    pub records: usize,
    /// Statistics of headline lengths in characters.
    pub length_summary: Summary,
    /// Records whose headline length is an IQR outlier.
    pub length_outliers: Vec<NewsRecord>,
    /// Article counts per publisher, busiest first.
    pub publishers: Vec<PublisherCount>,
    /// Sentiment category counts.
    pub categories: CategoryBreakdown,
    /// Busiest publication buckets.
    pub publication_peaks: Vec<Observation>,
    /// Most frequent headline n-grams.
    pub keywords: Vec<KeywordCount>,
}
