//! Tidings correlates news sentiment with stock price movements.
//!
//! Overview
//! - Pulls articles from a [`NewsProvider`] and daily bars from a [`PriceProvider`].
//! - Scores every headline with a pluggable [`PolarityScorer`] (the built-in
//!   financial [`LexiconScorer`] by default).
//! - Aggregates sentiment and price returns into calendar buckets, joins them on
//!   the bucket start and computes the Pearson correlation.
//! - Summarizes headlines: lengths and their outliers, publishers, sentiment
//!   categories, publication peaks and keywords.
//!
//! Key behaviors and trade-offs
//! - Frequency: daily buckets give the most points; weekly or monthly buckets
//!   smooth noisy sentiment at the cost of fewer aligned points.
//! - Returns: one percentage change per bucket between last closes. The first
//!   bucket has no predecessor and is dropped by default (`ReturnsPolicy::ZeroFill`
//!   reports `0.0` instead).
//! - Adjusted closes are preferred when the feed reports them.
//! - Multi-ticker runs fan out concurrently; a failing ticker becomes a warning
//!   instead of failing the batch.
//!
//! Examples
//! Building an orchestrator and correlating one ticker:
//! ```rust,ignore
//! use std::sync::Arc;
//! use tidings::{CsvNewsSource, DateRange, Frequency, Tidings};
//!
//! let tidings = Tidings::builder()
//!     .news_provider(Arc::new(CsvNewsSource::new("raw_analyst_ratings.csv")))
//!     .price_provider(prices)
//!     .frequency(Frequency::Week)
//!     .build()?;
//!
//! let aapl = tidings.correlate_ticker("AAPL", range).await?;
//! println!("r = {:.3} over {} weeks", aapl.correlation.coefficient, aapl.correlation.sample_size);
//! ```
//!
//! Correlating several tickers at once:
//! ```rust,ignore
//! let report = tidings.correlate_tickers(&["AAPL", "MSFT", "TSLA"], range).await?;
//! for (ticker, r) in report.coefficients() {
//!     println!("{ticker}: {r:.3}");
//! }
//! for w in &report.warnings {
//!     eprintln!("{}: {}", w.ticker, w.error);
//! }
//! ```
//!
//! Without providers, [`analysis`] runs the same pipeline on data already in memory.
#![warn(missing_docs)]

pub mod analysis;
pub(crate) mod core;
mod correlate;
mod csv_source;
mod headlines;

pub use core::{Tidings, TidingsBuilder};
pub use csv_source::CsvNewsSource;

pub use tidings_core::connector::{NewsProvider, PriceProvider};
pub use tidings_core::{Lexicon, LexiconScorer, PolarityScorer, SentimentScorer, Stopwords};

// Re-export core types for convenience
pub use tidings_core::{
    AggregatedSeries, AlignedPoint, AnalysisConfig, Bucket, Category, CategoryBreakdown,
    CorrelationReport, CorrelationResult, DateRange, Fill, Frequency, HeadlineConfig,
    HeadlineReport, KeywordCount, NewsQuery, NewsRecord, Observation, PriceBar, PricePoint,
    PublisherCount, Reducer, ReturnsPolicy, ScoredRecord, Summary, TickerCorrelation,
    TickerWarning, TidingsConfig, TidingsError,
};
