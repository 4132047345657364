//! Data transfer objects, configuration primitives and the error taxonomy
//! shared by the tidings crates.
#![warn(missing_docs)]

mod config;
mod error;
mod news;
mod reports;
mod series;
mod stats;

pub use config::{
    AnalysisConfig, Fill, Frequency, HeadlineConfig, Reducer, ReturnsPolicy, TidingsConfig,
};
pub use error::TidingsError;
pub use news::{Category, CategoryBreakdown, NewsQuery, NewsRecord, ScoredRecord};
pub use reports::{CorrelationReport, HeadlineReport, TickerCorrelation, TickerWarning};
pub use series::{AggregatedSeries, AlignedPoint, Bucket, DateRange, Observation, PriceBar, PricePoint};
pub use stats::{CorrelationResult, KeywordCount, PublisherCount, Summary};
