//! Re-export of the shared data model from `tidings-types`.
// Consolidated re-exports so downstream crates can depend on `tidings-core` only

pub use tidings_types::TidingsError;

pub use tidings_types::{
    AggregatedSeries, AlignedPoint, Bucket, DateRange, Observation, PriceBar, PricePoint,
};
pub use tidings_types::{Category, CategoryBreakdown, NewsQuery, NewsRecord, ScoredRecord};
pub use tidings_types::{CorrelationResult, KeywordCount, PublisherCount, Summary};
pub use tidings_types::{
    AnalysisConfig, Fill, Frequency, HeadlineConfig, Reducer, ReturnsPolicy, TidingsConfig,
};
pub use tidings_types::{CorrelationReport, HeadlineReport, TickerCorrelation, TickerWarning};
