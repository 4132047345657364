use async_trait::async_trait;

use crate::TidingsError;
use tidings_types::{DateRange, NewsQuery, NewsRecord, PriceBar};

/// Focused role trait for sources of news articles.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Short, stable provider name used to tag `DataSource` errors.
    fn name(&self) -> &'static str;

    /// Fetch the articles matching `query`.
    ///
    /// Contract: the returned records are sorted by date. Failures to read or
    /// parse the underlying feed are reported as `TidingsError::DataSource`.
    async fn news(&self, query: &NewsQuery) -> Result<Vec<NewsRecord>, TidingsError>;
}

/// Focused role trait for sources of daily closes.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Short, stable provider name used to tag `DataSource` errors.
    fn name(&self) -> &'static str;

    /// Fetch daily bars for `ticker` within `range`.
    ///
    /// Contract: at most one bar per date. An unknown ticker is reported as
    /// `TidingsError::DataSource`, not as an empty vector.
    async fn prices(&self, ticker: &str, range: DateRange) -> Result<Vec<PriceBar>, TidingsError>;
}
