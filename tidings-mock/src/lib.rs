//! Deterministic news and price providers for tests and demos.
//!
//! [`MockConnector`] serves static fixtures for `AAPL`, `MSFT` and `TSLA`
//! (August 2023). Two reserved tickers drive failure paths: `FAIL` fails every
//! call and `TIMEOUT` sleeps before answering. [`DynamicMock`] lets a test
//! script the behavior per ticker.
use async_trait::async_trait;
use tidings_core::connector::{NewsProvider, PriceProvider};
use tidings_core::{DateRange, NewsQuery, NewsRecord, PriceBar, TidingsError};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMock, DynamicMockController, MockBehavior};

const NAME: &str = "tidings-mock";

/// Delay applied to the `TIMEOUT` ticker.
pub const TIMEOUT_DELAY: std::time::Duration = std::time::Duration::from_millis(200);

/// Tickers with fixture data.
pub const TICKERS: [&str; 3] = ["AAPL", "MSFT", "TSLA"];

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockConnector;

impl MockConnector {
    /// Create the connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Full date span covered by the fixtures.
    #[must_use]
    pub fn fixture_range() -> DateRange {
        DateRange::new(fixtures::aug(1), fixtures::aug(14)).expect("fixture range is ordered")
    }

    async fn maybe_fail_or_timeout(ticker: &str, capability: &'static str) -> Result<(), TidingsError> {
        match ticker {
            "FAIL" => Err(TidingsError::data_source(
                NAME,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(TIMEOUT_DELAY).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn news(&self, query: &NewsQuery) -> Result<Vec<NewsRecord>, TidingsError> {
        if let Some(t) = &query.ticker {
            Self::maybe_fail_or_timeout(t, "news").await?;
        }
        Ok(fixtures::news::all()
            .into_iter()
            .filter(|r| query.matches(r))
            .collect())
    }
}

#[async_trait]
impl PriceProvider for MockConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn prices(&self, ticker: &str, range: DateRange) -> Result<Vec<PriceBar>, TidingsError> {
        Self::maybe_fail_or_timeout(ticker, "prices").await?;
        let bars = fixtures::prices::by_ticker(&ticker.to_ascii_uppercase())
            .ok_or_else(|| TidingsError::data_source(NAME, format!("no prices for {ticker}")))?;
        Ok(bars.into_iter().filter(|b| range.contains(b.date)).collect())
    }
}
