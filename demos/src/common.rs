use std::sync::Arc;

use tidings::{CsvNewsSource, DateRange, NewsProvider, PriceProvider};
use tidings_mock::MockConnector;

/// Environment variable pointing at a headline CSV file.
pub const NEWS_CSV_ENV: &str = "TIDINGS_NEWS_CSV";

/// News provider for the demos.
///
/// Reads the CSV named by `TIDINGS_NEWS_CSV` when set, the built-in fixtures otherwise.
#[must_use]
pub fn news_provider() -> Arc<dyn NewsProvider> {
    match std::env::var(NEWS_CSV_ENV) {
        Ok(path) => {
            println!("--- (Reading headlines from {path}) ---");
            Arc::new(CsvNewsSource::new(path))
        }
        Err(_) => Arc::new(MockConnector::new()),
    }
}

/// Price provider for the demos; always the fixture data.
#[must_use]
pub fn price_provider() -> Arc<dyn PriceProvider> {
    Arc::new(MockConnector::new())
}

/// Window covered by the fixture data.
#[must_use]
pub fn demo_range() -> DateRange {
    MockConnector::fixture_range()
}
