// Shared fixtures for the orchestrator tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use tidings::{DateRange, Tidings, TidingsBuilder};
use tidings_mock::MockConnector;

/// Common ticker constants used across tests.
pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";
pub const TSLA: &str = "TSLA";

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn aug(day: u32) -> NaiveDate {
    d(2023, 8, day)
}

pub fn range() -> DateRange {
    MockConnector::fixture_range()
}

/// Builder wired to the fixture mock for both news and prices.
pub fn mock_builder() -> TidingsBuilder {
    let mock = Arc::new(MockConnector::new());
    Tidings::builder()
        .news_provider(mock.clone())
        .price_provider(mock)
}

pub fn mock_tidings() -> Tidings {
    mock_builder().build().expect("valid builder")
}
