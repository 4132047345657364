mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::{AAPL, MSFT, TSLA, aug, mock_builder, mock_tidings, range};
use tidings::{Frequency, PolarityScorer, ReturnsPolicy, Tidings, TidingsError};
use tidings_mock::{DynamicMock, MockBehavior};

#[tokio::test]
async fn daily_correlation_for_fixture_ticker() {
    let t = mock_tidings();
    let c = t.correlate_ticker(AAPL, range()).await.expect("correlation");
    assert_eq!(c.ticker, AAPL);
    assert_eq!(c.frequency, Frequency::Day);
    // 2023-08-01 has no previous close and is dropped
    assert_eq!(c.correlation.sample_size, 9);
    assert_eq!(c.aligned.first().map(|p| p.date), Some(aug(2)));
    assert!(c.correlation.coefficient > 0.5, "r = {}", c.correlation.coefficient);
    assert_eq!(c.returns.len(), 9);
}

#[tokio::test]
async fn weekly_buckets_start_on_monday() {
    let t = mock_builder().frequency(Frequency::Week).build().unwrap();
    let c = t.correlate_ticker(AAPL, range()).await.expect("correlation");
    let dates: Vec<_> = c.aligned.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![aug(7), aug(14)]);
    assert!((c.correlation.coefficient - 1.0).abs() < 1e-9);

    let t = mock_builder()
        .frequency(Frequency::Week)
        .returns_policy(ReturnsPolicy::ZeroFill)
        .build()
        .unwrap();
    let c = t.correlate_ticker(AAPL, range()).await.expect("correlation");
    let first = c.returns.first().expect("zero-filled bucket");
    assert_eq!((first.date, first.value), (aug(1).pred_opt().unwrap(), 0.0));
    assert_eq!(c.returns.len(), 3);
}

#[tokio::test]
async fn batch_collects_failures_as_warnings() {
    let t = mock_tidings();
    let report = t
        .correlate_tickers(&[AAPL, "FAIL", MSFT, "NOPE", TSLA], range())
        .await
        .expect("report");

    let ok: Vec<&str> = report.results.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(ok, vec![AAPL, MSFT, TSLA]);
    assert!(report.coefficients().iter().all(|(_, r)| *r > 0.5));

    let warned: Vec<&str> = report.warnings.iter().map(|w| w.ticker.as_str()).collect();
    assert_eq!(warned, vec!["FAIL", "NOPE"]);
    assert!(
        report
            .warnings
            .iter()
            .all(|w| matches!(w.error, TidingsError::DataSource { .. }))
    );
}

#[tokio::test]
async fn too_few_aligned_points_is_a_warning() {
    let t = mock_builder().min_overlap(20).build().unwrap();
    let report = t.correlate_tickers(&[AAPL], range()).await.unwrap();
    assert!(report.results.is_empty());
    assert_eq!(
        report.warnings[0].error,
        TidingsError::InsufficientData { needed: 20, got: 9 }
    );
}

#[tokio::test]
async fn ticker_list_is_validated() {
    let t = mock_tidings();
    assert!(matches!(
        t.correlate_tickers(&[], range()).await,
        Err(TidingsError::InvalidArgument(_))
    ));
    assert!(matches!(
        t.correlate_tickers(&[AAPL, "aapl"], range()).await,
        Err(TidingsError::InvalidArgument(_))
    ));
    assert!(matches!(
        t.correlate_tickers(&[AAPL, " "], range()).await,
        Err(TidingsError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let t = mock_builder()
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();
    let err = t.correlate_ticker("TIMEOUT", range()).await.unwrap_err();
    match err {
        TidingsError::DataSource { provider, msg } => {
            assert_eq!(provider, "tidings-mock");
            assert!(msg.contains("timed out"), "{msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn request_deadline_bounds_the_batch() {
    let (mock, controller) = DynamicMock::new_with_controller("stalled");
    controller.set_price_behavior(AAPL, MockBehavior::Hang).await;
    let t = Tidings::builder()
        .news_provider(mock.clone())
        .price_provider(mock)
        .request_timeout(Duration::from_millis(30))
        .build()
        .unwrap();
    let err = t.correlate_tickers(&[AAPL], range()).await.unwrap_err();
    assert!(matches!(err, TidingsError::DataSource { .. }));
}

#[tokio::test]
async fn missing_price_provider_is_caller_misuse() {
    let t = Tidings::builder()
        .news_provider(Arc::new(tidings_mock::MockConnector::new()))
        .build()
        .unwrap();
    assert!(matches!(
        t.correlate_ticker(AAPL, range()).await,
        Err(TidingsError::InvalidArgument(_))
    ));
}

struct Flat;

impl PolarityScorer for Flat {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn polarity(&self, _text: &str) -> Result<f64, TidingsError> {
        Ok(0.25)
    }
}

#[tokio::test]
async fn injected_scorer_is_used() {
    let t = mock_builder().scorer(Arc::new(Flat)).build().unwrap();
    assert!(matches!(
        t.correlate_ticker(MSFT, range()).await,
        Err(TidingsError::UndefinedCorrelation(_))
    ));
    assert_eq!(t.scorer().inner().name(), "flat");
}
