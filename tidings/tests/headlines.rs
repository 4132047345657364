mod helpers;

use helpers::{AAPL, aug, mock_builder, mock_tidings, range};
use tidings::{Frequency, HeadlineConfig, NewsQuery, TidingsError};

#[tokio::test]
async fn report_over_fixture_corpus() {
    let t = mock_tidings();
    let report = t.headline_report(&NewsQuery::all()).await.expect("report");

    assert_eq!(report.records, 27);
    assert_eq!(report.length_summary.count, 27);
    assert!((report.length_summary.min - 33.0).abs() < f64::EPSILON);
    assert!((report.length_summary.max - 100.0).abs() < f64::EPSILON);
    assert!((report.length_summary.p50 - 42.0).abs() < f64::EPSILON);

    let outliers: Vec<&str> = report
        .length_outliers
        .iter()
        .map(|r| r.headline.as_str())
        .collect();
    assert_eq!(outliers.len(), 2);
    assert_eq!(outliers[0], "Microsoft drops on cloud concerns");
    assert!(outliers[1].starts_with("Stocks moving"));

    let publishers: Vec<(&str, usize)> = report
        .publishers
        .iter()
        .map(|p| (p.publisher.as_str(), p.articles))
        .collect();
    assert_eq!(
        publishers,
        vec![
            ("Lisa Levin", 9),
            ("Benzinga Newsdesk", 6),
            ("Reuters", 6),
            ("Zacks", 5),
            ("Benzinga Insights", 1),
        ]
    );

    let c = report.categories;
    assert_eq!(c.positive + c.neutral + c.negative, 27);
    assert!(c.positive > 0 && c.negative > 0);

    let peaks: Vec<_> = report
        .publication_peaks
        .iter()
        .map(|o| (o.date, o.value))
        .collect();
    assert_eq!(
        peaks,
        vec![
            (aug(2), 3.0),
            (aug(3), 3.0),
            (aug(4), 3.0),
            (aug(7), 3.0),
            (aug(9), 3.0)
        ]
    );

    let top: Vec<(&str, usize)> = report
        .keywords
        .iter()
        .take(3)
        .map(|k| (k.ngram.as_str(), k.count))
        .collect();
    assert_eq!(top, vec![("apple", 11), ("microsoft", 11), ("tesla", 7)]);
    assert_eq!(report.keywords.len(), 10);
}

#[tokio::test]
async fn report_honors_query_and_settings() {
    let t = mock_builder()
        .headlines(HeadlineConfig {
            publication_frequency: Frequency::Week,
            peak_top_n: 1,
            keyword_top_n: 2,
            ngram_min: 1,
            ngram_max: 1,
        })
        .build()
        .unwrap();
    let report = t
        .headline_report(&NewsQuery::for_ticker(AAPL).within(range()))
        .await
        .unwrap();

    assert_eq!(report.records, 10);
    // five AAPL headlines in the week of Aug 7
    assert_eq!(report.publication_peaks.len(), 1);
    assert_eq!(report.publication_peaks[0].date, aug(7));
    assert!((report.publication_peaks[0].value - 5.0).abs() < f64::EPSILON);
    assert_eq!(report.keywords.len(), 2);
    assert_eq!(report.keywords[0].ngram, "apple");
    assert_eq!(report.keywords[0].count, 10);
    assert!(report.keywords.iter().all(|k| !k.ngram.contains(' ')));
}

#[tokio::test]
async fn empty_selection_is_an_error() {
    let t = mock_tidings();
    let err = t
        .headline_report(&NewsQuery::for_ticker("NOPE"))
        .await
        .unwrap_err();
    assert!(matches!(err, TidingsError::EmptyInput { .. }));
}

#[tokio::test]
async fn failing_news_provider_surfaces() {
    let t = mock_tidings();
    let err = t
        .headline_report(&NewsQuery::for_ticker("FAIL"))
        .await
        .unwrap_err();
    assert!(matches!(err, TidingsError::DataSource { .. }));
}
