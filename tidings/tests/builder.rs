mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::mock_builder;
use tidings::{
    AnalysisConfig, Frequency, HeadlineConfig, Reducer, ReturnsPolicy, Stopwords, Tidings,
    TidingsConfig, TidingsError,
};
use tidings_mock::MockConnector;

#[test]
fn news_provider_is_required() {
    let err = Tidings::builder()
        .price_provider(Arc::new(MockConnector::new()))
        .build()
        .unwrap_err();
    assert!(matches!(err, TidingsError::InvalidArgument(_)));
}

#[test]
fn debug_names_the_providers() {
    let t = mock_builder().build().unwrap();
    let shown = format!("{t:?}");
    assert!(shown.contains("tidings-mock"), "{shown}");
    assert!(shown.contains("lexicon"), "{shown}");

    let headlines_only = Tidings::builder()
        .news_provider(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    assert!(format!("{headlines_only:?}").contains("prices: None"));
}

#[test]
fn defaults_are_applied() {
    let t = mock_builder().build().unwrap();
    assert_eq!(*t.config(), TidingsConfig::default());
    assert_eq!(t.scorer().inner().name(), "lexicon");
    assert!(t.stopwords().contains("the"));
}

#[test]
fn setters_override_config() {
    let t = mock_builder()
        .frequency(Frequency::Month)
        .sentiment_reducer(Reducer::Sum)
        .prefer_adjusted(false)
        .returns_policy(ReturnsPolicy::ZeroFill)
        .outlier_threshold(3.0)
        .min_overlap(4)
        .provider_timeout(Duration::from_millis(250))
        .request_timeout(Duration::from_secs(2))
        .stopwords(Stopwords::from_words(["apple"]))
        .build()
        .unwrap();

    let cfg = t.config();
    assert_eq!(cfg.analysis.frequency, Frequency::Month);
    assert_eq!(cfg.analysis.sentiment_reducer, Reducer::Sum);
    assert!(!cfg.analysis.prefer_adjusted);
    assert_eq!(cfg.analysis.returns_policy, ReturnsPolicy::ZeroFill);
    assert!((cfg.analysis.outlier_threshold - 3.0).abs() < f64::EPSILON);
    assert_eq!(cfg.analysis.min_overlap, 4);
    assert_eq!(cfg.provider_timeout, Duration::from_millis(250));
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(2)));
    assert!(t.stopwords().contains("apple"));
    assert!(!t.stopwords().contains("the"));
}

#[test]
fn whole_sections_can_be_replaced() {
    let analysis = AnalysisConfig {
        frequency: Frequency::Week,
        ..AnalysisConfig::default()
    };
    let headlines = HeadlineConfig {
        keyword_top_n: 3,
        ..HeadlineConfig::default()
    };
    let t = mock_builder()
        .analysis(analysis)
        .headlines(headlines)
        .build()
        .unwrap();
    assert_eq!(t.config().analysis, analysis);
    assert_eq!(t.config().headlines, headlines);
}

#[test]
fn invalid_settings_are_rejected() {
    for b in [
        mock_builder().outlier_threshold(-1.0),
        mock_builder().outlier_threshold(f64::NAN),
        mock_builder().min_overlap(1),
        mock_builder().headlines(HeadlineConfig {
            ngram_min: 0,
            ..HeadlineConfig::default()
        }),
        mock_builder().headlines(HeadlineConfig {
            ngram_min: 3,
            ngram_max: 2,
            ..HeadlineConfig::default()
        }),
    ] {
        assert!(matches!(b.build(), Err(TidingsError::InvalidArgument(_))));
    }
}

#[test]
fn config_builder_roundtrip() {
    let mut cfg = TidingsConfig::default();
    cfg.analysis.frequency = Frequency::Week;
    cfg.request_timeout = Some(Duration::from_secs(1));
    let t = mock_builder().config(cfg).build().unwrap();
    assert_eq!(*t.config(), cfg);
}
