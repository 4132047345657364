use chrono::NaiveDate;
use tidings_core::{
    Frequency, LexiconScorer, NewsRecord, Observation, PriceBar, Reducer, ReturnsPolicy,
    SentimentScorer, TidingsError, aggregate, align_series, bucket_returns, correlate,
};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn two_day_window_is_insufficient() {
    let news = [
        NewsRecord::new(d(1), "great results", "Reuters"),
        NewsRecord::new(d(1), "bad news", "Reuters"),
    ];
    let prices = [PriceBar::new(d(1), 100.0), PriceBar::new(d(2), 102.0)];

    let scorer = SentimentScorer::new(LexiconScorer::default());
    let polarity: Vec<Observation> = scorer
        .score_records(&news)
        .unwrap()
        .iter()
        .map(|s| Observation::new(s.record.date, s.polarity))
        .collect();
    let sentiment = aggregate(&polarity, Frequency::Day, Reducer::Mean).unwrap();
    assert_eq!(sentiment.len(), 1);
    assert!((sentiment.get(d(1)).unwrap() - 0.05).abs() < 1e-12);

    for policy in [ReturnsPolicy::DropFirst, ReturnsPolicy::ZeroFill] {
        let returns = bucket_returns(&prices, Frequency::Day, true, policy).unwrap();
        let returns = aggregate(&returns, Frequency::Day, Reducer::Last).unwrap();
        let aligned = align_series(&sentiment, &returns).unwrap();
        assert!(aligned.len() <= 1);
        assert!(matches!(
            correlate(&aligned),
            Err(TidingsError::InsufficientData { needed: 2, .. })
        ));
    }
}

#[test]
fn daily_sentiment_tracks_returns() {
    let news = [
        NewsRecord::new(d(2), "strong growth", "Reuters"),
        NewsRecord::new(d(3), "shares plunge on weak outlook", "Reuters"),
        NewsRecord::new(d(4), "record profits beat estimates", "Reuters"),
        NewsRecord::new(d(5), "lawsuit concerns", "Reuters"),
    ];
    let prices = [
        PriceBar::new(d(1), 100.0),
        PriceBar::new(d(2), 103.0),
        PriceBar::new(d(3), 99.0),
        PriceBar::new(d(4), 104.0),
        PriceBar::new(d(5), 101.0),
    ];
    let scorer = SentimentScorer::new(LexiconScorer::default());
    let polarity: Vec<Observation> = scorer
        .score_records(&news)
        .unwrap()
        .iter()
        .map(|s| Observation::new(s.record.date, s.polarity))
        .collect();
    let sentiment = aggregate(&polarity, Frequency::Day, Reducer::Mean).unwrap();
    let returns = bucket_returns(&prices, Frequency::Day, true, ReturnsPolicy::DropFirst).unwrap();
    let returns = aggregate(&returns, Frequency::Day, Reducer::Last).unwrap();
    let aligned = align_series(&sentiment, &returns).unwrap();
    assert_eq!(aligned.len(), 4);
    let r = correlate(&aligned).unwrap();
    assert!(r.coefficient > 0.9, "coefficient {}", r.coefficient);
}
