use chrono::NaiveDate;
use tidings_core::headlines::{
    articles_per_publisher, headline_lengths, length_outliers, length_summary, publication_counts,
    publication_peaks,
};
use tidings_core::{Frequency, NewsRecord, Observation, Stopwords, TidingsError, top_keywords};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn corpus() -> Vec<NewsRecord> {
    vec![
        NewsRecord::new(d(1), "Apple stock price target raised", "Lisa Levin"),
        NewsRecord::new(d(1), "Apple stock hits record", "Benzinga Newsdesk"),
        NewsRecord::new(d(2), "Tesla stock price falls", "Lisa Levin"),
        NewsRecord::new(d(4), "Earnings preview", "Zacks"),
        NewsRecord::new(
            d(4),
            "Stocks moving in Thursday's pre-market session, including Apple, Tesla, Microsoft and other large caps",
            "Lisa Levin",
        ),
    ]
}

#[test]
fn lengths_count_characters() {
    let records = [NewsRecord::new(d(1), "Café ☕", "x")];
    assert_eq!(headline_lengths(&records), vec![6]);
}

#[test]
fn length_summary_and_outliers() {
    let records = corpus();
    let summary = length_summary(&records).unwrap();
    assert_eq!(summary.count, 5);
    let outliers = length_outliers(&records, 1.5).unwrap();
    assert_eq!(outliers.len(), 1);
    assert!(outliers[0].headline.starts_with("Stocks moving"));
    assert!(matches!(length_summary(&[]), Err(TidingsError::EmptyInput { .. })));
}

#[test]
fn publishers_sorted_by_count_then_name() {
    let counts = articles_per_publisher(&corpus());
    let flat: Vec<(&str, usize)> = counts
        .iter()
        .map(|c| (c.publisher.as_str(), c.articles))
        .collect();
    assert_eq!(
        flat,
        vec![("Lisa Levin", 3), ("Benzinga Newsdesk", 1), ("Zacks", 1)]
    );
}

#[test]
fn publication_counts_fill_quiet_days() {
    let series = publication_counts(&corpus(), Frequency::Day).unwrap();
    let values: Vec<_> = series.iter().map(|b| b.value).collect();
    assert_eq!(values, vec![Some(2.0), Some(1.0), Some(0.0), Some(2.0)]);

    let peaks = publication_peaks(&corpus(), Frequency::Day, None, Some(2)).unwrap();
    assert_eq!(
        peaks,
        vec![Observation::new(d(1), 2.0), Observation::new(d(4), 2.0)]
    );
    let busy = publication_peaks(&corpus(), Frequency::Day, Some(1.0), None).unwrap();
    assert_eq!(busy.len(), 2);
}

#[test]
fn keywords_skip_stopwords_and_rank() {
    let stop = Stopwords::english();
    let top = top_keywords(&corpus(), &stop, (1, 2), 3).unwrap();
    let flat: Vec<(&str, usize)> = top.iter().map(|k| (k.ngram.as_str(), k.count)).collect();
    assert_eq!(flat, vec![("apple", 3), ("stock", 3), ("apple stock", 2)]);
}

#[test]
fn keyword_preprocessing() {
    let stop = Stopwords::english();
    assert_eq!(
        stop.preprocess("The Apple, Inc. deal: a 5% gain!"),
        vec!["apple", "inc", "deal", "gain"]
    );
    let mut custom = Stopwords::from_words(["apple"]);
    custom.insert("STOCK");
    assert!(custom.contains("Stock"));
    let top = top_keywords(&corpus(), &custom, (1, 1), 1).unwrap();
    assert_eq!(top[0].ngram, "price");
}

#[test]
fn keyword_range_is_validated() {
    let stop = Stopwords::english();
    assert!(matches!(
        top_keywords(&corpus(), &stop, (0, 2), 5),
        Err(TidingsError::InvalidArgument(_))
    ));
    assert!(matches!(
        top_keywords(&corpus(), &stop, (3, 2), 5),
        Err(TidingsError::InvalidArgument(_))
    ));
}
