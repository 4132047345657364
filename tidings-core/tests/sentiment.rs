use chrono::NaiveDate;
use proptest::prelude::*;
use tidings_core::{
    Category, Lexicon, LexiconScorer, NewsRecord, PolarityScorer, SentimentScorer, TidingsError,
    categorize, category_breakdown,
};

fn rec(headline: &str) -> NewsRecord {
    NewsRecord::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        headline,
        "Benzinga",
    )
}

proptest! {
    #[test]
    fn categorize_is_monotonic(a in -2.0f64..2.0, b in -2.0f64..2.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(categorize(lo) <= categorize(hi));
    }

    #[test]
    fn polarity_is_bounded(text in "[a-zA-Z ']{1,80}") {
        prop_assume!(!text.trim().is_empty());
        let scorer = SentimentScorer::new(LexiconScorer::default());
        let p = scorer.score(&text).unwrap();
        prop_assert!((-1.0..=1.0).contains(&p));
    }
}

#[test]
fn records_are_scored_and_counted() {
    let scorer = SentimentScorer::new(LexiconScorer::default());
    let scored = scorer
        .score_records(&[
            rec("great results"),
            rec("bad news"),
            rec("Stocks That Hit 52-Week Highs On Friday"),
        ])
        .unwrap();
    assert_eq!(scored[0].category, Category::Positive);
    assert_eq!(scored[1].category, Category::Negative);
    assert_eq!(scored[2].category, Category::Neutral);

    let breakdown = category_breakdown(&scored);
    assert_eq!(breakdown.total(), 3);
    assert_eq!(breakdown.get(Category::Positive), 1);
}

#[test]
fn blank_headline_names_the_record() {
    let scorer = SentimentScorer::new(LexiconScorer::default());
    let err = scorer.score_records(&[rec("fine"), rec("   ")]).unwrap_err();
    match err {
        TidingsError::InvalidInput(msg) => assert!(msg.contains("Benzinga")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn custom_lexicon_is_injected() {
    let lexicon = Lexicon::empty().with_word("moon", 2.0).with_negator("hardly");
    assert_eq!(lexicon.score_of("MOON"), Some(1.0));
    let scorer = LexiconScorer::new(lexicon);
    assert_eq!(scorer.polarity("to the moon").unwrap(), 1.0);
    assert_eq!(scorer.polarity("hardly moon").unwrap(), -0.5);
    assert_eq!(scorer.polarity("great results").unwrap(), 0.0);
}
