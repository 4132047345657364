use chrono::NaiveDate;
use tidings_types::{DateRange, NewsQuery, NewsRecord, TidingsError};

#[test]
fn error_roundtrip_and_display() {
    let err = TidingsError::data_source("csv", "missing column 'headline'");
    assert_eq!(err.to_string(), "csv failed: missing column 'headline'");

    let json = serde_json::to_string(&err).expect("serialize error");
    let de: TidingsError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(de, err);

    let err = TidingsError::insufficient(2, 1);
    let de: TidingsError =
        serde_json::from_str(&serde_json::to_string(&err).unwrap()).unwrap();
    assert_eq!(de, TidingsError::InsufficientData { needed: 2, got: 1 });
}

#[test]
fn only_caller_misuse_is_unrecoverable() {
    assert!(!TidingsError::invalid_arg("bad").is_recoverable());
    assert!(TidingsError::invalid_input("bad").is_recoverable());
    assert!(TidingsError::empty("describe").is_recoverable());
    assert!(TidingsError::insufficient(2, 0).is_recoverable());
    assert!(TidingsError::undefined_correlation("flat").is_recoverable());
    assert!(TidingsError::data_source("mock", "down").is_recoverable());
}

#[test]
fn date_range_validates_order() {
    let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let b = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    assert!(DateRange::new(a, b).is_ok());
    assert!(matches!(
        DateRange::new(b, a),
        Err(TidingsError::InvalidArgument(_))
    ));
}

#[test]
fn query_matching() {
    let jan = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    )
    .unwrap();
    let tagged = NewsRecord::new(jan.end(), "x", "p").with_ticker("AAPL");
    let untagged = NewsRecord::new(jan.start(), "y", "p");
    let feb = NewsRecord::new(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), "z", "p");

    let q = NewsQuery::for_ticker("aapl").within(jan);
    assert!(q.matches(&tagged));
    assert!(q.matches(&untagged));
    assert!(!q.matches(&feb));
    assert!(!NewsQuery::for_ticker("MSFT").matches(&tagged));
    assert!(NewsQuery::all().matches(&feb));
}
