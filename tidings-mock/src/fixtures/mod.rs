pub mod news;
pub mod prices;

use chrono::NaiveDate;

/// Fixture dates all fall in August 2023.
pub fn aug(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 8, day).expect("valid fixture date")
}
