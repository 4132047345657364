use chrono::{Datelike, Days, Months, NaiveDate};

use crate::{Frequency, TidingsError};

/// Start of the calendar bucket containing `date`.
///
/// Weeks start on Monday; months on the 1st.
///
/// # Errors
/// Returns `InvalidInput` when the bucket would start before the supported date range.
pub fn bucket_start(date: NaiveDate, freq: Frequency) -> Result<NaiveDate, TidingsError> {
    let start = match freq {
        Frequency::Week => {
            let back = u64::from(date.weekday().num_days_from_monday());
            date.checked_sub_days(Days::new(back))
        }
        Frequency::Month => date.with_day(1),
        _ => Some(date),
    };
    start.ok_or_else(|| TidingsError::invalid_input(format!("no {freq:?} bucket holds {date}")))
}

/// Start of the bucket following the one that starts at `start`.
///
/// # Errors
/// Returns `InvalidInput` when the next bucket lies past the supported date range.
pub fn next_bucket_start(start: NaiveDate, freq: Frequency) -> Result<NaiveDate, TidingsError> {
    let next = match freq {
        Frequency::Week => start.checked_add_days(Days::new(7)),
        Frequency::Month => start.checked_add_months(Months::new(1)),
        _ => start.succ_opt(),
    };
    next.ok_or_else(|| {
        TidingsError::invalid_input(format!("no {freq:?} bucket after {start}"))
    })
}
