/// Pure calendar date utility functions (timezone-agnostic)
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Check if a date falls on Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Check if a date falls on a Monday
pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// Date `offset` days after `anchor`, or None past the representable range
pub fn date_at_offset(anchor: NaiveDate, offset: u64) -> Option<NaiveDate> {
    anchor.checked_add_days(Days::new(offset))
}

/// Number of whole days from `from` to `to`, zero when `to` is earlier
pub fn days_until(from: NaiveDate, to: NaiveDate) -> u64 {
    u64::try_from((to - from).num_days()).unwrap_or(0)
}

/// Floor a millisecond count to whole seconds
pub fn floor_to_second(millis: i64) -> i64 {
    millis - millis.rem_euclid(1000)
}
