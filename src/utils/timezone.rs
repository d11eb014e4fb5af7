use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Error types for parsing calendar constants and localising times
#[derive(Debug)]
pub enum TimezoneError {
    InvalidTimezone(String),
    InvalidTime(String),
    InvalidDate(String),
    InvalidInstant(String),
    TimeDoesNotExist { date: NaiveDate, time: NaiveTime },
}

impl std::fmt::Display for TimezoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimezoneError::InvalidTimezone(tz) => write!(f, "Invalid timezone: {}", tz),
            TimezoneError::InvalidTime(msg) => write!(f, "Invalid time format: {}", msg),
            TimezoneError::InvalidDate(msg) => write!(f, "Invalid date format: {}", msg),
            TimezoneError::InvalidInstant(msg) => write!(f, "Invalid timestamp: {}", msg),
            TimezoneError::TimeDoesNotExist { date, time } => write!(
                f,
                "{} {} doesn't exist in this timezone (DST transition)",
                date, time
            ),
        }
    }
}

impl std::error::Error for TimezoneError {}

/// Parse a timezone string
pub fn parse_timezone(tz_str: &str) -> Result<Tz, TimezoneError> {
    tz_str.parse().map_err(|_| TimezoneError::InvalidTimezone(tz_str.to_string()))
}

/// Parse a time string in H:MM or HH:MM format
pub fn parse_time_string(time_str: &str) -> Result<NaiveTime, TimezoneError> {
    NaiveTime::parse_from_str(time_str, "%H:%M")
        .map_err(|_| TimezoneError::InvalidTime(format!("Expected HH:MM format, got '{}'", time_str)))
}

/// Parse a short US date key such as "6/2/2023"
pub fn parse_date_key(key: &str) -> Result<NaiveDate, TimezoneError> {
    NaiveDate::parse_from_str(key, "%m/%d/%Y")
        .map_err(|_| TimezoneError::InvalidDate(format!("Expected M/D/YYYY format, got '{}'", key)))
}

/// Parse an RFC 3339 timestamp and view it in the given timezone
pub fn parse_instant(instant_str: &str, timezone: &Tz) -> Result<DateTime<Tz>, TimezoneError> {
    DateTime::parse_from_rfc3339(instant_str)
        .map(|dt| dt.with_timezone(timezone))
        .map_err(|e| TimezoneError::InvalidInstant(format!("'{}': {}", instant_str, e)))
}

/// Attach a wall-clock time on a date to a timezone
pub fn localize(date: NaiveDate, time: NaiveTime, timezone: &Tz) -> Result<DateTime<Tz>, TimezoneError> {
    // Handle potential DST ambiguity
    match timezone.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(dt1, _dt2) => Ok(dt1), // Use earliest during DST transition
        LocalResult::None => Err(TimezoneError::TimeDoesNotExist { date, time }),
    }
}

/// First existing instant of a calendar date
///
/// Midnight is skipped in zones that spring forward at 00:00; the first
/// whole hour that exists is used instead.
pub fn start_of_day(date: NaiveDate, timezone: &Tz) -> Result<DateTime<Tz>, TimezoneError> {
    (0..3)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .find_map(|time| localize(date, time, timezone).ok())
        .ok_or(TimezoneError::TimeDoesNotExist { date, time: NaiveTime::MIN })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_time_string() {
        assert!(parse_time_string("08:30").is_ok());
        assert!(parse_time_string("12:55").is_ok());
        assert!(parse_time_string("invalid").is_err());
        assert!(parse_time_string("12:xx").is_err());
    }

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("UTC").is_ok());
        assert!(parse_timezone("America/Los_Angeles").is_ok());
        assert!(parse_timezone("Invalid/Timezone").is_err());
    }

    #[test]
    fn test_parse_date_key() {
        assert_eq!(
            parse_date_key("6/2/2023").unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 2).unwrap()
        );
        assert_eq!(
            parse_date_key("5/30/2023").unwrap(),
            NaiveDate::from_ymd_opt(2023, 5, 30).unwrap()
        );
        assert!(parse_date_key("2023-06-02").is_err());
        assert!(parse_date_key("13/1/2023").is_err());
    }

    #[test]
    fn test_parse_instant_keeps_wall_clock_in_zone() {
        let tz = parse_timezone("America/Los_Angeles").unwrap();
        let end = parse_instant("2023-06-02T12:30:00-07:00", &tz).unwrap();
        assert_eq!(end.hour(), 12);
        assert_eq!(end.minute(), 30);
        assert!(parse_instant("not a date", &tz).is_err());
    }

    #[test]
    fn test_localize_dst_gap() {
        let tz = parse_timezone("America/Los_Angeles").unwrap();
        // Clocks jump from 02:00 to 03:00 on 2023-03-12
        let date = NaiveDate::from_ymd_opt(2023, 3, 12).unwrap();
        let gap = NaiveTime::from_hms_opt(2, 30, 0).unwrap();
        assert!(matches!(
            localize(date, gap, &tz),
            Err(TimezoneError::TimeDoesNotExist { .. })
        ));
        assert!(localize(date, NaiveTime::from_hms_opt(8, 30, 0).unwrap(), &tz).is_ok());
    }

    #[test]
    fn test_start_of_day() {
        let tz = parse_timezone("America/Los_Angeles").unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let midnight = start_of_day(date, &tz).unwrap();
        assert_eq!(midnight.date_naive(), date);
        assert_eq!(midnight.hour(), 0);
    }
}
