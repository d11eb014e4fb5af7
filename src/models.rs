use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use std::collections::{BTreeSet, HashMap};

use crate::constants::{
    CUSTOM_END_TIMES, DEFAULT_END_TIME, DEFAULT_START_TIME, END_DATE, EXCLUDED_DATES,
    MONDAY_START_TIME,
};
use crate::utils::timezone::{parse_date_key, parse_instant, parse_time_string, TimezoneError};

/// The fixed school calendar the countdown is computed against
#[derive(Clone, Debug)]
pub struct CalendarConfig {
    /// Zone in which dates, weekdays and session times are read
    pub timezone: Tz,
    /// Last instant of the countdown
    pub end: DateTime<Tz>,
    /// Non-school days regardless of weekday
    pub excluded_dates: BTreeSet<NaiveDate>,
    /// Per-date overrides of the session end time
    pub custom_end_times: HashMap<NaiveDate, NaiveTime>,
    pub monday_start: NaiveTime,
    pub default_start: NaiveTime,
    pub default_end: NaiveTime,
}

impl CalendarConfig {
    /// Create a calendar with the standard daily session times and no overrides
    pub fn new(timezone: Tz, end: DateTime<Tz>) -> Result<Self, TimezoneError> {
        Ok(Self {
            timezone,
            end: end.with_timezone(&timezone),
            excluded_dates: BTreeSet::new(),
            custom_end_times: HashMap::new(),
            monday_start: parse_time_string(MONDAY_START_TIME)?,
            default_start: parse_time_string(DEFAULT_START_TIME)?,
            default_end: parse_time_string(DEFAULT_END_TIME)?,
        })
    }

    /// Mark a date as a day off
    pub fn with_excluded_date(mut self, date: NaiveDate) -> Self {
        self.excluded_dates.insert(date);
        self
    }

    /// Override the session end time on a date
    pub fn with_custom_end_time(mut self, date: NaiveDate, end: NaiveTime) -> Self {
        self.custom_end_times.insert(date, end);
        self
    }

    /// Build the school-year calendar from the hard-coded constant table
    pub fn from_constants(timezone: Tz) -> Result<Self, TimezoneError> {
        let end = parse_instant(END_DATE, &timezone)?;
        let mut config = Self::new(timezone, end)?;

        for excluded in EXCLUDED_DATES {
            let date = parse_instant(excluded, &timezone)?.date_naive();
            config = config.with_excluded_date(date);
        }

        for (key, time) in CUSTOM_END_TIMES {
            config = config.with_custom_end_time(parse_date_key(key)?, parse_time_string(time)?);
        }

        tracing::debug!(
            "Calendar ends at {} with {} excluded date(s) and {} custom end time(s)",
            config.end,
            config.excluded_dates.len(),
            config.custom_end_times.len()
        );

        Ok(config)
    }
}

/// Everything the display needs for one tick, computed for a single instant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountdownSnapshot {
    pub at: DateTime<Tz>,
    pub in_session: bool,
    /// In-session milliseconds left, floored to whole seconds
    pub remaining_ms: i64,
    /// School days left that are not currently in session
    pub remaining_days: u32,
}

impl CountdownSnapshot {
    /// The countdown has reached zero
    pub fn is_finished(&self) -> bool {
        self.remaining_ms <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_from_constants() {
        let config = CalendarConfig::from_constants(chrono_tz::America::Los_Angeles).unwrap();

        assert_eq!(config.end.date_naive(), NaiveDate::from_ymd_opt(2023, 6, 2).unwrap());
        assert_eq!((config.end.hour(), config.end.minute()), (12, 30));

        assert!(config.excluded_dates.contains(&NaiveDate::from_ymd_opt(2023, 5, 15).unwrap()));
        assert!(config.excluded_dates.contains(&NaiveDate::from_ymd_opt(2023, 5, 29).unwrap()));
        assert_eq!(config.excluded_dates.len(), 2);

        assert_eq!(
            config.custom_end_times.get(&NaiveDate::from_ymd_opt(2023, 5, 30).unwrap()),
            Some(&NaiveTime::from_hms_opt(12, 55, 0).unwrap())
        );
        assert_eq!(config.custom_end_times.len(), 4);
    }

    #[test]
    fn test_standard_session_times() {
        let config = CalendarConfig::from_constants(chrono_tz::UTC).unwrap();
        assert_eq!(config.monday_start, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(config.default_start, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(config.default_end, NaiveTime::from_hms_opt(15, 33, 0).unwrap());
    }

    #[test]
    fn test_snapshot_is_finished() {
        let at = parse_instant("2023-06-02T12:30:00-07:00", &chrono_tz::UTC).unwrap();
        let mut snapshot = CountdownSnapshot {
            at,
            in_session: false,
            remaining_ms: 0,
            remaining_days: 0,
        };
        assert!(snapshot.is_finished());

        snapshot.remaining_ms = 1_000;
        assert!(!snapshot.is_finished());
    }
}
