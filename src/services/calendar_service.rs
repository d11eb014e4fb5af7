/// School calendar service - the time arithmetic behind the countdown
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::models::{CalendarConfig, CountdownSnapshot};
use crate::utils::datetime::{date_at_offset, days_until, floor_to_second, is_monday, is_weekend};
use crate::utils::timezone::{localize, start_of_day};

/// The span of a school day during which time counts down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl SessionWindow {
    /// Both endpoints are inside the window
    pub fn contains(&self, instant: DateTime<Tz>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Answers school-day, in-session and remaining-time queries for one calendar
#[derive(Debug, Clone)]
pub struct SchoolCalendar {
    config: CalendarConfig,
}

impl SchoolCalendar {
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Current time viewed in the calendar's zone
    pub fn now(&self) -> DateTime<Tz> {
        chrono::Utc::now().with_timezone(&self.config.timezone)
    }

    /// Weekday that is not a day off; ignores the end date
    fn is_school_date(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.config.excluded_dates.contains(&date)
    }

    /// True iff the instant is before the end, on a weekday, and not on an excluded date
    pub fn is_school_day(&self, instant: DateTime<Tz>) -> bool {
        let local = instant.with_timezone(&self.config.timezone);
        local < self.config.end && self.is_school_date(local.date_naive())
    }

    /// Session window of a date, ignoring whether the date is a school day
    ///
    /// Starts at the Monday start time on Mondays and the default start
    /// otherwise; ends at the date's custom end time when one is configured.
    /// Returns None when either endpoint does not exist on that date in the
    /// calendar zone.
    pub fn session_window(&self, date: NaiveDate) -> Option<SessionWindow> {
        let tz = &self.config.timezone;
        let start_time = if is_monday(date) {
            self.config.monday_start
        } else {
            self.config.default_start
        };
        let end_time = self
            .config
            .custom_end_times
            .get(&date)
            .copied()
            .unwrap_or(self.config.default_end);

        match (localize(date, start_time, tz), localize(date, end_time, tz)) {
            (Ok(start), Ok(end)) => Some(SessionWindow { start, end }),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("No session window on {}: {}", date, e);
                None
            }
        }
    }

    /// True iff the instant is on a school day and inside that day's session window
    pub fn is_in_session(&self, instant: DateTime<Tz>) -> bool {
        let local = instant.with_timezone(&self.config.timezone);
        self.is_school_day(local)
            && self
                .session_window(local.date_naive())
                .is_some_and(|window| window.contains(local))
    }

    /// One instant per calendar day from `now` up to the end
    ///
    /// The first probe is `now` itself; every later probe is the start of its
    /// day, which always precedes that day's session.
    fn probes(&self, now: DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> + '_ {
        let tz = self.config.timezone;
        let now = now.with_timezone(&tz);
        let anchor = now.date_naive();
        let span = days_until(anchor, self.config.end.date_naive());

        (0..=span)
            .filter_map(move |offset| match offset {
                0 => Some(now),
                _ => date_at_offset(anchor, offset).and_then(|date| start_of_day(date, &tz).ok()),
            })
            .take_while(move |probe| *probe < self.config.end)
    }

    /// In-session milliseconds left between `now` and the end, floored to whole seconds
    pub fn remaining_duration(&self, now: DateTime<Tz>) -> i64 {
        let total: i64 = self
            .probes(now)
            .filter(|probe| self.is_school_day(*probe))
            .filter_map(|probe| {
                let window = self.session_window(probe.date_naive())?;
                // Time after the end never counts, even mid-session
                let until = window.end.min(self.config.end);
                let from = probe.max(window.start);
                Some((until - from).num_milliseconds().max(0))
            })
            .sum();

        floor_to_second(total)
    }

    /// School days left whose probe instant is not in session
    ///
    /// A school day in progress at `now` is not counted.
    pub fn remaining_days(&self, now: DateTime<Tz>) -> u32 {
        let days = self
            .probes(now)
            .filter(|probe| self.is_school_day(*probe) && !self.is_in_session(*probe))
            .count();

        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Evaluate all three countdown queries for the same instant
    pub fn snapshot(&self, now: DateTime<Tz>) -> CountdownSnapshot {
        let at = now.with_timezone(&self.config.timezone);
        CountdownSnapshot {
            at,
            in_session: self.is_in_session(at),
            remaining_ms: self.remaining_duration(at),
            remaining_days: self.remaining_days(at),
        }
    }
}
