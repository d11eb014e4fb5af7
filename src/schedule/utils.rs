use chrono::{DateTime, TimeZone};
use std::time::Duration;

/// Time to wait from `now` until the schedule's next fire time, None if it never fires again
pub fn next_tick_delay<Z: TimeZone>(schedule: &cron::Schedule, now: &DateTime<Z>) -> Option<Duration> {
    let next_time = schedule.after(now).next()?;
    (next_time - now.clone()).to_std().ok()
}
