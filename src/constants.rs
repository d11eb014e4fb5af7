/// Last instant of the countdown
pub const END_DATE: &str = "2023-06-02T12:30:00-07:00";

/// Days off; only the calendar date (in the calendar time zone) matters
pub const EXCLUDED_DATES: &[&str] = &["2023-05-15T12:00:00-07:00", "2023-05-29T12:00:00-07:00"];

/// Early dismissal days as (M/D/YYYY, H:MM)
pub const CUSTOM_END_TIMES: &[(&str, &str)] = &[
    ("5/30/2023", "12:55"),
    ("5/31/2023", "12:40"),
    ("6/1/2023", "12:40"),
    ("6/2/2023", "12:30"),
];

/// Session start on Mondays (late start)
pub const MONDAY_START_TIME: &str = "10:00";

/// Session start Tuesday through Friday
pub const DEFAULT_START_TIME: &str = "08:30";

/// Session end unless overridden in `CUSTOM_END_TIMES`
pub const DEFAULT_END_TIME: &str = "15:33";

/// Time zone the calendar is expressed in
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// Refresh once per second
pub const DEFAULT_TICK_CRON: &str = "* * * * * *";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "school_countdown=info";
