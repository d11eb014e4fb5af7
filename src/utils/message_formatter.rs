/// Pure functions for countdown text formatting (terminal-agnostic)
use crate::models::CountdownSnapshot;
use crate::utils::string_utils::{group_thousands, pad_left, pluralize};

/// Shown while school is in session, or once the countdown is over
pub const LIVE_NOTE: &str = "Duration only includes time in school.";

/// Shown while the countdown is paused outside school hours
pub const PAUSED_NOTE: &str = "The timer only counts when school is in session.";

pub const CELEBRATION_BANNER: &str = "🎉🎊 School's out! 🎊🎉";

/// Figures of one rendered countdown frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownDisplay {
    pub days: String,
    pub day_label: &'static str,
    /// Total hours left, not the hours component of a clock
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub note: &'static str,
    pub celebrate: bool,
}

/// Whole seconds left, rounded up
pub fn total_seconds(remaining_ms: i64) -> i64 {
    (remaining_ms.max(0) + 999) / 1000
}

/// Pick the explanatory note under the countdown
pub fn note_for(in_session: bool, remaining_ms: i64) -> &'static str {
    if !in_session && remaining_ms > 0 {
        PAUSED_NOTE
    } else {
        LIVE_NOTE
    }
}

/// Derive the displayed figures from a snapshot
pub fn build_display(snapshot: &CountdownSnapshot) -> CountdownDisplay {
    let seconds = total_seconds(snapshot.remaining_ms);

    CountdownDisplay {
        days: snapshot.remaining_days.to_string(),
        day_label: pluralize(i64::from(snapshot.remaining_days), "day", "days"),
        hours: group_thousands(seconds / 3600),
        minutes: group_thousands(seconds / 60),
        seconds: group_thousands(seconds),
        note: note_for(snapshot.in_session, snapshot.remaining_ms),
        celebrate: snapshot.is_finished(),
    }
}

/// Render a frame as right-aligned lines
pub fn render_display(display: &CountdownDisplay) -> String {
    let rows = [
        (display.days.as_str(), display.day_label),
        (display.hours.as_str(), "hours"),
        (display.minutes.as_str(), "minutes"),
        (display.seconds.as_str(), "seconds"),
    ];
    let width = rows.iter().map(|(value, _)| value.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    if display.celebrate {
        lines.push(CELEBRATION_BANNER.to_string());
        lines.push(String::new());
    }
    lines.extend(
        rows.iter()
            .map(|(value, label)| format!("{} {}", pad_left(value, width, ' '), label)),
    );
    lines.push(String::new());
    lines.push(display.note.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timezone::parse_instant;

    fn snapshot(in_session: bool, remaining_ms: i64, remaining_days: u32) -> CountdownSnapshot {
        CountdownSnapshot {
            at: parse_instant("2023-05-26T16:00:00-07:00", &chrono_tz::America::Los_Angeles).unwrap(),
            in_session,
            remaining_ms,
            remaining_days,
        }
    }

    #[test]
    fn test_total_seconds() {
        assert_eq!(total_seconds(0), 0);
        assert_eq!(total_seconds(1_000), 1);
        assert_eq!(total_seconds(1_001), 2);
        assert_eq!(total_seconds(-5_000), 0);
    }

    #[test]
    fn test_note_for() {
        assert_eq!(note_for(false, 1_000), PAUSED_NOTE);
        assert_eq!(note_for(true, 1_000), LIVE_NOTE);
        assert_eq!(note_for(false, 0), LIVE_NOTE);
    }

    #[test]
    fn test_build_display_uses_totals() {
        let display = build_display(&snapshot(false, 60_300_000, 5));

        assert_eq!(display.days, "5");
        assert_eq!(display.day_label, "days");
        assert_eq!(display.hours, "16");
        assert_eq!(display.minutes, "1,005");
        assert_eq!(display.seconds, "60,300");
        assert_eq!(display.note, PAUSED_NOTE);
        assert!(!display.celebrate);
    }

    #[test]
    fn test_build_display_single_day() {
        let display = build_display(&snapshot(true, 14_400_000, 1));
        assert_eq!(display.day_label, "day");
        assert_eq!(display.note, LIVE_NOTE);
    }

    #[test]
    fn test_build_display_finished() {
        let display = build_display(&snapshot(false, 0, 0));
        assert!(display.celebrate);
        assert_eq!(display.seconds, "0");
        assert_eq!(display.note, LIVE_NOTE);
    }

    #[test]
    fn test_render_display() {
        let rendered = render_display(&build_display(&snapshot(false, 60_300_000, 5)));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "     5 days");
        assert_eq!(lines[1], "    16 hours");
        assert_eq!(lines[2], " 1,005 minutes");
        assert_eq!(lines[3], "60,300 seconds");
        assert_eq!(lines[5], PAUSED_NOTE);
        assert!(!rendered.contains(CELEBRATION_BANNER));
    }

    #[test]
    fn test_render_display_celebrates() {
        let rendered = render_display(&build_display(&snapshot(false, 0, 0)));
        assert!(rendered.starts_with(CELEBRATION_BANNER));
    }
}
