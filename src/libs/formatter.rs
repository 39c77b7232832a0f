//! Time and duration formatting for the CSV output.
//!
//! All values use the "HH:MM" shape. Clock times truncate to the minute.
//! Durations are computed after flooring both endpoints to the start of
//! their minute, so seconds never round a span up, and the hour field is
//! allowed to exceed 24 for spans longer than a day.

use chrono::{DateTime, Duration, FixedOffset, Timelike};

/// Formats a clock time as zero-padded "HH:MM", discarding seconds.
///
/// The timestamp's own offset is kept; no timezone conversion happens here.
pub fn format_time(ts: &DateTime<FixedOffset>) -> String {
    format!("{:02}:{:02}", ts.hour(), ts.minute())
}

/// Span between two timestamps with both endpoints floored to the minute.
///
/// Flooring before subtracting matches how the summary is read: an entry
/// running 09:00:15 to 17:30:45 counts as 08:30, not 08:31.
pub fn minute_floored_span(start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> Duration {
    let floored_start = start.timestamp().div_euclid(60) * 60;
    let floored_end = end.timestamp().div_euclid(60) * 60;
    Duration::seconds(floored_end - floored_start)
}

/// Formats a duration as zero-padded "HH:MM".
///
/// Hours are not wrapped at 24, so a 25.5 hour span renders as "25:30".
/// Negative durations clamp to "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}
