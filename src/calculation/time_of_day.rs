//! Time-of-day parsing.
//!
//! Converts the loosely-typed [`TimeInput`] into minutes since midnight.

use chrono::{DateTime, NaiveTime, Timelike};

use crate::models::TimeInput;

/// Accepted clock formats, tried in order.
const CLOCK_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Returns the number of minutes since midnight (0 to 1439) for a time input.
///
/// Text is read as `"HH:MM"`, `"HH:MM:SS"` (seconds ignored) or an RFC 3339
/// timestamp, whose wall-clock hour and minute are used. Date-time values
/// contribute their hour and minute. Returns `None` when the text cannot be
/// read; callers decide whether that is an error.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::minutes_since_midnight;
/// use wage_engine::models::TimeInput;
///
/// assert_eq!(minutes_since_midnight(&TimeInput::from("22:30")), Some(1350));
/// assert_eq!(minutes_since_midnight(&TimeInput::from("2026-01-15T09:15:00+10:00")), Some(555));
/// assert_eq!(minutes_since_midnight(&TimeInput::from("soon")), None);
/// ```
pub fn minutes_since_midnight(input: &TimeInput) -> Option<u32> {
    match input {
        TimeInput::DateTime(dt) => Some(clock_minutes(dt.time())),
        TimeInput::Text(text) => parse_clock_text(text).map(clock_minutes),
    }
}

fn clock_minutes(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn parse_clock_text(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    CLOCK_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.time()))
}
