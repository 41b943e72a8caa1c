//! Shift input model and the loosely-typed values it carries.
//!
//! Shift rows arrive from storage or from a client form, so times and
//! numbers are kept in the shape they were supplied in. Interpreting them
//! is the job of the calculation module, which decides per input mode
//! whether a malformed value is coerced or rejected.

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A time of day as supplied by the caller.
///
/// Either free text (`"HH:MM"`, `"HH:MM:SS"` or an RFC 3339 timestamp) or a
/// date-time value whose hour and minute are used.
///
/// # Example
///
/// ```
/// use wage_engine::models::TimeInput;
///
/// let start: TimeInput = serde_json::from_str(r#""22:00""#).unwrap();
/// assert_eq!(start, TimeInput::Text("22:00".to_string()));
///
/// let stamped: TimeInput = serde_json::from_str(r#""2026-01-15T09:30:00""#).unwrap();
/// assert!(matches!(stamped, TimeInput::DateTime(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeInput {
    /// A date-time value; only its hour and minute matter.
    DateTime(NaiveDateTime),
    /// Text to be parsed as a time of day.
    Text(String),
}

impl From<&str> for TimeInput {
    fn from(value: &str) -> Self {
        TimeInput::Text(value.to_string())
    }
}

impl From<NaiveDateTime> for TimeInput {
    fn from(value: NaiveDateTime) -> Self {
        TimeInput::DateTime(value)
    }
}

impl From<NaiveTime> for TimeInput {
    fn from(value: NaiveTime) -> Self {
        TimeInput::Text(value.format("%H:%M").to_string())
    }
}

impl std::fmt::Display for TimeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeInput::DateTime(dt) => write!(f, "{}", dt),
            TimeInput::Text(text) => write!(f, "{}", text),
        }
    }
}

/// A numeric field as supplied by the caller.
///
/// Numbers and numeric strings deserialize as [`NumericInput::Number`];
/// other strings are kept as [`NumericInput::Text`] and any other JSON value
/// as [`NumericInput::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// A decimal number.
    Number(Decimal),
    /// Text that did not parse as a number.
    Text(String),
    /// Any other JSON value (booleans, arrays, objects).
    Other(serde_json::Value),
}

impl From<Decimal> for NumericInput {
    fn from(value: Decimal) -> Self {
        NumericInput::Number(value)
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        NumericInput::Number(Decimal::from(value))
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl std::fmt::Display for NumericInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericInput::Number(n) => write!(f, "{}", n),
            NumericInput::Text(text) => write!(f, "{}", text),
            NumericInput::Other(value) => write!(f, "{}", value),
        }
    }
}

/// The inputs to a single shift calculation.
///
/// The wage is a snapshot taken when the shift was created; it is never
/// refreshed from the organization's current rates.
///
/// # Example
///
/// ```
/// use wage_engine::models::ShiftInput;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInput::new("10:00", "16:00", 30, Decimal::from(200));
/// assert_eq!(shift.start_time.to_string(), "10:00");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftInput {
    /// When the shift started.
    pub start_time: TimeInput,
    /// When the shift ended; may be earlier than the start for night shifts.
    pub end_time: TimeInput,
    /// Manually logged unpaid break, in minutes.
    #[serde(default)]
    pub break_minutes: Option<NumericInput>,
    /// Hourly wage captured at shift creation time.
    #[serde(default)]
    pub hourly_wage_snapshot: Option<NumericInput>,
}

impl ShiftInput {
    /// Builds a well-formed shift from clock times, break minutes and wage.
    pub fn new(
        start_time: impl Into<TimeInput>,
        end_time: impl Into<TimeInput>,
        break_minutes: u32,
        hourly_wage_snapshot: Decimal,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            break_minutes: Some(break_minutes.into()),
            hourly_wage_snapshot: Some(hourly_wage_snapshot.into()),
        }
    }
}
