//! Shift duration computation.
//!
//! Shifts are recorded as two times of day without dates, so an end time at
//! or before the start time means the shift ran past midnight.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// The result of computing a shift's duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationResult {
    /// Duration in hours, unrounded.
    pub hours: Decimal,
    /// Whether a day was added because the end was not after the start.
    pub crosses_midnight: bool,
    /// The audit step recording this computation.
    pub audit_step: AuditStep,
}

/// Computes the length of a shift in hours from two clock positions.
///
/// # Arguments
///
/// * `start_minutes` - Minutes since midnight at shift start
/// * `end_minutes` - Minutes since midnight at shift end
/// * `step_number` - The step number for audit trail sequencing
///
/// # Behavior
///
/// - If the end is before the start, one day is added (night shift).
/// - If the end equals the start, one day is also added, so a zero-length
///   span reads as a 24-hour shift.
/// - The result is floored at zero.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::compute_duration_hours;
/// use rust_decimal::Decimal;
///
/// // 22:00 to 02:00
/// let result = compute_duration_hours(22 * 60, 2 * 60, 1);
/// assert_eq!(result.hours, Decimal::from(4));
/// assert!(result.crosses_midnight);
/// ```
pub fn compute_duration_hours(
    start_minutes: u32,
    end_minutes: u32,
    step_number: u32,
) -> DurationResult {
    // The zero-length case is folded into the midnight wrap. Whether a
    // same-time shift should mean 24h or 0h is an open product question.
    let crosses_midnight = end_minutes <= start_minutes;
    let effective_end = if crosses_midnight {
        end_minutes + MINUTES_PER_DAY
    } else {
        end_minutes
    };

    let span_minutes = i64::from(effective_end) - i64::from(start_minutes);
    let hours = (Decimal::from(span_minutes) / Decimal::from(60)).max(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: "shift_duration".to_string(),
        rule_name: "Shift Duration".to_string(),
        input: serde_json::json!({
            "start_minutes": start_minutes,
            "end_minutes": end_minutes
        }),
        output: serde_json::json!({
            "span_minutes": span_minutes,
            "duration_hours": hours.normalize().to_string(),
            "crosses_midnight": crosses_midnight
        }),
        reasoning: if crosses_midnight {
            format!(
                "End ({}) is not after start ({}); added {} minutes for the next day: {} hours",
                end_minutes,
                start_minutes,
                MINUTES_PER_DAY,
                hours.normalize()
            )
        } else {
            format!(
                "{} minutes from {} to {}: {} hours",
                span_minutes,
                start_minutes,
                end_minutes,
                hours.normalize()
            )
        },
    };

    DurationResult {
        hours,
        crosses_midnight,
        audit_step,
    }
}
