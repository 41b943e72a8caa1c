//! Gross wage derivation for a single shift.
//!
//! Ties together duration, manual break, break policy and the hourly wage
//! snapshot into a [`CalculationResult`].

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, OrgSettings, ShiftInput,
};

use super::break_policy::apply_break_policy_audited;
use super::duration::compute_duration_hours;
use super::input::InputResolver;
use super::rounding::round_half_up;

/// Calculates paid hours and gross pay for one shift.
///
/// The steps are:
/// 1. Read start and end as minutes since midnight and compute the duration,
///    wrapping past midnight when the end is not after the start
/// 2. Pick the organization's break policy, or `config.default_break_policy`
///    when the organization or its policy field is absent
/// 3. `paid = max(0, duration - break_minutes / 60 - policy deduction)`
/// 4. `gross = paid x hourly wage snapshot`, using unrounded paid hours
/// 5. Round duration, break, deduction, paid hours and gross to 2dp
///
/// A shift whose start and end match is read as 24 hours and carries a
/// `ZERO_LENGTH_SHIFT` warning in either input mode.
///
/// Inputs are never modified.
///
/// # Errors
///
/// In [`InputMode::Lenient`](crate::config::InputMode::Lenient) this never
/// fails: malformed values are replaced by neutral defaults and listed in
/// `audit_trace.warnings`. In strict mode the first malformed value is
/// returned as an [`EngineError`](crate::error::EngineError).
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::calc_employee_shift;
/// use wage_engine::config::CalculatorConfig;
/// use wage_engine::models::{BreakPolicy, OrgSettings, ShiftInput};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInput::new("10:00", "16:00", 30, Decimal::from(200));
/// let org = OrgSettings::with_policy(BreakPolicy::None);
///
/// let result = calc_employee_shift(&shift, Some(&org), &CalculatorConfig::default()).unwrap();
/// assert_eq!(result.duration_hours, Decimal::from(6));
/// assert_eq!(result.paid_hours, Decimal::new(55, 1));
/// assert_eq!(result.gross, Decimal::from(1100));
/// ```
pub fn calc_employee_shift(
    shift: &ShiftInput,
    org: Option<&OrgSettings>,
    config: &CalculatorConfig,
) -> EngineResult<CalculationResult> {
    let mut resolver = InputResolver::new(config.input_mode);
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    // Step 1: Resolve inputs
    let start_minutes = resolver.time(&shift.start_time, "start_time")?;
    let end_minutes = resolver.time(&shift.end_time, "end_time")?;
    let break_minutes = resolver.break_minutes(shift.break_minutes.as_ref())?;
    let hourly_wage = resolver.wage(shift.hourly_wage_snapshot.as_ref())?;
    let policy = resolver.policy(org, config.default_break_policy)?;

    // Step 2: Duration
    let duration = compute_duration_hours(start_minutes, end_minutes, step_number);
    steps.push(duration.audit_step);
    step_number += 1;
    let duration_hours = duration.hours;

    // Step 3: Policy deduction
    let policy_result =
        apply_break_policy_audited(duration_hours, break_minutes, policy, step_number);
    steps.push(policy_result.audit_step);
    step_number += 1;
    let policy_deduction_hours = policy_result.deduction_hours;

    // Step 4: Paid hours, clamped at zero
    let manual_break_hours = break_minutes / Decimal::from(60);
    // A break too large to subtract leaves nothing to pay
    let unclamped = duration_hours
        .checked_sub(manual_break_hours)
        .and_then(|hours| hours.checked_sub(policy_deduction_hours))
        .unwrap_or(Decimal::MIN);
    let paid_hours = unclamped.max(Decimal::ZERO);

    steps.push(AuditStep {
        step_number,
        rule_id: "paid_hours".to_string(),
        rule_name: "Paid Hours".to_string(),
        input: serde_json::json!({
            "duration_hours": duration_hours.normalize().to_string(),
            "manual_break_hours": manual_break_hours.normalize().to_string(),
            "policy_deduction_hours": policy_deduction_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "paid_hours": paid_hours.normalize().to_string(),
            "clamped": unclamped < Decimal::ZERO
        }),
        reasoning: format!(
            "{} - {} - {} = {} paid hours{}",
            duration_hours.normalize(),
            manual_break_hours.normalize(),
            policy_deduction_hours.normalize(),
            unclamped.normalize(),
            if unclamped < Decimal::ZERO {
                " (clamped to 0)"
            } else {
                ""
            }
        ),
    });
    step_number += 1;

    // Step 5: Gross
    let gross = match paid_hours.checked_mul(hourly_wage) {
        Some(gross) => gross,
        None => {
            resolver.gross_overflow(paid_hours, hourly_wage)?;
            Decimal::ZERO
        }
    };

    steps.push(AuditStep {
        step_number,
        rule_id: "gross_wage".to_string(),
        rule_name: "Gross Wage".to_string(),
        input: serde_json::json!({
            "paid_hours": paid_hours.normalize().to_string(),
            "hourly_wage_snapshot": hourly_wage.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross": round_half_up(gross).to_string()
        }),
        reasoning: format!(
            "{} hours x ${} = ${}",
            paid_hours.normalize(),
            hourly_wage.normalize(),
            round_half_up(gross)
        ),
    });

    let mut warnings = resolver.into_warnings();
    if start_minutes == end_minutes {
        // Kept as a full day until the intended reading is confirmed
        warn!(start_minutes, "Start and end times match; treating shift as 24 hours");
        warnings.push(AuditWarning {
            code: "ZERO_LENGTH_SHIFT".to_string(),
            message: format!(
                "Start and end are both {}; the shift was read as 24 hours",
                shift.start_time
            ),
            severity: "low".to_string(),
        });
    }

    let result = CalculationResult {
        duration_hours: round_half_up(duration_hours),
        manual_break_hours: round_half_up(manual_break_hours),
        policy_deduction_hours: round_half_up(policy_deduction_hours),
        paid_hours: round_half_up(paid_hours),
        gross: round_half_up(gross),
        break_policy_used: policy,
        audit_trace: AuditTrace { steps, warnings },
    };

    debug!(
        duration_hours = %result.duration_hours,
        paid_hours = %result.paid_hours,
        gross = %result.gross,
        break_policy = %result.break_policy_used,
        warnings = result.audit_trace.warnings.len(),
        "Calculated shift"
    );

    Ok(result)
}
