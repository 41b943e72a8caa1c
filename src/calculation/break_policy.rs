//! Break policy application.
//!
//! An organization's break policy decides how much unpaid time is deducted
//! on top of the break minutes an employee logged by hand.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, BreakPolicy};

/// Shifts longer than this many hours attract the fixed deduction.
pub const POLICY_THRESHOLD_HOURS: Decimal = Decimal::from_parts(55, 0, 0, false, 1);

/// Hours deducted once the threshold is exceeded.
pub const POLICY_DEDUCTION_HOURS: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Returns the unpaid hours a policy deducts from a shift of `hours`.
///
/// The threshold comparison is strictly greater-than on the unrounded
/// duration: exactly 5.5 hours deducts nothing. The period-based and
/// base-rate policies currently deduct like the fixed rule.
///
/// `break_minutes` is accepted so that future policies can take the logged
/// break into account; no current policy reads it.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::apply_break_policy;
/// use wage_engine::models::BreakPolicy;
/// use rust_decimal::Decimal;
///
/// let six = Decimal::from(6);
/// assert_eq!(apply_break_policy(six, Decimal::ZERO, BreakPolicy::None), Decimal::ZERO);
/// assert_eq!(
///     apply_break_policy(six, Decimal::ZERO, BreakPolicy::FixedHalfHourOverFiveAndHalf),
///     Decimal::new(5, 1)
/// );
/// ```
pub fn apply_break_policy(hours: Decimal, _break_minutes: Decimal, policy: BreakPolicy) -> Decimal {
    match policy {
        BreakPolicy::None => Decimal::ZERO,
        BreakPolicy::FixedHalfHourOverFiveAndHalf
        | BreakPolicy::ProportionalAcrossPeriods
        | BreakPolicy::FromBaseRate => {
            if hours > POLICY_THRESHOLD_HOURS {
                POLICY_DEDUCTION_HOURS
            } else {
                Decimal::ZERO
            }
        }
    }
}

/// The result of applying a break policy, including the audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPolicyResult {
    /// The policy applied.
    pub policy: BreakPolicy,
    /// Hours deducted by the policy.
    pub deduction_hours: Decimal,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Applies a break policy and records the decision for the audit trace.
pub fn apply_break_policy_audited(
    hours: Decimal,
    break_minutes: Decimal,
    policy: BreakPolicy,
    step_number: u32,
) -> BreakPolicyResult {
    let deduction_hours = apply_break_policy(hours, break_minutes, policy);

    let reasoning = match policy {
        BreakPolicy::None => format!("Policy '{}' deducts no additional break", policy),
        _ if deduction_hours > Decimal::ZERO => format!(
            "{} hours exceeds {} hour threshold; policy '{}' deducts {} hours",
            hours.normalize(),
            POLICY_THRESHOLD_HOURS,
            policy,
            deduction_hours
        ),
        _ => format!(
            "{} hours does not exceed {} hour threshold; policy '{}' deducts nothing",
            hours.normalize(),
            POLICY_THRESHOLD_HOURS,
            policy
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "break_policy".to_string(),
        rule_name: "Break Policy Deduction".to_string(),
        input: serde_json::json!({
            "duration_hours": hours.normalize().to_string(),
            "break_minutes": break_minutes.normalize().to_string(),
            "policy": policy.as_str(),
            "threshold_hours": POLICY_THRESHOLD_HOURS.to_string()
        }),
        output: serde_json::json!({
            "deduction_hours": deduction_hours.normalize().to_string()
        }),
        reasoning,
    };

    BreakPolicyResult {
        policy,
        deduction_hours,
        audit_step,
    }
}
