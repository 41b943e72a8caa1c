//! Property-based tests for shift calculation invariants.
//!
//! These tests exercise the duration, break policy and paid hours rules
//! across generated shifts using proptest.

use proptest::prelude::*;
use rust_decimal::Decimal;

use wage_engine::calculation::{
    POLICY_DEDUCTION_HOURS, POLICY_THRESHOLD_HOURS, apply_break_policy, calc_employee_shift,
    compute_duration_hours, round_half_up,
};
use wage_engine::config::CalculatorConfig;
use wage_engine::models::{BreakPolicy, OrgSettings, ShiftInput};

/// Strategy for a time of day in minutes since midnight.
fn minute_of_day() -> impl Strategy<Value = u32> {
    0u32..1440
}

/// Strategy for a time of day on a quarter-hour boundary.
fn quarter_hour() -> impl Strategy<Value = u32> {
    (0u32..96).prop_map(|q| q * 15)
}

/// Strategy for any configured break policy.
fn policy_strategy() -> impl Strategy<Value = BreakPolicy> {
    prop::sample::select(BreakPolicy::ALL.to_vec())
}

/// Strategy for an hourly wage with cents.
fn wage_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for any non-negative `Decimal`, up to `Decimal::MAX`.
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, scale)| Decimal::from_parts(lo, mid, hi, false, scale))
}

/// Strategy for a duration in hundredths of an hour, up to a full day.
fn hours_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=2400).prop_map(|h| Decimal::new(h, 2))
}

fn hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

proptest! {
    /// Property: every shift lasts more than zero and at most 24 hours.
    #[test]
    fn prop_duration_within_one_day(start in minute_of_day(), end in minute_of_day()) {
        let result = compute_duration_hours(start, end, 1);
        prop_assert!(result.hours > Decimal::ZERO);
        prop_assert!(result.hours <= Decimal::from(24));
        prop_assert_eq!(result.crosses_midnight, end <= start);
    }

    /// Property: a shift and its complement together cover a whole day.
    #[test]
    fn prop_duration_complements(start in quarter_hour(), end in quarter_hour()) {
        prop_assume!(start != end);
        let forward = compute_duration_hours(start, end, 1).hours;
        let backward = compute_duration_hours(end, start, 1).hours;
        prop_assert_eq!(forward + backward, Decimal::from(24));
    }

    /// Property: deducting policies take nothing up to five and a half hours.
    #[test]
    fn prop_no_deduction_at_or_below_threshold(
        hours in hours_strategy(),
        policy in policy_strategy(),
    ) {
        prop_assume!(hours <= POLICY_THRESHOLD_HOURS);
        prop_assert_eq!(apply_break_policy(hours, Decimal::ZERO, policy), Decimal::ZERO);
    }

    /// Property: deducting policies take half an hour above the threshold.
    #[test]
    fn prop_fixed_deduction_above_threshold(
        hours in hours_strategy(),
        policy in policy_strategy(),
    ) {
        prop_assume!(hours > POLICY_THRESHOLD_HOURS);
        let expected = if policy == BreakPolicy::None {
            Decimal::ZERO
        } else {
            POLICY_DEDUCTION_HOURS
        };
        prop_assert_eq!(apply_break_policy(hours, Decimal::ZERO, policy), expected);
    }

    /// Property: paid hours and gross are never negative and never exceed
    /// the shift duration.
    #[test]
    fn prop_paid_hours_bounded(
        start in minute_of_day(),
        end in minute_of_day(),
        break_minutes in 0u32..2000,
        wage in wage_strategy(),
        policy in policy_strategy(),
    ) {
        let shift = ShiftInput::new(hhmm(start).as_str(), hhmm(end).as_str(), break_minutes, wage);
        let org = OrgSettings::with_policy(policy);
        let result = calc_employee_shift(&shift, Some(&org), &CalculatorConfig::strict()).unwrap();

        prop_assert!(result.paid_hours >= Decimal::ZERO);
        prop_assert!(result.gross >= Decimal::ZERO);
        prop_assert!(result.paid_hours <= result.duration_hours);
        prop_assert_eq!(result.break_policy_used, policy);
        prop_assert_eq!(result.audit_trace.has_warnings(), start == end);
    }

    /// Property: gross is paid hours times the wage, rounded to cents.
    #[test]
    fn prop_gross_matches_paid_hours(
        start in quarter_hour(),
        end in quarter_hour(),
        breaks in 0u32..16,
        wage in wage_strategy(),
        policy in policy_strategy(),
    ) {
        let break_minutes = breaks * 15;
        let shift = ShiftInput::new(hhmm(start).as_str(), hhmm(end).as_str(), break_minutes, wage);
        let org = OrgSettings::with_policy(policy);
        let result = calc_employee_shift(&shift, Some(&org), &CalculatorConfig::strict()).unwrap();

        let duration = compute_duration_hours(start, end, 1).hours;
        let deduction = apply_break_policy(duration, Decimal::from(break_minutes), policy);
        let paid = (duration - Decimal::new(i64::from(breaks), 0) / Decimal::from(4) - deduction)
            .max(Decimal::ZERO);

        prop_assert_eq!(result.paid_hours, round_half_up(paid));
        prop_assert_eq!(result.gross, round_half_up(paid * wage));
    }

    /// Property: all reported figures carry exactly two decimal places.
    #[test]
    fn prop_figures_have_two_decimal_places(
        start in minute_of_day(),
        end in minute_of_day(),
        break_minutes in 0u32..120,
        wage in wage_strategy(),
    ) {
        let shift = ShiftInput::new(hhmm(start).as_str(), hhmm(end).as_str(), break_minutes, wage);
        let result = calc_employee_shift(&shift, None, &CalculatorConfig::default()).unwrap();

        for value in [
            result.duration_hours,
            result.manual_break_hours,
            result.policy_deduction_hours,
            result.paid_hours,
            result.gross,
        ] {
            prop_assert_eq!(value.scale(), 2);
        }
    }

    /// Property: no wage or break, however large, makes a lenient
    /// calculation fail; gross that cannot be represented pays 0.
    #[test]
    fn prop_extreme_numbers_never_fail_when_lenient(
        start in minute_of_day(),
        end in minute_of_day(),
        break_minutes in any_decimal(),
        wage in any_decimal(),
        policy in policy_strategy(),
    ) {
        let shift = ShiftInput {
            break_minutes: Some(break_minutes.into()),
            ..ShiftInput::new(hhmm(start).as_str(), hhmm(end).as_str(), 0, wage)
        };
        let org = OrgSettings::with_policy(policy);
        let result = calc_employee_shift(&shift, Some(&org), &CalculatorConfig::default()).unwrap();

        prop_assert!(result.paid_hours >= Decimal::ZERO);
        prop_assert!(result.gross >= Decimal::ZERO);
        let coerced = result.audit_trace.warnings.iter().any(|w| w.code == "WAGE_COERCED");
        if coerced {
            prop_assert_eq!(result.gross, Decimal::ZERO);
        }
    }
}
