//! Calculation logic for the Shift Wage Engine.
//!
//! This module contains time-of-day parsing, shift duration computation
//! (including midnight crossing), break policy application, gross wage
//! derivation for a single shift, and report aggregation over many shifts.
//! Every function here is pure: inputs are borrowed and never modified.

mod break_policy;
mod duration;
mod employee_shift;
mod input;
mod report;
mod rounding;
mod time_of_day;

pub use break_policy::{
    BreakPolicyResult, POLICY_DEDUCTION_HOURS, POLICY_THRESHOLD_HOURS, apply_break_policy,
    apply_break_policy_audited,
};
pub use duration::{DurationResult, MINUTES_PER_DAY, compute_duration_hours};
pub use employee_shift::calc_employee_shift;
pub use report::build_shift_report;
pub use rounding::{DISPLAY_SCALE, round_half_up};
pub use time_of_day::minutes_since_midnight;
