//! Calculation result models for the Shift Wage Engine.
//!
//! This module contains the [`CalculationResult`] type and the audit
//! structures recording how each figure was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BreakPolicy;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// In lenient mode every coerced input produces one of these, so a result
/// computed from bad data can be told apart from a genuine zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use wage_engine::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(!trace.has_warnings());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if any input was coerced.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// The result of calculating one shift.
///
/// Hours and money are rounded to two decimal places. `break_policy_used`
/// is the policy actually applied, after default substitution.
///
/// # Example
///
/// ```
/// use wage_engine::models::{AuditTrace, BreakPolicy, CalculationResult};
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     duration_hours: Decimal::new(600, 2),
///     manual_break_hours: Decimal::new(50, 2),
///     policy_deduction_hours: Decimal::ZERO,
///     paid_hours: Decimal::new(550, 2),
///     gross: Decimal::new(110000, 2),
///     break_policy_used: BreakPolicy::None,
///     audit_trace: AuditTrace::default(),
/// };
/// assert_eq!(result.gross, Decimal::from(1100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Length of the shift in hours.
    pub duration_hours: Decimal,
    /// Manually logged break, in hours.
    pub manual_break_hours: Decimal,
    /// Extra unpaid time deducted by the break policy, in hours.
    pub policy_deduction_hours: Decimal,
    /// Hours paid after all deductions; never negative.
    pub paid_hours: Decimal,
    /// Paid hours multiplied by the hourly wage snapshot.
    pub gross: Decimal,
    /// The break policy that was applied.
    pub break_policy_used: BreakPolicy,
    /// How the figures were derived.
    pub audit_trace: AuditTrace,
}
