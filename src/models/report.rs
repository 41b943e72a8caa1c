//! Report models for aggregating many shift calculations.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{CalculationResult, ShiftInput};

/// A stored shift row as handed over by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee who worked the shift.
    pub employee_id: String,
    /// The calendar date of the shift, if known.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Times, break and wage snapshot.
    #[serde(flatten)]
    pub shift: ShiftInput,
}

/// One calculated shift within a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftReportLine {
    /// The ID of the shift this line was calculated from.
    pub shift_id: String,
    /// The employee who worked the shift.
    pub employee_id: String,
    /// The calendar date of the shift, if known.
    pub date: Option<NaiveDate>,
    /// The calculation for this shift.
    pub result: CalculationResult,
}

/// Summed figures for one employee, or for the whole report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Number of shifts included.
    pub shift_count: u32,
    /// Sum of shift durations in hours.
    pub duration_hours: Decimal,
    /// Sum of paid hours.
    pub paid_hours: Decimal,
    /// Sum of gross pay.
    pub gross: Decimal,
}

impl ReportTotals {
    /// Adds one calculated shift to the running totals.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TotalsOverflow`] when a sum no longer fits in a
    /// `Decimal`. The totals are left unchanged in that case.
    pub fn add(&mut self, result: &CalculationResult) -> EngineResult<()> {
        let duration_hours =
            checked_total(self.duration_hours, result.duration_hours, "duration_hours")?;
        let paid_hours = checked_total(self.paid_hours, result.paid_hours, "paid_hours")?;
        let gross = checked_total(self.gross, result.gross, "gross")?;

        self.shift_count += 1;
        self.duration_hours = duration_hours;
        self.paid_hours = paid_hours;
        self.gross = gross;
        Ok(())
    }
}

fn checked_total(total: Decimal, value: Decimal, field: &str) -> EngineResult<Decimal> {
    total
        .checked_add(value)
        .ok_or_else(|| EngineError::TotalsOverflow {
            field: field.to_string(),
        })
}

/// Totals for a single employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTotals {
    /// The employee these totals belong to.
    pub employee_id: String,
    /// The summed figures.
    #[serde(flatten)]
    pub totals: ReportTotals,
}

/// The result of calculating a batch of shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// One line per input shift, in input order.
    pub lines: Vec<ShiftReportLine>,
    /// Per-employee totals, ordered by employee ID.
    pub employees: Vec<EmployeeTotals>,
    /// Totals across all shifts.
    pub totals: ReportTotals,
}
