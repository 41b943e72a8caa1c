//! Report aggregation across many shifts.
//!
//! This is the calculation half of a payroll report export: every shift row
//! is calculated independently and the rounded results are summed per
//! employee, so the totals always add up to the lines shown.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::{
    EmployeeTotals, OrgSettings, ReportTotals, ShiftRecord, ShiftReport, ShiftReportLine,
};

use super::employee_shift::calc_employee_shift;

/// Builds a report over a batch of shift records.
///
/// Lines keep the input order. Employee totals are ordered by employee ID.
/// All shifts are calculated with the same organization settings.
///
/// # Errors
///
/// In strict mode the first record with malformed input aborts the report.
/// In either mode a total that outgrows `Decimal` returns
/// [`EngineError::TotalsOverflow`](crate::error::EngineError::TotalsOverflow).
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::build_shift_report;
/// use wage_engine::config::CalculatorConfig;
/// use wage_engine::models::{ShiftInput, ShiftRecord};
/// use rust_decimal::Decimal;
///
/// let records = vec![ShiftRecord {
///     id: "shift_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: None,
///     shift: ShiftInput::new("22:00", "02:00", 0, Decimal::from(300)),
/// }];
///
/// let report = build_shift_report(&records, None, &CalculatorConfig::default()).unwrap();
/// assert_eq!(report.totals.gross, Decimal::from(1200));
/// ```
pub fn build_shift_report(
    records: &[ShiftRecord],
    org: Option<&OrgSettings>,
    config: &CalculatorConfig,
) -> EngineResult<ShiftReport> {
    let mut lines = Vec::with_capacity(records.len());
    let mut per_employee: BTreeMap<&str, ReportTotals> = BTreeMap::new();
    let mut totals = ReportTotals::default();

    for record in records {
        let result = calc_employee_shift(&record.shift, org, config)?;

        per_employee
            .entry(record.employee_id.as_str())
            .or_default()
            .add(&result)?;
        totals.add(&result)?;

        lines.push(ShiftReportLine {
            shift_id: record.id.clone(),
            employee_id: record.employee_id.clone(),
            date: record.date,
            result,
        });
    }

    let employees: Vec<EmployeeTotals> = per_employee
        .into_iter()
        .map(|(employee_id, totals)| EmployeeTotals {
            employee_id: employee_id.to_string(),
            totals,
        })
        .collect();

    info!(
        shifts = lines.len(),
        employees = employees.len(),
        gross = %totals.gross,
        "Built shift report"
    );

    Ok(ShiftReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        lines,
        employees,
        totals,
    })
}
