//! Core data models for the Shift Wage Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod org_settings;
mod report;
mod shift;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use org_settings::{BreakPolicy, OrgSettings};
pub use report::{EmployeeTotals, ReportTotals, ShiftRecord, ShiftReport, ShiftReportLine};
pub use shift::{NumericInput, ShiftInput, TimeInput};
