//! Request types for the Shift Wage Engine API.
//!
//! This module defines the JSON request bodies for the `/calculate` and
//! `/report` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{OrgSettings, ShiftInput, ShiftRecord};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The shift to calculate.
    pub shift: ShiftInput,
    /// The organization's settings; the configured defaults apply when absent.
    #[serde(default)]
    pub org: Option<OrgSettings>,
}

/// Request body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The organization's settings, applied to every shift.
    #[serde(default)]
    pub org: Option<OrgSettings>,
    /// The shift rows to include.
    pub shifts: Vec<ShiftRecord>,
}
