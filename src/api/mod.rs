//! HTTP API module for the Shift Wage Engine.
//!
//! This module provides the REST API endpoints for calculating single
//! shifts and building multi-shift reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ReportRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
