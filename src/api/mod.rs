//! HTTP API module for the payroll calculation engine.
//!
//! This module provides the REST endpoints the document forms call: one
//! endpoint per calculator plus the composed `/payslip` calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AnnualLeaveRequest, IncomeTaxRequest, InsuranceRequest, MinimumWageRequest, PayslipRequest,
    SalarySplitRequest, SeveranceRequest, TimeBreakdownRequest,
};
pub use response::{AnnualLeaveResponse, ApiError, MinimumWageResponse};
pub use state::AppState;
