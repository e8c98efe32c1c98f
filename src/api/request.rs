//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints and their conversions into domain types.

use chrono::{NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{AllowanceRequests, ProbationContext, WageBasis};
use crate::models::{Eligibility, LeavePolicy, LeaveUsage, SeveranceRecord, ShiftSchedule, WageSample};

/// Request body for the `/time-breakdown` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBreakdownRequest {
    /// Daily shift start time.
    pub start_time: NaiveTime,
    /// Daily shift end time.
    pub end_time: NaiveTime,
    /// Unpaid break per day, in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Weekdays on which the shift is worked.
    pub work_days: Vec<Weekday>,
}

impl From<TimeBreakdownRequest> for ShiftSchedule {
    fn from(request: TimeBreakdownRequest) -> Self {
        ShiftSchedule {
            start_time: request.start_time,
            end_time: request.end_time,
            break_minutes: request.break_minutes,
            work_days: request.work_days,
        }
    }
}

/// Request body for the `/salary-split` and `/payslip` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalarySplitRequest {
    /// The total monthly compensation to distribute.
    pub target_gross: Decimal,
    /// Exempt-bucket eligibility flags.
    #[serde(default)]
    pub eligibility: Eligibility,
    /// Explicit bucket amounts; omitted buckets fill up to their caps.
    #[serde(default)]
    pub requests: Option<AllowanceRequests>,
    /// Declared monthly prescribed hours for the minimum-wage check.
    #[serde(default)]
    pub monthly_hours: Option<Decimal>,
}

/// Request body for the `/payslip` endpoint.
pub type PayslipRequest = SalarySplitRequest;

/// Request body for the `/insurance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceRequest {
    /// The taxable monthly wage base.
    pub taxable_base: Decimal,
}

/// Request body for the `/income-tax` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxRequest {
    /// The taxable monthly income.
    pub monthly_taxable_income: Decimal,
}

/// Request body for the `/annual-leave` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualLeaveRequest {
    /// The employee's hire date.
    pub hire_date: NaiveDate,
    /// The year the entitlement is computed for.
    pub reference_year: i32,
    /// The accrual policy to apply.
    pub policy: LeavePolicy,
    /// Leave usage ledger; when present the response includes the balance.
    #[serde(default)]
    pub usage: Option<Vec<LeaveUsage>>,
}

/// Request body for the `/severance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceRequest {
    /// The last three monthly wage samples, oldest first.
    pub samples: [WageSample; 3],
    /// Total tenure in calendar days.
    pub tenure_days: u32,
}

impl From<SeveranceRequest> for SeveranceRecord {
    fn from(request: SeveranceRequest) -> Self {
        SeveranceRecord {
            samples: request.samples,
            tenure_days: request.tenure_days,
        }
    }
}

/// Request body for the `/minimum-wage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimumWageRequest {
    /// The wage being checked.
    pub wage: WageBasis,
    /// Probation status; defaults to a regular (non-probation) check.
    #[serde(default)]
    pub context: ProbationContext,
}
