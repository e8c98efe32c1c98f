//! Calculation logic for the payroll engine.
//!
//! This module contains all the statutory calculators: working-time
//! breakdown, exemption-optimized salary allocation, the four mandatory
//! insurance premiums, progressive income-tax withholding, annual-leave
//! accrual, severance settlement, the minimum-wage check, and the composed
//! payslip calculation.

mod allowance;
mod annual_leave;
mod income_tax;
mod insurance;
mod minimum_wage;
mod payslip;
mod severance;
mod time_breakdown;

pub use allowance::{AllowanceRequests, optimize_salary};
pub use annual_leave::{calculate_annual_leave, first_year_monthly_accrual, leave_balance};
pub use income_tax::calculate_income_tax;
pub use insurance::calculate_insurance;
pub use minimum_wage::{ProbationContext, WageBasis, check_minimum_wage};
pub use payslip::compose_payslip;
pub use severance::calculate_severance;
pub use time_breakdown::compute_time_breakdown;

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to the nearest whole KRW, half away from zero.
///
/// Statutory figures are rounded independently per premium/tax line, never
/// on a combined total.
pub fn round_krw(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
