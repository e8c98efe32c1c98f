//! Annual-leave accrual calculation.
//!
//! Two accrual policies are supported: hire-date anniversary and fiscal
//! (calendar) year. Tenure is measured in whole years at year granularity
//! (`reference_year - hire_year`), so the accrual bracket does not depend on
//! whether the anniversary has passed within the reference year.
//!
//! The first-year month-by-month accrual rule (one day per completed service
//! month, capped at eleven) is deliberately a separate operation,
//! [`first_year_monthly_accrual`]; the anniversary policy returns zero for
//! tenure under one year and never substitutes the monthly rule.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EngineResult;
use crate::models::{ComplianceFlag, FlagKind, LeaveBalance, LeaveEntitlement, LeavePolicy, LeaveUsage};
use crate::rules::RuleSet;

/// Leave days for a full service year at the given tenure, capped.
fn yearly_entitlement(tenure_years: i32, rules: &RuleSet) -> Decimal {
    let leave = rules.leave();
    let increments = (tenure_years - 1) / leave.increment_interval_years as i32;
    (leave.base_days + Decimal::from(increments)).min(leave.max_days)
}

/// Calculates the annual-leave entitlement for a reference year.
///
/// Under `HireDateAnniversary`, tenure below one year yields zero days (the
/// first service year is governed by [`first_year_monthly_accrual`]); one
/// full year yields the base 15 days; afterwards one extra day accrues per
/// two further service years, capped at 25.
///
/// Under `FiscalYear` the same bracket arithmetic is keyed to calendar-year
/// boundaries, and the hire year itself is prorated:
/// `(12 - hire_month) / 12 x 15`, rounded half-up to one decimal place.
///
/// A hire date after the reference year yields zero, never a negative count.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_annual_leave;
/// use payroll_engine::models::LeavePolicy;
/// use payroll_engine::rules::RuleSet;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::kr_2026();
/// let hired = NaiveDate::from_ymd_opt(2021, 3, 2).unwrap();
/// let leave =
///     calculate_annual_leave(hired, 2026, LeavePolicy::HireDateAnniversary, &rules).unwrap();
/// // 5 service years: 15 + floor(4 / 2) = 17 days
/// assert_eq!(leave.total_days, Decimal::from(17));
/// ```
pub fn calculate_annual_leave(
    hire_date: NaiveDate,
    reference_year: i32,
    policy: LeavePolicy,
    rules: &RuleSet,
) -> EngineResult<LeaveEntitlement> {
    let tenure_years = reference_year - hire_date.year();

    let total_days = if tenure_years < 0 {
        Decimal::ZERO
    } else {
        match policy {
            LeavePolicy::HireDateAnniversary => {
                if tenure_years < 1 {
                    Decimal::ZERO
                } else {
                    yearly_entitlement(tenure_years, rules)
                }
            }
            LeavePolicy::FiscalYear => {
                if tenure_years == 0 {
                    let elapsed_months = Decimal::from(12 - hire_date.month());
                    let prorated = elapsed_months / Decimal::from(12) * rules.leave().base_days;
                    prorated.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
                } else {
                    yearly_entitlement(tenure_years, rules)
                }
            }
        }
    };

    Ok(LeaveEntitlement { total_days, policy })
}

/// Calculates the first-year monthly leave accrual.
///
/// One day accrues per completed month of service between the hire date and
/// the reference date, capped at the statutory eleven days. A reference date
/// before the hire date yields zero.
pub fn first_year_monthly_accrual(
    hire_date: NaiveDate,
    reference_date: NaiveDate,
    rules: &RuleSet,
) -> EngineResult<Decimal> {
    if reference_date < hire_date {
        return Ok(Decimal::ZERO);
    }

    let mut months = (reference_date.year() - hire_date.year()) * 12
        + reference_date.month() as i32
        - hire_date.month() as i32;
    if reference_date.day() < hire_date.day() {
        months -= 1;
    }
    let months = months.max(0).min(rules.leave().first_year_monthly_cap as i32);

    Ok(Decimal::from(months))
}

/// Nets an entitlement against the usage ledger.
///
/// Remaining days may go negative on over-use; over-use is surfaced as a
/// [`FlagKind::LeaveOveruse`] warning, never clamped away.
pub fn leave_balance(entitlement: &LeaveEntitlement, usage: &[LeaveUsage]) -> LeaveBalance {
    let used_days: Decimal = usage.iter().map(|u| u.days).sum();
    let remaining_days = entitlement.total_days - used_days;

    let mut warnings = Vec::new();
    if remaining_days < Decimal::ZERO {
        warnings.push(ComplianceFlag::warning(
            FlagKind::LeaveOveruse,
            format!(
                "{} leave days used against an entitlement of {}",
                used_days, entitlement.total_days
            ),
        ));
    }

    LeaveBalance {
        entitled_days: entitlement.total_days,
        used_days,
        remaining_days,
        warnings,
    }
}
