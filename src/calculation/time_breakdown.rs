//! Working-time breakdown calculation.
//!
//! This module converts a weekly shift pattern into the statutory
//! prescribed/overtime hour quantities, enforcing the 40-hour weekly cap of
//! Labor Standards Act Art. 50.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftSchedule, TimeBreakdownResult};
use crate::rules::RuleSet;

use super::round_krw;

/// Days per month averaged over a year: 365 / 12 / 7 weeks.
fn weeks_per_month() -> Decimal {
    Decimal::from(365) / Decimal::from(12) / Decimal::from(7)
}

/// Computes the statutory working-time breakdown for a shift schedule.
///
/// Daily hours are the shift span minus the unpaid break. Raw weekly hours
/// (daily hours × workdays) are capped at the statutory weekly limit; the
/// remainder is overtime. Monthly prescribed hours add one paid weekly
/// rest-day equivalent: `round((weekly_prescribed + daily_prescribed) ×
/// 365/12/7)`, which gives 209 hours for a standard 40-hour, five-day week.
///
/// # Arguments
///
/// * `schedule` - The weekly shift pattern
/// * `rules` - The rule set supplying the weekly cap
///
/// # Returns
///
/// Returns the breakdown, or [`EngineError::InvalidSchedule`] if the end
/// time is not after the start time or the break exceeds the shift.
///
/// A schedule with no workdays yields an all-zero breakdown; the monthly
/// formula is not invoked and callers must treat such schedules as
/// unspecified rather than as a real zero-hour contract.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_time_breakdown;
/// use payroll_engine::models::ShiftSchedule;
/// use payroll_engine::rules::RuleSet;
/// use chrono::{NaiveTime, Weekday};
/// use rust_decimal::Decimal;
///
/// let schedule = ShiftSchedule {
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     break_minutes: 60,
///     work_days: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
/// };
/// let result = compute_time_breakdown(&schedule, &RuleSet::kr_2026()).unwrap();
/// assert_eq!(result.daily_hours, Decimal::from(8));
/// assert_eq!(result.weekly_prescribed_hours, Decimal::from(40));
/// assert_eq!(result.monthly_prescribed_hours, 209);
/// ```
pub fn compute_time_breakdown(
    schedule: &ShiftSchedule,
    rules: &RuleSet,
) -> EngineResult<TimeBreakdownResult> {
    let daily_minutes = schedule.daily_minutes()?;
    let daily_hours = Decimal::from(daily_minutes) / Decimal::from(60);

    let day_count = schedule.distinct_work_days();
    if day_count == 0 {
        return Ok(TimeBreakdownResult {
            daily_hours: Decimal::ZERO,
            weekly_prescribed_hours: Decimal::ZERO,
            weekly_overtime_hours: Decimal::ZERO,
            monthly_prescribed_hours: 0,
        });
    }

    let weekly_cap = rules.working_time().weekly_cap_hours;
    let raw_weekly_hours = daily_hours * Decimal::from(day_count as u32);
    let weekly_prescribed_hours = raw_weekly_hours.min(weekly_cap);
    let weekly_overtime_hours = (raw_weekly_hours - weekly_cap).max(Decimal::ZERO);

    // One paid rest day per week at the prescribed daily length
    let daily_prescribed_hours = weekly_prescribed_hours / Decimal::from(day_count as u32);
    let monthly_raw = (weekly_prescribed_hours + daily_prescribed_hours) * weeks_per_month();
    let monthly_prescribed_hours = round_krw(monthly_raw).to_u32().ok_or_else(|| {
        EngineError::CalculationError {
            message: format!("monthly prescribed hours out of range: {}", monthly_raw),
        }
    })?;

    Ok(TimeBreakdownResult {
        daily_hours,
        weekly_prescribed_hours,
        weekly_overtime_hours,
        monthly_prescribed_hours,
    })
}
