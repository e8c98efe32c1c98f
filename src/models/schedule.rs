//! Shift schedule model and working-time breakdown result.
//!
//! This module defines the weekly shift pattern handed in by contract forms
//! and the prescribed/overtime hour breakdown computed from it.

use std::collections::HashSet;

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A recurring same-day shift pattern.
///
/// The pattern is one daily shift (start, end, unpaid break) repeated on a
/// set of weekdays. The end time must be after the start time; overnight
/// shifts are not part of this document generator. Duplicate entries in
/// `work_days` are ignored.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ShiftSchedule;
/// use chrono::{NaiveTime, Weekday};
///
/// let schedule = ShiftSchedule {
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     break_minutes: 60,
///     work_days: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
/// };
/// assert_eq!(schedule.daily_minutes().unwrap(), 480);
/// assert_eq!(schedule.distinct_work_days(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSchedule {
    /// Daily shift start time.
    pub start_time: NaiveTime,
    /// Daily shift end time (must be after the start time).
    pub end_time: NaiveTime,
    /// Unpaid break per day, in minutes.
    pub break_minutes: u32,
    /// Weekdays on which the shift is worked.
    pub work_days: Vec<Weekday>,
}

impl ShiftSchedule {
    /// Returns the worked minutes per day after subtracting the break.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] if the end time is not after
    /// the start time, or the break exceeds the shift span.
    pub fn daily_minutes(&self) -> EngineResult<i64> {
        let span = (self.end_time - self.start_time).num_minutes();
        if span <= 0 {
            return Err(EngineError::InvalidSchedule {
                message: "end time must be after start time".to_string(),
            });
        }
        let worked = span - i64::from(self.break_minutes);
        if worked < 0 {
            return Err(EngineError::InvalidSchedule {
                message: format!(
                    "break of {} minutes exceeds the {} minute shift",
                    self.break_minutes, span
                ),
            });
        }
        Ok(worked)
    }

    /// Returns the number of distinct workdays in the week.
    pub fn distinct_work_days(&self) -> usize {
        self.work_days.iter().collect::<HashSet<_>>().len()
    }
}

/// The statutory working-time breakdown of a [`ShiftSchedule`].
///
/// `weekly_prescribed_hours` never exceeds the 40-hour weekly cap; any raw
/// hours above the cap appear in `weekly_overtime_hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBreakdownResult {
    /// Worked hours per day (fractional hours permitted).
    pub daily_hours: Decimal,
    /// Weekly prescribed hours, capped at the statutory weekly limit.
    pub weekly_prescribed_hours: Decimal,
    /// Weekly hours above the statutory limit.
    pub weekly_overtime_hours: Decimal,
    /// Monthly prescribed hours including the paid weekly rest day,
    /// rounded to the nearest whole hour (209 for a standard 40-hour week).
    pub monthly_prescribed_hours: u32,
}
