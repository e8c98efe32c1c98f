//! Severance settlement calculation.
//!
//! Severance is the average daily wage over the final three-month reference
//! window times 30 days per service year: `avg_daily_wage x 30 x
//! (tenure_days / 365)`.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{SeveranceRecord, SeveranceResult};

use super::round_krw;

/// Calendar days in a statutory service year.
const DAYS_PER_YEAR: u32 = 365;

/// Thirty days of average wage accrue per service year.
const SETTLEMENT_DAYS_PER_YEAR: u32 = 30;

/// Calculates the severance settlement for a tenure span.
///
/// The average daily wage is total gross pay over the three samples divided
/// by total calendar days; a window of zero days yields a zero result
/// rather than a division error. The settlement amount is rounded to whole
/// KRW.
///
/// The arithmetic result is returned even for tenure under one year:
/// `entitled` is false in that case and callers must treat the employee as
/// not legally entitled despite the nonzero number.
///
/// # Arguments
///
/// * `record` - The three monthly wage samples and the tenure span
///
/// # Returns
///
/// Returns the settlement, or [`EngineError::InvalidAmount`] if any sample
/// has a negative gross pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_severance;
/// use payroll_engine::models::{SeveranceRecord, WageSample};
/// use rust_decimal::Decimal;
///
/// let record = SeveranceRecord {
///     samples: std::array::from_fn(|_| WageSample {
///         gross_pay: Decimal::from(3_000_000),
///         calendar_days: 30,
///     }),
///     tenure_days: 730,
/// };
/// let result = calculate_severance(&record).unwrap();
/// assert_eq!(result.avg_daily_wage, Decimal::from(100_000));
/// assert_eq!(result.severance_amount, Decimal::from(6_000_000));
/// assert!(result.entitled);
/// ```
pub fn calculate_severance(record: &SeveranceRecord) -> EngineResult<SeveranceResult> {
    for (index, sample) in record.samples.iter().enumerate() {
        if sample.gross_pay < Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                field: format!("samples[{}].gross_pay", index),
                message: "cannot be negative".to_string(),
            });
        }
    }

    let total_pay: Decimal = record.samples.iter().map(|s| s.gross_pay).sum();
    let total_days: u32 = record.samples.iter().map(|s| s.calendar_days).sum();

    if total_days == 0 {
        return Ok(SeveranceResult {
            avg_daily_wage: Decimal::ZERO,
            severance_amount: Decimal::ZERO,
            entitled: record.tenure_days >= DAYS_PER_YEAR,
        });
    }

    let avg_daily_wage = total_pay / Decimal::from(total_days);
    let severance_amount = round_krw(
        avg_daily_wage
            * Decimal::from(SETTLEMENT_DAYS_PER_YEAR)
            * (Decimal::from(record.tenure_days) / Decimal::from(DAYS_PER_YEAR)),
    );

    Ok(SeveranceResult {
        avg_daily_wage,
        severance_amount,
        entitled: record.tenure_days >= DAYS_PER_YEAR,
    })
}
