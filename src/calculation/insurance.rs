//! Mandatory insurance premium calculation.
//!
//! This module computes the employee-side premiums for the four mandatory
//! insurances (national pension, health, long-term care, employment) from a
//! taxable monthly base and the rule set's rates and bounds.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::InsurancePremiums;
use crate::rules::RuleSet;

use super::round_krw;

/// Calculates the four mandatory insurance premiums.
///
/// The national pension base is clamped to the statutory floor/ceiling
/// before the rate is applied; the other premiums use the raw base. A zero
/// base yields zero premiums across the board: the pension floor binds only
/// once there is a wage to contribute from. Each premium is rounded to whole
/// KRW independently (half away from zero), and the long-term care premium is
/// derived from the *rounded* health premium rather than the raw base, which
/// matches how the collection agency states it on issued payslips.
///
/// # Arguments
///
/// * `taxable_base` - The taxable monthly wage base
/// * `rules` - The rule set supplying rates, floor and ceiling
///
/// # Returns
///
/// Returns the premiums, or [`EngineError::InvalidAmount`] for a negative
/// base.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_insurance;
/// use payroll_engine::rules::RuleSet;
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::kr_2026();
/// let premiums = calculate_insurance(Decimal::from(10_000_000), &rules).unwrap();
/// // Pension base clamps to the 6,370,000 ceiling
/// assert_eq!(premiums.national_pension, Decimal::from(302_575));
/// ```
pub fn calculate_insurance(
    taxable_base: Decimal,
    rules: &RuleSet,
) -> EngineResult<InsurancePremiums> {
    if taxable_base < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            field: "taxable_base".to_string(),
            message: "cannot be negative".to_string(),
        });
    }

    // No wage, no contribution: the pension floor only applies to a
    // positive base.
    if taxable_base.is_zero() {
        return Ok(InsurancePremiums {
            national_pension: Decimal::ZERO,
            health_insurance: Decimal::ZERO,
            long_term_care: Decimal::ZERO,
            employment_insurance: Decimal::ZERO,
        });
    }

    let rates = rules.insurance();

    let pension_base = taxable_base
        .max(rates.pension_base_floor)
        .min(rates.pension_base_ceiling);
    let national_pension = round_krw(pension_base * rates.pension_rate);

    let health_insurance = round_krw(taxable_base * rates.health_rate);
    let long_term_care = round_krw(health_insurance * rates.long_term_care_rate);
    let employment_insurance = round_krw(taxable_base * rates.employment_rate);

    Ok(InsurancePremiums {
        national_pension,
        health_insurance,
        long_term_care,
        employment_insurance,
    })
}
