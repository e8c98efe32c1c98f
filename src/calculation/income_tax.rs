//! Progressive income-tax withholding calculation.
//!
//! This module evaluates the simplified monthly withholding table: the first
//! bracket whose upper bound covers the income determines the tax as the
//! bracket's accumulated base amount plus the marginal rate applied above
//! the bracket's lower bound. Local income tax is always a fixed fraction of
//! the withheld national tax, never computed independently.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::WithholdingTax;
use crate::rules::RuleSet;

use super::round_krw;

/// Calculates withheld national income tax and the derived local tax.
///
/// The bracket table is scanned top-down for the first row whose upper
/// bound is at or above the income (the last row is open-ended); then
/// `tax = base_amount + (income - lower_bound) x marginal_rate`, where the
/// lower bound is the previous row's upper bound. Both figures are rounded
/// to whole KRW, and the local tax is derived from the *rounded* income tax.
///
/// # Arguments
///
/// * `monthly_taxable_income` - The taxable monthly income
/// * `rules` - The rule set supplying the bracket table and local tax rate
///
/// # Returns
///
/// Returns the withholding, or [`EngineError::InvalidAmount`] for a
/// negative income. An empty bracket table is a rule-set defect reported as
/// [`EngineError::CalculationError`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use payroll_engine::rules::RuleSet;
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::kr_2026();
/// let tax = calculate_income_tax(Decimal::from(3_000_000), &rules).unwrap();
/// assert_eq!(tax.income_tax, Decimal::from(251_400));
/// assert_eq!(tax.local_tax, Decimal::from(25_140));
/// ```
pub fn calculate_income_tax(
    monthly_taxable_income: Decimal,
    rules: &RuleSet,
) -> EngineResult<WithholdingTax> {
    if monthly_taxable_income < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            field: "monthly_taxable_income".to_string(),
            message: "cannot be negative".to_string(),
        });
    }

    let table = rules.income_tax();
    let mut lower_bound = Decimal::ZERO;
    let mut selected = None;
    for bracket in &table.brackets {
        match bracket.upper_bound {
            Some(upper) if monthly_taxable_income <= upper => {
                selected = Some((bracket, lower_bound));
                break;
            }
            Some(upper) => lower_bound = upper,
            None => {
                selected = Some((bracket, lower_bound));
                break;
            }
        }
    }
    let (bracket, lower_bound) = selected.ok_or_else(|| EngineError::CalculationError {
        message: "income tax bracket table is empty".to_string(),
    })?;

    let income_tax = round_krw(
        bracket.base_amount + (monthly_taxable_income - lower_bound) * bracket.marginal_rate,
    );
    let local_tax = round_krw(income_tax * table.local_tax_rate);

    Ok(WithholdingTax {
        income_tax,
        local_tax,
    })
}
