//! Composed payslip calculation.
//!
//! This module wires the calculators together the way a payslip document
//! does: the target gross is split into base salary and exempt allowances,
//! the taxable base feeds the insurance and withholding calculators, and the
//! deductions produce the net amount.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Eligibility, PayslipResult};
use crate::rules::RuleSet;

use super::allowance::{AllowanceRequests, optimize_salary};
use super::income_tax::calculate_income_tax;
use super::insurance::calculate_insurance;

/// Runs the full payslip pipeline for a target gross compensation.
///
/// Compliance flags raised along the way (clamped allowances, sub-minimum
/// base salary) are collected on the result; a flagged payslip is still
/// computed in full so the document can be produced.
///
/// # Arguments
///
/// * `target_gross` - The total monthly compensation
/// * `eligibility` - Exempt-bucket eligibility flags
/// * `requests` - Explicit bucket amounts, `None` to fill up to the caps
/// * `monthly_hours` - Declared monthly prescribed hours for the
///   minimum-wage check, if known
/// * `rules` - The rule set to calculate under
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compose_payslip;
/// use payroll_engine::models::Eligibility;
/// use payroll_engine::rules::RuleSet;
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::kr_2026();
/// let payslip = compose_payslip(
///     Decimal::from(3_000_000),
///     &Eligibility::default(),
///     None,
///     None,
///     &rules,
/// )
/// .unwrap();
/// assert_eq!(payslip.gross_pay, Decimal::from(3_000_000));
/// assert_eq!(payslip.taxable_income, Decimal::from(2_800_000));
/// ```
pub fn compose_payslip(
    target_gross: Decimal,
    eligibility: &Eligibility,
    requests: Option<&AllowanceRequests>,
    monthly_hours: Option<Decimal>,
    rules: &RuleSet,
) -> EngineResult<PayslipResult> {
    let split = optimize_salary(target_gross, eligibility, requests, monthly_hours, rules)?;
    let taxable_income = split.components.taxable_income(rules)?;

    let premiums = calculate_insurance(taxable_income, rules)?;
    let withholding = calculate_income_tax(taxable_income, rules)?;

    let net_pay = target_gross - premiums.total_employee() - withholding.total();

    Ok(PayslipResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        rule_set_version: rules.metadata().version.clone(),
        components: split.components,
        gross_pay: target_gross,
        taxable_income,
        premiums,
        withholding,
        net_pay,
        warnings: split.warnings,
    })
}
