//! Exemption-optimized salary allocation.
//!
//! This module splits a target gross compensation into a taxable base salary
//! plus tax-exempt allowance buckets, each capped by statute, minimizing the
//! insurance and withholding base. It is an optimization helper, not a
//! security boundary: inputs only need basic numeric validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ComplianceFlag, Eligibility, FlagKind, SalarySplit, WageComponents};
use crate::rules::RuleSet;

use super::minimum_wage::{ProbationContext, WageBasis, check_minimum_wage};

/// Explicitly requested allowance amounts.
///
/// When a bucket is `None` the optimizer fills it up to its statutory cap;
/// a requested amount above the cap is clamped and flagged, never rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceRequests {
    /// Requested meal allowance.
    pub meal: Option<Decimal>,
    /// Requested own-vehicle allowance.
    pub vehicle: Option<Decimal>,
    /// Requested childcare allowance.
    pub childcare: Option<Decimal>,
    /// Requested research allowance.
    pub research: Option<Decimal>,
}

/// Allocates one bucket: clamps the desired amount to its cap and to the
/// remaining gross, flagging a clamped over-cap request.
fn fill_bucket(
    name: &str,
    desired: Option<Decimal>,
    cap: Decimal,
    remaining: &mut Decimal,
    warnings: &mut Vec<ComplianceFlag>,
) -> Decimal {
    let mut desired = desired.unwrap_or(cap);
    if desired > cap {
        warnings.push(ComplianceFlag::warning(
            FlagKind::AllowanceCapExceeded,
            format!(
                "requested {} allowance {} exceeds the exemption cap {}; clamped",
                name, desired, cap
            ),
        ));
        desired = cap;
    }
    let allocated = desired.min(*remaining);
    *remaining -= allocated;
    allocated
}

/// Splits a target gross into base salary plus tax-exempt allowance buckets.
///
/// Buckets are filled in the fixed statutory-priority order meal → vehicle →
/// childcare → research, each only when the matching eligibility flag is set
/// and never above its monthly cap; whatever gross remains becomes the base
/// salary. The components always sum exactly to `target_gross`, and the base
/// salary can never go negative because a shortfall truncates the last-filled
/// bucket instead.
///
/// # Arguments
///
/// * `target_gross` - The total monthly compensation to distribute
/// * `eligibility` - Which exempt buckets the employee qualifies for
/// * `requests` - Explicit bucket amounts, `None` to fill up to the caps
/// * `monthly_hours` - Declared monthly prescribed hours; when provided the
///   resulting base salary is checked against the minimum wage
/// * `rules` - The rule set supplying the exemption caps
///
/// # Returns
///
/// Returns the [`SalarySplit`] with any advisory flags, or
/// [`EngineError::InvalidAmount`] for a negative target gross or a negative
/// requested bucket amount.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::optimize_salary;
/// use payroll_engine::models::Eligibility;
/// use payroll_engine::rules::RuleSet;
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::kr_2026();
/// let split = optimize_salary(
///     Decimal::from(3_000_000),
///     &Eligibility { has_own_car: true, ..Default::default() },
///     None,
///     None,
///     &rules,
/// )
/// .unwrap();
/// assert_eq!(split.components.meal_allowance, Decimal::from(200_000));
/// assert_eq!(split.components.vehicle_allowance, Decimal::from(200_000));
/// assert_eq!(split.components.base_salary, Decimal::from(2_600_000));
/// ```
pub fn optimize_salary(
    target_gross: Decimal,
    eligibility: &Eligibility,
    requests: Option<&AllowanceRequests>,
    monthly_hours: Option<Decimal>,
    rules: &RuleSet,
) -> EngineResult<SalarySplit> {
    if target_gross < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            field: "target_gross".to_string(),
            message: "cannot be negative".to_string(),
        });
    }
    let requests = requests.copied().unwrap_or_default();
    for (field, amount) in [
        ("meal", requests.meal),
        ("vehicle", requests.vehicle),
        ("childcare", requests.childcare),
        ("research", requests.research),
    ] {
        if let Some(amount) = amount {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidAmount {
                    field: format!("requests.{}", field),
                    message: "cannot be negative".to_string(),
                });
            }
        }
    }

    let caps = rules.allowances();
    let mut warnings = Vec::new();
    let mut remaining = target_gross;

    let meal_allowance = fill_bucket("meal", requests.meal, caps.meal_cap, &mut remaining, &mut warnings);
    let vehicle_allowance = if eligibility.has_own_car {
        fill_bucket("vehicle", requests.vehicle, caps.vehicle_cap, &mut remaining, &mut warnings)
    } else {
        Decimal::ZERO
    };
    let childcare_allowance = if eligibility.has_child_under_6 {
        fill_bucket("childcare", requests.childcare, caps.childcare_cap, &mut remaining, &mut warnings)
    } else {
        Decimal::ZERO
    };
    let research_allowance = if eligibility.is_researcher {
        fill_bucket("research", requests.research, caps.research_cap, &mut remaining, &mut warnings)
    } else {
        Decimal::ZERO
    };

    let base_salary = remaining;

    if let Some(hours) = monthly_hours {
        if hours > Decimal::ZERO {
            let check = check_minimum_wage(
                &WageBasis::Monthly {
                    amount: base_salary,
                    monthly_hours: hours,
                },
                &ProbationContext::default(),
                rules,
            );
            if let Some(flag) = check {
                warnings.push(flag);
            }
        }
    }

    Ok(SalarySplit {
        components: WageComponents {
            base_salary,
            meal_allowance,
            vehicle_allowance,
            childcare_allowance,
            research_allowance,
            other_taxable_allowance: Decimal::ZERO,
        },
        warnings,
    })
}
