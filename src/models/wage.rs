//! Wage component models.
//!
//! This module defines the monthly wage records handed to the engine by the
//! document forms: the raw component breakdown, the optimized salary split,
//! the mandatory insurance premiums and the withheld taxes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ComplianceFlag;
use crate::rules::RuleSet;

/// The monthly wage components of an employment contract.
///
/// All amounts are in KRW and must be non-negative. Exempt allowances are
/// excluded from taxable income only up to their statutory monthly caps;
/// any excess above a cap is taxable.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WageComponents;
/// use payroll_engine::rules::RuleSet;
/// use rust_decimal::Decimal;
///
/// let wage = WageComponents {
///     base_salary: Decimal::from(2_500_000),
///     meal_allowance: Decimal::from(200_000),
///     vehicle_allowance: Decimal::ZERO,
///     childcare_allowance: Decimal::ZERO,
///     research_allowance: Decimal::ZERO,
///     other_taxable_allowance: Decimal::from(100_000),
/// };
/// assert_eq!(wage.total_gross(), Decimal::from(2_800_000));
///
/// let rules = RuleSet::kr_2026();
/// assert_eq!(wage.taxable_income(&rules).unwrap(), Decimal::from(2_600_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageComponents {
    /// Base monthly salary.
    pub base_salary: Decimal,
    /// Meal allowance (tax-exempt up to the statutory cap).
    pub meal_allowance: Decimal,
    /// Own-vehicle allowance (tax-exempt up to the statutory cap).
    pub vehicle_allowance: Decimal,
    /// Childcare allowance (tax-exempt up to the statutory cap).
    pub childcare_allowance: Decimal,
    /// Research allowance (tax-exempt up to the statutory cap).
    pub research_allowance: Decimal,
    /// Other allowances that are always taxable (incl. fixed overtime pay).
    pub other_taxable_allowance: Decimal,
}

impl WageComponents {
    /// Returns the sum of all wage components.
    pub fn total_gross(&self) -> Decimal {
        self.base_salary
            + self.meal_allowance
            + self.vehicle_allowance
            + self.childcare_allowance
            + self.research_allowance
            + self.other_taxable_allowance
    }

    /// Returns the taxable monthly income under the given rule set.
    ///
    /// Taxable income is the base salary plus other taxable allowances plus
    /// the portion of each exempt allowance that exceeds its monthly cap.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAmount`] if any component is negative.
    pub fn taxable_income(&self, rules: &RuleSet) -> EngineResult<Decimal> {
        self.validate()?;
        let caps = rules.allowances();
        let excess = |amount: Decimal, cap: Decimal| (amount - cap).max(Decimal::ZERO);

        Ok(self.base_salary
            + self.other_taxable_allowance
            + excess(self.meal_allowance, caps.meal_cap)
            + excess(self.vehicle_allowance, caps.vehicle_cap)
            + excess(self.childcare_allowance, caps.childcare_cap)
            + excess(self.research_allowance, caps.research_cap))
    }

    /// Validates that every component is non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("base_salary", self.base_salary),
            ("meal_allowance", self.meal_allowance),
            ("vehicle_allowance", self.vehicle_allowance),
            ("childcare_allowance", self.childcare_allowance),
            ("research_allowance", self.research_allowance),
            ("other_taxable_allowance", self.other_taxable_allowance),
        ];
        for (field, amount) in fields {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidAmount {
                    field: field.to_string(),
                    message: "cannot be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Eligibility flags for the tax-exempt allowance buckets.
///
/// Meal allowance is available to everyone; the other buckets require the
/// matching flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    /// Employee uses their own car for company business.
    pub has_own_car: bool,
    /// Employee has a child under six years of age.
    pub has_child_under_6: bool,
    /// Employee qualifies as a researcher.
    pub is_researcher: bool,
}

impl Eligibility {
    /// Eligibility with every flag set, for maximal exemption.
    pub fn all() -> Self {
        Self {
            has_own_car: true,
            has_child_under_6: true,
            is_researcher: true,
        }
    }
}

/// The result of optimizing a target gross into base salary plus exempt
/// allowance buckets.
///
/// The components always sum exactly to the requested target gross.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalarySplit {
    /// The wage components after allocation.
    pub components: WageComponents,
    /// Advisory compliance flags raised during allocation.
    pub warnings: Vec<ComplianceFlag>,
}

/// Monthly employee-side premiums for the four mandatory insurances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePremiums {
    /// National pension premium.
    pub national_pension: Decimal,
    /// Health insurance premium.
    pub health_insurance: Decimal,
    /// Long-term care premium (derived from the rounded health premium).
    pub long_term_care: Decimal,
    /// Employment insurance premium.
    pub employment_insurance: Decimal,
}

impl InsurancePremiums {
    /// Returns the total employee-side premium.
    pub fn total_employee(&self) -> Decimal {
        self.national_pension
            + self.health_insurance
            + self.long_term_care
            + self.employment_insurance
    }
}

/// Withheld national income tax and the derived local income tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingTax {
    /// Withheld national income tax for the month.
    pub income_tax: Decimal,
    /// Local income tax, always a fixed fraction of the income tax.
    pub local_tax: Decimal,
}

impl WithholdingTax {
    /// Returns the combined withheld amount.
    pub fn total(&self) -> Decimal {
        self.income_tax + self.local_tax
    }
}
