//! Rule set types for statutory payroll calculation.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from YAML rule files. [`RuleSet::kr_2026`] provides the
//! built-in 2026 figures for callers that do not load rules from disk.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about a rule set.
///
/// Identifies the statute year the figures belong to so that documents for
/// several years can be generated side by side.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSetMetadata {
    /// The rule set version (e.g., "2026").
    pub version: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// The date these figures take legal effect.
    pub effective_date: NaiveDate,
    /// URL to the official source of the figures.
    pub source_url: String,
}

/// Rates and base bounds for the four mandatory insurances.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceRules {
    /// Employee national pension rate applied to the clamped base.
    pub pension_rate: Decimal,
    /// Lower bound of the national pension contribution base.
    pub pension_base_floor: Decimal,
    /// Upper bound of the national pension contribution base.
    pub pension_base_ceiling: Decimal,
    /// Employee health insurance rate.
    pub health_rate: Decimal,
    /// Long-term care rate, applied to the rounded health premium.
    pub long_term_care_rate: Decimal,
    /// Employee employment insurance rate.
    pub employment_rate: Decimal,
}

/// A single row of the simplified withholding tax table.
///
/// Rows are ordered by ascending `upper_bound`; the final open-ended row has
/// no upper bound. The lower bound of a row is the upper bound of the row
/// before it.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound of this bracket, `None` for the last row.
    pub upper_bound: Option<Decimal>,
    /// Tax accumulated by all lower brackets.
    pub base_amount: Decimal,
    /// Marginal rate applied above this bracket's lower bound.
    pub marginal_rate: Decimal,
}

/// The simplified progressive withholding table plus the local tax fraction.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxRules {
    /// Ascending bracket rows, last row open-ended.
    pub brackets: Vec<TaxBracket>,
    /// Local income tax as a fraction of the withheld national tax.
    pub local_tax_rate: Decimal,
}

/// Monthly exemption caps for the tax-exempt allowance buckets.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowanceRules {
    /// Monthly cap on the tax-exempt meal allowance.
    pub meal_cap: Decimal,
    /// Monthly cap on the tax-exempt own-vehicle allowance.
    pub vehicle_cap: Decimal,
    /// Monthly cap on the tax-exempt childcare allowance (child under six).
    pub childcare_cap: Decimal,
    /// Monthly cap on the tax-exempt research allowance.
    pub research_cap: Decimal,
}

/// Statutory working-time parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkingTimeRules {
    /// Weekly prescribed-hours cap (Labor Standards Act Art. 50).
    pub weekly_cap_hours: Decimal,
    /// Daily hours assumed for display when a schedule names no workdays.
    pub default_daily_hours: Decimal,
}

/// Annual-leave accrual parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveRules {
    /// Days granted after the first full year of service.
    pub base_days: Decimal,
    /// Ceiling on total annual-leave days.
    pub max_days: Decimal,
    /// Years of service per additional leave day beyond the base.
    pub increment_interval_years: u32,
    /// Cap on days accrued monthly during the first service year.
    pub first_year_monthly_cap: u32,
}

/// Statutory minimum wage parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct MinimumWageRules {
    /// The statutory hourly wage floor.
    pub hourly_floor: Decimal,
    /// Fraction of the floor permitted during probation (commonly 0.9).
    pub probation_rate: Decimal,
}

/// The complete rule set for one statute year.
///
/// This struct aggregates all rules loaded from the YAML files in a rule
/// directory, or constructed via [`RuleSet::kr_2026`].
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Rule set metadata.
    metadata: RuleSetMetadata,
    /// Mandatory insurance rates and bounds.
    insurance: InsuranceRules,
    /// Withholding tax brackets (sorted ascending, open row last).
    income_tax: IncomeTaxRules,
    /// Allowance exemption caps.
    allowances: AllowanceRules,
    /// Working-time parameters.
    working_time: WorkingTimeRules,
    /// Annual-leave parameters.
    leave: LeaveRules,
    /// Minimum wage parameters.
    minimum_wage: MinimumWageRules,
}

impl RuleSet {
    /// Creates a new RuleSet from its component parts.
    ///
    /// Tax brackets are sorted by ascending upper bound with the open-ended
    /// row forced last, so evaluation can scan top-down.
    pub fn new(
        metadata: RuleSetMetadata,
        insurance: InsuranceRules,
        mut income_tax: IncomeTaxRules,
        allowances: AllowanceRules,
        working_time: WorkingTimeRules,
        leave: LeaveRules,
        minimum_wage: MinimumWageRules,
    ) -> Self {
        income_tax.brackets.sort_by(|a, b| match (a.upper_bound, b.upper_bound) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Self {
            metadata,
            insurance,
            income_tax,
            allowances,
            working_time,
            leave,
            minimum_wage,
        }
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RuleSetMetadata {
        &self.metadata
    }

    /// Returns the insurance rules.
    pub fn insurance(&self) -> &InsuranceRules {
        &self.insurance
    }

    /// Returns the income tax rules.
    pub fn income_tax(&self) -> &IncomeTaxRules {
        &self.income_tax
    }

    /// Returns the allowance exemption caps.
    pub fn allowances(&self) -> &AllowanceRules {
        &self.allowances
    }

    /// Returns the working-time rules.
    pub fn working_time(&self) -> &WorkingTimeRules {
        &self.working_time
    }

    /// Returns the annual-leave rules.
    pub fn leave(&self) -> &LeaveRules {
        &self.leave
    }

    /// Returns the minimum wage rules.
    pub fn minimum_wage(&self) -> &MinimumWageRules {
        &self.minimum_wage
    }

    /// The built-in 2026 Korean rule set.
    ///
    /// Mirrors `config/kr2026/` so library users need no filesystem access.
    pub fn kr_2026() -> Self {
        let metadata = RuleSetMetadata {
            version: "2026".to_string(),
            name: "Korean statutory payroll rules 2026".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2026, 1, 1)
                .expect("valid built-in effective date"),
            source_url: "https://www.moel.go.kr".to_string(),
        };

        let insurance = InsuranceRules {
            pension_rate: Decimal::new(475, 4),        // 4.75%
            pension_base_floor: Decimal::from(400_000),
            pension_base_ceiling: Decimal::from(6_370_000),
            health_rate: Decimal::new(3595, 5),        // 3.595%
            long_term_care_rate: Decimal::new(1295, 4), // 12.95% of health premium
            employment_rate: Decimal::new(9, 3),       // 0.9%
        };

        let income_tax = IncomeTaxRules {
            brackets: vec![
                TaxBracket {
                    upper_bound: Some(Decimal::from(1_060_000)),
                    base_amount: Decimal::ZERO,
                    marginal_rate: Decimal::ZERO,
                },
                TaxBracket {
                    upper_bound: Some(Decimal::from(1_500_000)),
                    base_amount: Decimal::ZERO,
                    marginal_rate: Decimal::new(6, 2),
                },
                TaxBracket {
                    upper_bound: Some(Decimal::from(3_000_000)),
                    base_amount: Decimal::from(26_400),
                    marginal_rate: Decimal::new(15, 2),
                },
                TaxBracket {
                    upper_bound: Some(Decimal::from(4_500_000)),
                    base_amount: Decimal::from(251_400),
                    marginal_rate: Decimal::new(24, 2),
                },
                TaxBracket {
                    upper_bound: Some(Decimal::from(8_700_000)),
                    base_amount: Decimal::from(611_400),
                    marginal_rate: Decimal::new(35, 2),
                },
                TaxBracket {
                    upper_bound: None,
                    base_amount: Decimal::from(2_081_400),
                    marginal_rate: Decimal::new(38, 2),
                },
            ],
            local_tax_rate: Decimal::new(10, 2),
        };

        let allowances = AllowanceRules {
            meal_cap: Decimal::from(200_000),
            vehicle_cap: Decimal::from(200_000),
            childcare_cap: Decimal::from(200_000),
            research_cap: Decimal::from(200_000),
        };

        let working_time = WorkingTimeRules {
            weekly_cap_hours: Decimal::from(40),
            default_daily_hours: Decimal::from(8),
        };

        let leave = LeaveRules {
            base_days: Decimal::from(15),
            max_days: Decimal::from(25),
            increment_interval_years: 2,
            first_year_monthly_cap: 11,
        };

        let minimum_wage = MinimumWageRules {
            hourly_floor: Decimal::from(10_320),
            probation_rate: Decimal::new(9, 1),
        };

        Self::new(
            metadata,
            insurance,
            income_tax,
            allowances,
            working_time,
            leave,
            minimum_wage,
        )
    }
}
