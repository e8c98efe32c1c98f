//! Minimum-wage compliance check.
//!
//! This module compares an hourly or monthly wage against the statutory
//! hourly floor, optionally reduced during probation. The check is advisory
//! and never fails: a violation is reported as a [`ComplianceFlag`] and a
//! compliant wage yields `None`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ComplianceFlag, FlagKind};
use crate::rules::RuleSet;

/// The wage being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageBasis {
    /// An hourly wage, compared against the floor directly.
    Hourly(Decimal),
    /// A monthly wage, divided by the monthly prescribed hours first.
    Monthly {
        /// The monthly wage amount.
        amount: Decimal,
        /// Monthly prescribed hours the wage covers (e.g., 209).
        monthly_hours: Decimal,
    },
}

/// Probation status of the employee being checked.
///
/// The reduced probation floor is applied whenever `is_probation` is set.
/// The statute restricts the reduction to the first three months of
/// contracts of a year or more in non-simple-labor roles; that eligibility
/// test is not modelled here, matching the behavior of the documents this
/// engine reproduces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbationContext {
    /// Whether the employee is in their probation period.
    pub is_probation: bool,
    /// Overrides the rule set's probation rate when set.
    pub probation_rate: Option<Decimal>,
}

/// Checks a wage against the statutory minimum.
///
/// Returns `Some(flag)` on a violation and `None` otherwise; this check
/// never errors. A monthly wage with non-positive hours cannot be converted
/// to an hourly rate and yields `None`; callers must validate their hours
/// separately.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{check_minimum_wage, ProbationContext, WageBasis};
/// use payroll_engine::rules::RuleSet;
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::kr_2026();
/// let flag = check_minimum_wage(
///     &WageBasis::Hourly(Decimal::from(9_000)),
///     &ProbationContext::default(),
///     &rules,
/// );
/// assert!(flag.is_some());
/// ```
pub fn check_minimum_wage(
    wage: &WageBasis,
    context: &ProbationContext,
    rules: &RuleSet,
) -> Option<ComplianceFlag> {
    let minimum = rules.minimum_wage();

    let effective_hourly = match *wage {
        WageBasis::Hourly(rate) => rate,
        WageBasis::Monthly {
            amount,
            monthly_hours,
        } => {
            if monthly_hours <= Decimal::ZERO {
                return None;
            }
            amount / monthly_hours
        }
    };

    let (floor, kind) = if context.is_probation {
        let rate = context.probation_rate.unwrap_or(minimum.probation_rate);
        (
            minimum.hourly_floor * rate,
            FlagKind::ProbationWageViolation,
        )
    } else {
        (minimum.hourly_floor, FlagKind::MinimumWageViolation)
    };

    if effective_hourly < floor {
        Some(ComplianceFlag::error(
            kind,
            format!(
                "effective hourly wage {} is below the applicable floor {}",
                effective_hourly.round_dp(2),
                floor.round_dp(2)
            ),
        ))
    } else {
        None
    }
}
