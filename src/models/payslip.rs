//! Aggregate payslip result model.
//!
//! This module contains the [`PayslipResult`] type that captures the full
//! output of a composed payslip calculation: the optimized salary split, the
//! taxable base, the deductions and the net amount.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ComplianceFlag, InsurancePremiums, WageComponents, WithholdingTax};

/// The full result of a composed payslip calculation.
///
/// Produced by [`crate::calculation::compose_payslip`]: target gross is
/// split into base salary and exempt allowances, the taxable base is derived,
/// and the four insurance premiums plus withheld taxes are deducted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipResult {
    /// Unique id of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the rule set used (e.g., "2026").
    pub rule_set_version: String,
    /// The wage components after exemption-optimized allocation.
    pub components: WageComponents,
    /// The gross amount (always equals the requested target gross).
    pub gross_pay: Decimal,
    /// The taxable monthly base after exemptions.
    pub taxable_income: Decimal,
    /// Employee-side mandatory insurance premiums.
    pub premiums: InsurancePremiums,
    /// Withheld national and local income tax.
    pub withholding: WithholdingTax,
    /// Gross minus premiums and withheld taxes.
    pub net_pay: Decimal,
    /// Advisory compliance flags collected along the way.
    pub warnings: Vec<ComplianceFlag>,
}
