//! Annual-leave models.
//!
//! This module defines the leave accrual policies, the computed entitlement,
//! and the usage ledger records kept by the document forms.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ComplianceFlag;

/// The accrual policy an employer applies to annual leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeavePolicy {
    /// Entitlement keyed to each employee's hire-date anniversary.
    HireDateAnniversary,
    /// Entitlement keyed to calendar-year boundaries, with the first
    /// partial year prorated.
    FiscalYear,
}

/// The annual-leave entitlement for one reference year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEntitlement {
    /// Entitled days (may be fractional under the fiscal-year proration).
    pub total_days: Decimal,
    /// The policy the entitlement was computed under.
    pub policy: LeavePolicy,
}

/// One entry of the leave usage ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveUsage {
    /// The day the leave was taken.
    pub date: NaiveDate,
    /// Days consumed (half days permitted).
    pub days: Decimal,
    /// Free-text reason recorded on the ledger.
    pub reason: String,
}

/// Entitlement netted against the usage ledger.
///
/// `remaining_days` may be negative when leave was over-used; over-use is
/// reported as a warning, never clamped away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Days entitled for the reference year.
    pub entitled_days: Decimal,
    /// Days consumed per the ledger.
    pub used_days: Decimal,
    /// Entitled minus used; negative on over-use.
    pub remaining_days: Decimal,
    /// Advisory flags (over-use).
    pub warnings: Vec<ComplianceFlag>,
}
