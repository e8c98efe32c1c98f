//! Statutory Payroll & Leave Compliance Calculation Engine.
//!
//! This crate implements the deterministic rules of the Korean Labor Standards
//! Act that turn raw wage and working-time inputs into working-hour breakdowns,
//! tax-exempt allowance allocations, mandatory insurance premiums, withheld
//! income tax, annual-leave entitlements and severance settlements.
//!
//! Every calculation is a pure function of its inputs plus a versioned
//! [`rules::RuleSet`] carrying the legally mutable figures (this crate ships
//! the 2026 rule set). The engine holds no state between calls.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod rules;
