//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain value records used throughout the
//! engine. Every record is an immutable input or output of a single
//! calculation call; the engine never stores or mutates them between calls.

mod compliance;
mod leave;
mod payslip;
mod schedule;
mod severance;
mod wage;

pub use compliance::{ComplianceFlag, FlagKind, Severity};
pub use leave::{LeaveBalance, LeaveEntitlement, LeavePolicy, LeaveUsage};
pub use payslip::PayslipResult;
pub use schedule::{ShiftSchedule, TimeBreakdownResult};
pub use severance::{SeveranceRecord, SeveranceResult, WageSample};
pub use wage::{Eligibility, InsurancePremiums, SalarySplit, WageComponents, WithholdingTax};
