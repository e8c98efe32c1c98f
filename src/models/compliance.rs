//! Compliance flag model.
//!
//! Compliance conditions are advisory: the engine still returns a computed
//! result so the document can be produced, and the caller decides whether a
//! flagged document may be submitted.

use serde::{Deserialize, Serialize};

/// The kind of compliance condition a flag reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    /// The effective hourly wage is below the statutory floor.
    MinimumWageViolation,
    /// The probation wage is below the reduced probation floor.
    ProbationWageViolation,
    /// The contract's payment schedule does not match the wage period.
    PaymentScheduleMismatch,
    /// A requested exempt allowance exceeded its statutory cap and was clamped.
    AllowanceCapExceeded,
    /// More leave was used than was entitled.
    LeaveOveruse,
}

/// How serious a compliance flag is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational only.
    Info,
    /// Should be reviewed before the document is issued.
    Warning,
    /// Issuing the document would breach the statute.
    Error,
}

/// An advisory compliance condition raised alongside a computed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceFlag {
    /// The kind of condition.
    pub kind: FlagKind,
    /// Human-readable description of the condition.
    pub message: String,
    /// How serious the condition is.
    pub severity: Severity,
}

impl ComplianceFlag {
    /// Creates a warning-severity flag.
    pub fn warning(kind: FlagKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Creates an error-severity flag.
    pub fn error(kind: FlagKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            severity: Severity::Error,
        }
    }
}
