//! Severance settlement models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gross pay over one calendar period of the three-month reference window.
///
/// `gross_pay` already includes any bonus component attributed to the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageSample {
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Calendar days in the period.
    pub calendar_days: u32,
}

/// Input for a severance settlement: the last three months of pay and the
/// tenure span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceRecord {
    /// The last three monthly wage samples, oldest first.
    pub samples: [WageSample; 3],
    /// Total tenure in calendar days.
    pub tenure_days: u32,
}

/// The computed severance settlement.
///
/// The arithmetic result is always returned; `entitled` is false when the
/// tenure is below one year and the statutory entitlement is zero. Callers
/// must honor the flag rather than the raw amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceResult {
    /// Average daily wage over the reference window.
    pub avg_daily_wage: Decimal,
    /// avg_daily_wage x 30 x (tenure_days / 365), rounded to whole KRW.
    pub severance_amount: Decimal,
    /// Whether the statutory one-year tenure threshold is met.
    pub entitled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization_round_trip() {
        let record = SeveranceRecord {
            samples: [
                WageSample {
                    gross_pay: Decimal::from(3_000_000),
                    calendar_days: 31,
                },
                WageSample {
                    gross_pay: Decimal::from(3_000_000),
                    calendar_days: 30,
                },
                WageSample {
                    gross_pay: Decimal::from(3_200_000),
                    calendar_days: 31,
                },
            ],
            tenure_days: 730,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: SeveranceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
