//! Versioned statutory rule sets.
//!
//! Every legally mutable figure used by the engine (insurance rates and
//! bases, withholding tax brackets, allowance exemption caps, working-time
//! caps, leave parameters, the minimum wage) lives in a [`RuleSet`] that is
//! passed explicitly into every calculation. Year-over-year legal updates
//! change only the rule set, never the algorithms.

mod loader;
mod types;

pub use loader::RuleLoader;
pub use types::{
    AllowanceRules, InsuranceRules, IncomeTaxRules, LeaveRules, MinimumWageRules, RuleSet,
    RuleSetMetadata, TaxBracket, WorkingTimeRules,
};
