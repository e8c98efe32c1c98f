//! Rule set loading functionality.
//!
//! This module provides the [`RuleLoader`] type for loading statutory rule
//! sets from YAML files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AllowanceRules, IncomeTaxRules, InsuranceRules, LeaveRules, MinimumWageRules, RuleSet,
    RuleSetMetadata, WorkingTimeRules,
};

/// Structure of `labor.yaml`, grouping the non-monetary statute parameters.
#[derive(Debug, Clone, Deserialize)]
struct LaborRulesFile {
    working_time: WorkingTimeRules,
    leave: LeaveRules,
    minimum_wage: MinimumWageRules,
}

/// Loads and provides access to a statutory rule set.
///
/// The `RuleLoader` reads YAML rule files from a directory and exposes the
/// aggregated [`RuleSet`] consumed by every calculator.
///
/// # Directory Structure
///
/// The rule directory should have the following structure:
/// ```text
/// config/kr2026/
/// ├── ruleset.yaml     # Rule set metadata
/// ├── insurance.yaml   # Mandatory insurance rates and bounds
/// ├── income_tax.yaml  # Simplified withholding table
/// ├── allowances.yaml  # Exemption caps for allowance buckets
/// └── labor.yaml       # Working time, leave and minimum wage parameters
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::rules::RuleLoader;
///
/// let loader = RuleLoader::load("./config/kr2026").unwrap();
/// let rules = loader.rule_set();
/// println!("Rule set version: {}", rules.metadata().version);
/// ```
#[derive(Debug, Clone)]
pub struct RuleLoader {
    rule_set: RuleSet,
}

impl RuleLoader {
    /// Loads a rule set from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rule directory (e.g., "./config/kr2026")
    ///
    /// # Returns
    ///
    /// Returns a `RuleLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from a file
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RuleSetMetadata>(&path.join("ruleset.yaml"))?;
        let insurance = Self::load_yaml::<InsuranceRules>(&path.join("insurance.yaml"))?;
        let income_tax = Self::load_yaml::<IncomeTaxRules>(&path.join("income_tax.yaml"))?;
        let allowances = Self::load_yaml::<AllowanceRules>(&path.join("allowances.yaml"))?;
        let labor = Self::load_yaml::<LaborRulesFile>(&path.join("labor.yaml"))?;

        let rule_set = RuleSet::new(
            metadata,
            insurance,
            income_tax,
            allowances,
            labor.working_time,
            labor.leave,
            labor.minimum_wage,
        );

        Ok(Self { rule_set })
    }

    /// Wraps an already-constructed rule set, e.g. [`RuleSet::kr_2026`].
    pub fn from_rule_set(rule_set: RuleSet) -> Self {
        Self { rule_set }
    }

    /// Returns the loaded rule set.
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::RuleSetNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::RuleSetParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
