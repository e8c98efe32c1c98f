//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::rules::RuleLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded statutory rule set.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rule set.
    rules: Arc<RuleLoader>,
}

impl AppState {
    /// Creates a new application state with the given rule loader.
    pub fn new(rules: RuleLoader) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Returns a reference to the rule loader.
    pub fn rules(&self) -> &RuleLoader {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
