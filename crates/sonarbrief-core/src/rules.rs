// Rust guideline compliant 2026-10-19

//! Rule display names.

use crate::client::{SonarClient, Transport};
use crate::models::RuleResponse;

/// Text used when the rule name cannot be retrieved.
pub const RULE_NOT_AVAILABLE: &str = "N/A";

impl<T: Transport> SonarClient<T> {
    /// Returns the display name of `rule_id`, or `"N/A"`.
    ///
    /// Failures are not logged; the report simply shows `N/A`.
    pub fn fetch_rule_description(&self, rule_id: &str) -> String {
        self.get_json::<RuleResponse>("rules/show", &[("key", rule_id.to_string())])
            .ok()
            .and_then(|response| response.rule)
            .and_then(|rule| rule.name)
            .unwrap_or_else(|| RULE_NOT_AVAILABLE.to_string())
    }
}
