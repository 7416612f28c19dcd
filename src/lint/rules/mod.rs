//! Built-in validation rules for metadata linting.
//!
//! - **Structural rules** (`structural`): required and deprecated fields, summary length
//! - **Dependency rules** (`dependencies`): duplicate names and version ranges
//! - **License rule** (`license`): SPDX identifier lookup
//! - **Tag rule** (`tags`): tag container type and whitespace
//!
//! # Usage
//!
//! ```
//! use metadata_json_lint::lint::rules::all_rules;
//! use metadata_json_lint::lint::{ValidationConfig, ValidationEngine};
//!
//! let mut engine = ValidationEngine::new(ValidationConfig::default());
//! for rule in all_rules() {
//!     engine.register(rule);
//! }
//! assert_eq!(engine.rules().len(), 7);
//! ```

pub mod dependencies;
pub mod license;
pub mod structural;
pub mod tags;

use crate::lint::rule::BoxedRule;

// Re-export individual rules for direct use
pub use dependencies::{check_dependencies, check_requirements, DependenciesRule, RequirementsRule};
pub use license::LicenseRule;
pub use structural::{DeprecatedFieldsRule, RequiredFieldsRule, SummaryLengthRule};
pub use tags::{check_tags, TagsRule};

/// Returns all built-in validation rules, in evaluation order.
///
/// Order only affects the order diagnostics are reported in.
pub fn all_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(RequiredFieldsRule),
        Box::new(DependenciesRule),
        Box::new(DeprecatedFieldsRule),
        Box::new(SummaryLengthRule),
        Box::new(LicenseRule),
        Box::new(TagsRule),
        Box::new(RequirementsRule),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_order() {
        let ids: Vec<String> = all_rules().iter().map(|r| r.id().to_string()).collect();
        assert_eq!(
            ids,
            vec![
                "required-fields",
                "dependencies",
                "deprecated-fields",
                "summary-length",
                "license",
                "tags",
                "requirements",
            ]
        );
    }

    #[test]
    fn test_rule_ids_unique() {
        let rules = all_rules();
        let mut ids: Vec<&str> = rules.iter().map(|r| r.id()).collect();
        let original_len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), original_len, "All rule IDs must be unique");
    }
}
