//! Structural validation rules for metadata documents.
//!
//! These rules check which top-level fields are present and that the
//! summary stays within the Forge's length limit.

use crate::impl_rule;
use crate::lint::config::ValidationContext;
use crate::lint::diagnostic::{Diagnostic, RuleCategory, Severity};
use crate::lint::rule::ValidationRule;
use crate::metadata::{DEPRECATED_FIELDS, REQUIRED_FIELDS, SUMMARY_MAX_CHARS};

/// Rule that checks for required metadata fields.
pub struct RequiredFieldsRule;

impl ValidationRule for RequiredFieldsRule {
    fn id(&self) -> &'static str {
        "required-fields"
    }

    fn name(&self) -> &'static str {
        "Required Fields"
    }

    fn description(&self) -> &'static str {
        "Modules must declare name, version, author, license, summary, source and dependencies"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Structure
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        REQUIRED_FIELDS
            .iter()
            .filter(|field| !ctx.metadata.contains(field))
            .map(|field| Diagnostic::error(self.id(), format!("Required field '{field}' not found")))
            .collect()
    }
}

impl_rule!(
    /// Rule that rejects fields the Forge no longer accepts.
    DeprecatedFieldsRule,
    id: "deprecated-fields",
    name: "Deprecated Fields",
    description: "The 'types' and 'checksum' fields are deprecated and must be removed",
    category: RuleCategory::Structure,
    severity: Severity::Error,
    validate: |ctx| {
        DEPRECATED_FIELDS
            .iter()
            .filter(|field| ctx.metadata.contains(field))
            .map(|field| Diagnostic::error("deprecated-fields", format!("Deprecated field '{field}' found")))
            .collect()
    }
);

impl_rule!(
    /// Rule that caps the summary length.
    SummaryLengthRule,
    id: "summary-length",
    name: "Summary Length",
    description: "The summary must not exceed 144 characters",
    category: RuleCategory::Structure,
    severity: Severity::Error,
    validate: |ctx| {
        match ctx.metadata.text("summary") {
            Some(summary) if summary.chars().count() > SUMMARY_MAX_CHARS => vec![Diagnostic::error(
                "summary-length",
                format!("summary exceeds {SUMMARY_MAX_CHARS} characters"),
            )],
            _ => vec![],
        }
    }
);
