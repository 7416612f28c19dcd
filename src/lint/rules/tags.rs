//! Tag formatting rule.

use serde_json::Value;

use crate::lint::config::ValidationContext;
use crate::lint::diagnostic::{Diagnostic, RuleCategory, Severity};
use crate::lint::rule::ValidationRule;

const TAGS_RULE: &str = "tags";

/// Check a `tags` value: it must be an array of strings with no whitespace.
/// At most one diagnostic is produced.
#[must_use]
pub fn check_tags(tags: &Value) -> Option<Diagnostic> {
    let Value::Array(items) = tags else {
        return Some(Diagnostic::error(TAGS_RULE, "tags must be an array of strings"));
    };

    let mut strings = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(tag) => strings.push(tag.as_str()),
            _ => return Some(Diagnostic::error(TAGS_RULE, "tags must be an array of strings")),
        }
    }

    if strings.iter().any(|tag| tag.chars().any(char::is_whitespace)) {
        return Some(Diagnostic::error(TAGS_RULE, "tags must not contain any whitespace"));
    }

    None
}

/// Rule that validates the optional `tags` field.
pub struct TagsRule;

impl ValidationRule for TagsRule {
    fn id(&self) -> &'static str {
        TAGS_RULE
    }

    fn name(&self) -> &'static str {
        "Tags"
    }

    fn description(&self) -> &'static str {
        "Tags must be an array of strings without whitespace"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Tag
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        ctx.metadata
            .get("tags")
            .and_then(check_tags)
            .into_iter()
            .collect()
    }
}
