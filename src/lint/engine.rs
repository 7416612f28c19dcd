//! Validation engine for running rules against a metadata document.

use crate::metadata::MetadataDocument;

use super::config::{ValidationConfig, ValidationContext};
use super::diagnostic::{Diagnostic, RuleCategory, Severity};
use super::rule::BoxedRule;
use super::rules::all_rules;

/// Result of validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// All diagnostics collected, in emission order
    pub diagnostics: Vec<Diagnostic>,
    /// Whether any blocking diagnostic was emitted
    pub has_errors: bool,
}

impl ValidationResult {
    /// Create a new empty result
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
            has_errors: false,
        }
    }

    fn push(&mut self, diag: Diagnostic) {
        self.has_errors |= diag.blocking;
        self.diagnostics.push(diag);
    }

    /// Get error diagnostics
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Get warning diagnostics
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Get count of errors
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Get count of warnings
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Whether the run fails under `config`: error state plus `fail_on_warnings`.
    #[must_use]
    pub const fn fails(&self, config: &ValidationConfig) -> bool {
        self.has_errors && config.fail_on_warnings
    }
}

/// The validation engine that manages and runs rules
pub struct ValidationEngine {
    rules: Vec<BoxedRule>,
    config: ValidationConfig,
}

impl ValidationEngine {
    /// Create a new validation engine with the given config and no rules
    #[must_use]
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    /// Create an engine with every built-in rule registered, in evaluation order
    #[must_use]
    pub fn with_builtin_rules(config: ValidationConfig) -> Self {
        let mut engine = Self::new(config);
        for rule in all_rules() {
            engine.register(rule);
        }
        engine
    }

    /// Register a validation rule
    pub fn register(&mut self, rule: BoxedRule) {
        self.rules.push(rule);
    }

    /// Register a validation rule (builder pattern)
    #[must_use]
    pub fn with_rule(mut self, rule: BoxedRule) -> Self {
        self.register(rule);
        self
    }

    /// Get registered rules
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Get the config
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a metadata document
    #[must_use]
    pub fn validate(&self, metadata: &MetadataDocument) -> ValidationResult {
        let ctx = ValidationContext::new(metadata, &self.config);
        self.validate_with_context(&ctx)
    }

    /// Validate with a custom context. Every rule runs; nothing short-circuits.
    #[must_use]
    pub fn validate_with_context(&self, ctx: &ValidationContext<'_>) -> ValidationResult {
        let mut result = ValidationResult::new();

        for rule in &self.rules {
            let rule_diagnostics = rule.validate(ctx);
            tracing::debug!(
                rule = rule.id(),
                found = rule_diagnostics.len(),
                "rule evaluated"
            );

            for diag in rule_diagnostics {
                result.push(diag.with_category(rule.category()));
            }
        }

        tracing::debug!(
            errors = result.error_count(),
            warnings = result.warning_count(),
            has_errors = result.has_errors,
            "validation finished"
        );
        result
    }

    /// List all registered rules
    #[must_use]
    pub fn list_rules(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id().to_string(),
                name: r.name().to_string(),
                description: r.description().to_string(),
                category: r.category(),
                default_severity: r.default_severity(),
            })
            .collect()
    }
}

/// Information about a registered rule
#[derive(Debug, Clone, serde::Serialize)]
pub struct RuleInfo {
    /// Rule ID
    pub id: String,
    /// Rule name
    pub name: String,
    /// Rule description
    pub description: String,
    /// Rule category
    pub category: RuleCategory,
    /// Default severity
    pub default_severity: Severity,
}
