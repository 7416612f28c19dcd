//! Validation rule trait.

use super::config::ValidationContext;
use super::diagnostic::{Diagnostic, RuleCategory, Severity};

/// A validation rule that checks a metadata document for issues.
///
/// Rules are stateless. Everything they need, including the strict flags,
/// comes through the `ValidationContext`, so a rule decides for itself
/// whether a warning it emits is blocking.
pub trait ValidationRule: Send + Sync {
    /// Unique identifier for this rule (e.g., "required-fields")
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Detailed description of what this rule checks
    fn description(&self) -> &str;

    /// Category this rule belongs to
    fn category(&self) -> RuleCategory;

    /// Severity of the diagnostics this rule usually emits
    fn default_severity(&self) -> Severity;

    /// Run the validation check
    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic>;
}

/// A boxed validation rule for dynamic dispatch
pub type BoxedRule = Box<dyn ValidationRule>;

/// Helper macro to simplify rule implementation
#[macro_export]
macro_rules! impl_rule {
    (
        $(#[$meta:meta])*
        $struct_name:ident,
        id: $id:expr,
        name: $name:expr,
        description: $desc:expr,
        category: $cat:expr,
        severity: $sev:expr,
        validate: |$ctx:ident| $validate_body:expr
    ) => {
        $(#[$meta])*
        pub struct $struct_name;

        impl $crate::lint::rule::ValidationRule for $struct_name {
            fn id(&self) -> &str {
                $id
            }

            fn name(&self) -> &str {
                $name
            }

            fn description(&self) -> &str {
                $desc
            }

            fn category(&self) -> $crate::lint::diagnostic::RuleCategory {
                $cat
            }

            fn default_severity(&self) -> $crate::lint::diagnostic::Severity {
                $sev
            }

            fn validate(&self, $ctx: &$crate::lint::config::ValidationContext<'_>) -> Vec<$crate::lint::diagnostic::Diagnostic> {
                $validate_body
            }
        }
    };
}

// Re-export the macro
pub use impl_rule;
