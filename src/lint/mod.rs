//! Metadata linting and validation framework.
//!
//! - `ValidationRule` trait for implementing rules
//! - `ValidationEngine` for running rules against a metadata document
//! - `Diagnostic` types for reporting issues
//! - `ValidationConfig` for the strictness switches
//!
//! # Example
//!
//! ```
//! use metadata_json_lint::lint::{Diagnostic, RuleCategory, Severity, ValidationConfig, ValidationEngine, ValidationRule};
//! use metadata_json_lint::lint::config::ValidationContext;
//! use metadata_json_lint::metadata::MetadataDocument;
//!
//! struct NoForgeRule;
//!
//! impl ValidationRule for NoForgeRule {
//!     fn id(&self) -> &str { "no-forge" }
//!     fn name(&self) -> &str { "No Forge" }
//!     fn description(&self) -> &str { "Flags modules named after the forge" }
//!     fn category(&self) -> RuleCategory { RuleCategory::Structure }
//!     fn default_severity(&self) -> Severity { Severity::Warning }
//!     fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
//!         match ctx.metadata.text("name") {
//!             Some(name) if name.contains("forge") => vec![Diagnostic::warning(self.id(), "suspicious name")],
//!             _ => vec![],
//!         }
//!     }
//! }
//!
//! let engine = ValidationEngine::new(ValidationConfig::default()).with_rule(Box::new(NoForgeRule));
//! let doc: MetadataDocument = r#"{"name": "forge-thing"}"#.parse().unwrap();
//! let result = engine.validate(&doc);
//!
//! assert_eq!(result.warning_count(), 1);
//! assert!(!result.has_errors);
//! ```

pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod rule;
pub mod rules;

// Re-export main types for convenience
pub use config::{ValidationConfig, ValidationContext};
pub use diagnostic::{Diagnostic, RuleCategory, Severity};
pub use engine::{RuleInfo, ValidationEngine, ValidationResult};
pub use rule::{BoxedRule, ValidationRule};

pub use rules::all_rules;
