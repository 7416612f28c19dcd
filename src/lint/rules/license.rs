//! License identifier rule.

use crate::lint::config::ValidationContext;
use crate::lint::diagnostic::{Diagnostic, RuleCategory, Severity};
use crate::lint::rule::ValidationRule;
use crate::spdx;

/// Licence value accepted without an SPDX lookup.
pub const PROPRIETARY: &str = "proprietary";

/// Rule that checks `license` against the bundled SPDX registry.
///
/// An unknown identifier is always reported as a warning; it only puts the
/// run in the error state when `strict_license` is set.
pub struct LicenseRule;

impl ValidationRule for LicenseRule {
    fn id(&self) -> &'static str {
        "license"
    }

    fn name(&self) -> &'static str {
        "SPDX License"
    }

    fn description(&self) -> &'static str {
        "The license must be an SPDX identifier or 'proprietary'"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::License
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        let Some(license) = ctx.metadata.text("license") else {
            return vec![];
        };

        if license == PROPRIETARY || spdx::is_known_license(&license) {
            return vec![];
        }

        vec![Diagnostic::warning(
            self.id(),
            format!("License identifier {license} is not in the SPDX list"),
        )
        .blocking_if(ctx.config.strict_license)]
    }
}
