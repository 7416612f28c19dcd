//! Dependency and requirement rules.
//!
//! Both lists share a record shape (`name` plus an optional
//! `version_requirement`) and the same range hygiene checks; they differ in
//! wording and in what a requirement on Puppet Enterprise means.

use std::collections::HashSet;

use serde_json::Value;

use crate::lint::config::{ValidationConfig, ValidationContext};
use crate::lint::diagnostic::{Diagnostic, RuleCategory, Severity};
use crate::lint::rule::ValidationRule;
use crate::metadata::{DependencyRecord, RecordEntry};
use crate::version_range::VersionRange;

const DEPENDENCIES_RULE: &str = "dependencies";
const REQUIREMENTS_RULE: &str = "requirements";

/// Outcome of classifying one record's `version_requirement`.
enum RangeCheck {
    Bounded,
    OpenEnded,
    Invalid(String),
}

fn classify(record: &DependencyRecord) -> RangeCheck {
    let expr = match &record.version_requirement {
        None => return RangeCheck::OpenEnded,
        Some(Value::String(expr)) => expr,
        Some(other) => {
            return RangeCheck::Invalid(format!("expected a string, found {other}"));
        }
    };

    match VersionRange::parse(expr) {
        Ok(range) => {
            tracing::trace!(name = %record.name, expr = %expr, range = %range, "classified version requirement");
            if range.is_open_ended() {
                RangeCheck::OpenEnded
            } else {
                RangeCheck::Bounded
            }
        }
        Err(err) => RangeCheck::Invalid(err.to_string()),
    }
}

/// Which list a walk is checking; decides the rule id and the wording.
#[derive(Debug, Clone, Copy)]
enum ListKind {
    Dependencies,
    Requirements,
}

impl ListKind {
    const fn rule(self) -> &'static str {
        match self {
            Self::Dependencies => DEPENDENCIES_RULE,
            Self::Requirements => REQUIREMENTS_RULE,
        }
    }

    const fn shape_message(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies must be an array of objects with a 'name' string",
            Self::Requirements => "requirements must be an array of objects with a 'name' string",
        }
    }
}

/// One pass over a list, in order. Names seen so far carry across entries,
/// including past malformed ones.
struct RecordWalk<'a> {
    kind: ListKind,
    config: &'a ValidationConfig,
    seen: HashSet<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RecordWalk<'a> {
    fn new(kind: ListKind, config: &'a ValidationConfig) -> Self {
        Self {
            kind,
            config,
            seen: HashSet::new(),
            diagnostics: Vec::new(),
        }
    }

    fn entry(&mut self, entry: &RecordEntry) {
        match entry {
            Ok(record) => self.record(record),
            Err(detail) => self.malformed(detail),
        }
    }

    fn record(&mut self, record: &DependencyRecord) {
        match self.kind {
            ListKind::Dependencies => self.dependency(record),
            ListKind::Requirements => self.requirement(record),
        }
    }

    fn malformed(&mut self, detail: &str) {
        tracing::debug!(rule = self.kind.rule(), %detail, "malformed list entry");
        self.diagnostics
            .push(Diagnostic::error(self.kind.rule(), self.kind.shape_message()));
    }

    fn dependency(&mut self, dep: &DependencyRecord) {
        if !self.seen.insert(dep.name.clone()) {
            self.diagnostics.push(Diagnostic::error(
                DEPENDENCIES_RULE,
                format!("duplicate dependencies on {}", dep.name),
            ));
        }

        match classify(dep) {
            RangeCheck::Bounded => {}
            RangeCheck::OpenEnded => self.diagnostics.push(
                Diagnostic::warning(
                    DEPENDENCIES_RULE,
                    format!(
                        "Dependency {} has an open ended dependency version requirement {}",
                        dep.name,
                        dep.requirement_text()
                    ),
                )
                .blocking_if(self.config.strict_dependencies),
            ),
            RangeCheck::Invalid(detail) => self.diagnostics.push(Diagnostic::error(
                DEPENDENCIES_RULE,
                format!("Invalid 'version_requirement' field: {detail}"),
            )),
        }
    }

    fn requirement(&mut self, req: &DependencyRecord) {
        if !self.seen.insert(req.name.clone()) {
            self.diagnostics.push(Diagnostic::error(
                REQUIREMENTS_RULE,
                format!("duplicate requirements on {}", req.name),
            ));
        }

        if req.name == "pe" {
            self.diagnostics.push(Diagnostic::warning(
                REQUIREMENTS_RULE,
                "The 'pe' requirement is no longer supported by the Forge.",
            ));
        }

        if req.version_requirement.is_none() {
            return;
        }

        match classify(req) {
            RangeCheck::Bounded => {}
            RangeCheck::OpenEnded => self.diagnostics.push(
                Diagnostic::warning(
                    REQUIREMENTS_RULE,
                    format!(
                        "Requirement {} has an open ended version requirement {}",
                        req.name,
                        req.requirement_text()
                    ),
                )
                .blocking_if(self.config.strict_dependencies),
            ),
            RangeCheck::Invalid(detail) => self.diagnostics.push(Diagnostic::error(
                REQUIREMENTS_RULE,
                format!("Invalid 'version_requirement' field: {detail}"),
            )),
        }
    }

    fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Run a walk over a list as found in the document.
fn check_list(
    kind: ListKind,
    list: Option<Result<Vec<RecordEntry>, String>>,
    config: &ValidationConfig,
) -> Vec<Diagnostic> {
    let mut walk = RecordWalk::new(kind, config);
    match list {
        None => {}
        Some(Ok(entries)) => entries.iter().for_each(|entry| walk.entry(entry)),
        Some(Err(detail)) => walk.malformed(&detail),
    }
    walk.finish()
}

/// Check a `dependencies` list: duplicate names and version range hygiene.
///
/// A duplicate is reported once per repeated occurrence. A missing
/// requirement is treated like an open-ended one.
#[must_use]
pub fn check_dependencies(deps: &[DependencyRecord], config: &ValidationConfig) -> Vec<Diagnostic> {
    let mut walk = RecordWalk::new(ListKind::Dependencies, config);
    deps.iter().for_each(|dep| walk.record(dep));
    walk.finish()
}

/// Check a `requirements` list. Unlike dependencies, a requirement without a
/// version range is fine; `pe` is reported as unsupported.
#[must_use]
pub fn check_requirements(reqs: &[DependencyRecord], config: &ValidationConfig) -> Vec<Diagnostic> {
    let mut walk = RecordWalk::new(ListKind::Requirements, config);
    reqs.iter().for_each(|req| walk.record(req));
    walk.finish()
}

/// Rule that validates the `dependencies` list.
pub struct DependenciesRule;

impl ValidationRule for DependenciesRule {
    fn id(&self) -> &'static str {
        DEPENDENCIES_RULE
    }

    fn name(&self) -> &'static str {
        "Dependencies"
    }

    fn description(&self) -> &'static str {
        "Dependency names must be unique and version requirements must parse and have an upper bound"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Dependency
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        check_list(ListKind::Dependencies, ctx.metadata.dependencies(), ctx.config)
    }
}

/// Rule that validates the optional `requirements` list.
pub struct RequirementsRule;

impl ValidationRule for RequirementsRule {
    fn id(&self) -> &'static str {
        REQUIREMENTS_RULE
    }

    fn name(&self) -> &'static str {
        "Requirements"
    }

    fn description(&self) -> &'static str {
        "Requirement names must be unique, ranges must parse, and 'pe' is no longer supported"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Dependency
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<Diagnostic> {
        check_list(ListKind::Requirements, ctx.metadata.requirements(), ctx.config)
    }
}
