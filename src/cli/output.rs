//! Rendering diagnostics and reports to stdout.

use std::path::Path;

use clap::ValueEnum;
use console::style;
use serde::{Deserialize, Serialize};

use crate::error::{LintError, Result};
use crate::lint::{Diagnostic, Severity, ValidationResult};

/// How diagnostics are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Error:`/`Warning:` line per diagnostic
    #[default]
    Text,
    /// A single JSON object with errors and warnings
    Json,
}

/// Machine-readable report for `--format json`.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub result: String,
    pub errors: Vec<JsonFinding>,
    pub warnings: Vec<JsonFinding>,
}

#[derive(Debug, Serialize)]
pub struct JsonFinding {
    pub check: String,
    pub msg: String,
}

impl JsonReport {
    #[must_use]
    pub fn new(path: &Path, result: &ValidationResult) -> Self {
        let finding = |d: &Diagnostic| JsonFinding {
            check: d.rule_id.clone(),
            msg: d.message.clone(),
        };

        Self {
            result: summary_line(path, result),
            errors: result.errors().map(finding).collect(),
            warnings: result.warnings().map(finding).collect(),
        }
    }
}

/// One-line verdict for a file.
#[must_use]
pub fn summary_line(path: &Path, result: &ValidationResult) -> String {
    if result.has_errors {
        format!("Errors found in {}", path.display())
    } else if result.warning_count() > 0 {
        format!("Warnings found in {}", path.display())
    } else {
        format!("No errors or warnings found in {}", path.display())
    }
}

/// Render a diagnostic as `Error: <msg>` or `Warning: <msg>`.
#[must_use]
pub fn render_diagnostic(diag: &Diagnostic) -> String {
    let label = match diag.severity {
        Severity::Error => style("Error").red().bold(),
        Severity::Warning => style("Warning").yellow(),
    };
    format!("{label}: {}", diag.message)
}

/// Print every diagnostic, in order, one per line.
pub fn emit_text(result: &ValidationResult) {
    for diag in &result.diagnostics {
        println!("{}", render_diagnostic(diag));
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| LintError::Serialization(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

pub struct HumanLayout {
    lines: Vec<String>,
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Diagnostic;

    fn result_with(diagnostics: Vec<Diagnostic>) -> ValidationResult {
        let has_errors = diagnostics.iter().any(|d| d.blocking);
        ValidationResult {
            diagnostics,
            has_errors,
        }
    }

    #[test]
    fn test_render_diagnostic_plain_text() {
        let diag = Diagnostic::error("required-fields", "Required field 'name' not found");
        let rendered = console::strip_ansi_codes(&render_diagnostic(&diag)).to_string();
        assert_eq!(rendered, "Error: Required field 'name' not found");

        let diag = Diagnostic::warning("license", "License identifier X is not in the SPDX list");
        let rendered = console::strip_ansi_codes(&render_diagnostic(&diag)).to_string();
        assert_eq!(rendered, "Warning: License identifier X is not in the SPDX list");
    }

    #[test]
    fn test_summary_line() {
        let path = Path::new("metadata.json");
        assert_eq!(
            summary_line(path, &ValidationResult::new()),
            "No errors or warnings found in metadata.json"
        );
        assert_eq!(
            summary_line(path, &result_with(vec![Diagnostic::warning("license", "x")])),
            "Warnings found in metadata.json"
        );
        assert_eq!(
            summary_line(path, &result_with(vec![Diagnostic::error("tags", "x")])),
            "Errors found in metadata.json"
        );
    }

    #[test]
    fn test_json_report_splits_by_severity() {
        let result = result_with(vec![
            Diagnostic::error("tags", "tags must be an array of strings"),
            Diagnostic::warning("license", "License identifier X is not in the SPDX list")
                .blocking_if(true),
        ]);
        let report = JsonReport::new(Path::new("metadata.json"), &result);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["result"], "Errors found in metadata.json");
        assert_eq!(value["errors"][0]["check"], "tags");
        assert_eq!(value["warnings"][0]["check"], "license");
        assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_human_layout() {
        let mut layout = HumanLayout::new();
        layout.section("Structure").bullet("required-fields").blank();
        let text = console::strip_ansi_codes(&layout.build()).to_string();
        assert_eq!(text, "Structure\n---------\n- required-fields\n");
    }
}
