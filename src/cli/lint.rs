//! The lint run: resolve config, load the file, validate, report.

use std::path::Path;

use crate::cli::Cli;
use crate::cli::output::{
    HumanLayout, JsonReport, OutputFormat, emit_human, emit_json, emit_text, summary_line,
};
use crate::config::Config;
use crate::error::{LintError, Result};
use crate::lint::{RuleCategory, ValidationConfig, ValidationEngine};
use crate::metadata::MetadataDocument;

pub fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let mut config = Config::load(cli.config.as_deref(), &cwd)?;
    config.apply_flags(&cli.flag_overrides());

    if cli.list_rules {
        return list_rules(config.format);
    }

    let path = cli.metadata_path();
    lint_file(&path, &config)
}

/// Lint one file and print its diagnostics.
///
/// Returns `ValidationFailed` when the run ends in the error state and
/// `fail_on_warnings` is set; otherwise the error state is only reported.
pub fn lint_file(path: &Path, config: &Config) -> Result<()> {
    let metadata = MetadataDocument::load(path)?;
    let engine = ValidationEngine::with_builtin_rules(config.validation);
    let result = engine.validate(&metadata);

    match config.format {
        OutputFormat::Text => emit_text(&result),
        OutputFormat::Json => emit_json(&JsonReport::new(path, &result))?,
    }

    let verdict = summary_line(path, &result);
    if result.fails(engine.config()) {
        return Err(LintError::ValidationFailed(verdict));
    }
    if result.has_errors {
        tracing::info!("{verdict} (not failing: fail_on_warnings is off)");
    } else {
        tracing::info!("{verdict}");
    }
    Ok(())
}

fn list_rules(format: OutputFormat) -> Result<()> {
    let engine = ValidationEngine::with_builtin_rules(ValidationConfig::default());
    let rules = engine.list_rules();

    if format == OutputFormat::Json {
        return emit_json(&rules);
    }

    let mut layout = HumanLayout::new();
    layout.title("Available checks");

    let categories = [
        (RuleCategory::Structure, "Structure"),
        (RuleCategory::Dependency, "Dependencies"),
        (RuleCategory::License, "License"),
        (RuleCategory::Tag, "Tags"),
    ];

    for (cat, cat_name) in categories {
        let cat_rules: Vec<_> = rules.iter().filter(|r| r.category == cat).collect();
        if cat_rules.is_empty() {
            continue;
        }

        layout.section(cat_name);
        for rule in cat_rules {
            layout.bullet(&format!("{} - {}", rule.id, rule.description));
        }
        layout.blank();
    }

    emit_human(layout);
    Ok(())
}
