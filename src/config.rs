//! Layered run configuration: defaults, TOML file, environment, flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::output::OutputFormat;
use crate::error::{LintError, Result};
use crate::lint::ValidationConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "METADATA_JSON_LINT_CONFIG";

/// Config file picked up from the working directory when present.
pub const PROJECT_CONFIG_FILE: &str = ".metadata-json-lint.toml";

const ENV_FAIL_ON_WARNINGS: &str = "METADATA_JSON_LINT_FAIL_ON_WARNINGS";
const ENV_STRICT_LICENSE: &str = "METADATA_JSON_LINT_STRICT_LICENSE";
const ENV_STRICT_DEPENDENCIES: &str = "METADATA_JSON_LINT_STRICT_DEPENDENCIES";

/// Resolved settings for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub validation: ValidationConfig,
    pub format: OutputFormat,
}

/// Switches given on the command line. `None` leaves the lower layer alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    pub fail_on_warnings: Option<bool>,
    pub strict_license: Option<bool>,
    pub strict_dependencies: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Defaults, then the config file, then environment variables.
    /// Command-line flags are applied afterwards with [`Config::apply_flags`].
    pub fn load(explicit_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                LintError::Config(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else if let Some(patch) = Self::load_patch(&cwd.join(PROJECT_CONFIG_FILE))? {
            config.merge_patch(patch);
        }

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| LintError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| LintError::Config(format!("parse config {}: {err}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(value) = patch.fail_on_warnings {
            self.validation.fail_on_warnings = value;
        }
        if let Some(value) = patch.strict_license {
            self.validation.strict_license = value;
        }
        if let Some(value) = patch.strict_dependencies {
            self.validation.strict_dependencies = value;
        }
        if let Some(value) = patch.format {
            self.format = value;
        }
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = env_bool(&lookup, ENV_FAIL_ON_WARNINGS)? {
            self.validation.fail_on_warnings = value;
        }
        if let Some(value) = env_bool(&lookup, ENV_STRICT_LICENSE)? {
            self.validation.strict_license = value;
        }
        if let Some(value) = env_bool(&lookup, ENV_STRICT_DEPENDENCIES)? {
            self.validation.strict_dependencies = value;
        }
        Ok(())
    }

    /// Apply command-line switches, the highest-precedence layer.
    pub fn apply_flags(&mut self, flags: &FlagOverrides) {
        if let Some(value) = flags.fail_on_warnings {
            self.validation.fail_on_warnings = value;
        }
        if let Some(value) = flags.strict_license {
            self.validation.strict_license = value;
        }
        if let Some(value) = flags.strict_dependencies {
            self.validation.strict_dependencies = value;
        }
        if let Some(value) = flags.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    pub fail_on_warnings: Option<bool>,
    pub strict_license: Option<bool>,
    pub strict_dependencies: Option<bool>,
    pub format: Option<OutputFormat>,
}

fn env_bool(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<bool>> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(LintError::Config(format!(
                "invalid {key} value {value} (expected true or false)"
            ))),
        },
    }
}
