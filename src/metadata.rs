//! The `metadata.json` document as seen by the rules.
//!
//! The document is kept as a raw JSON object: rules look fields up by name
//! and decide for themselves what shape they expect, so a malformed field
//! becomes a diagnostic instead of a parse failure.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{LintError, Result};

/// File linted when no path is given on the command line.
pub const DEFAULT_METADATA_FILE: &str = "metadata.json";

/// Fields every module must declare.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "version",
    "author",
    "license",
    "summary",
    "source",
    "dependencies",
];

/// Fields the Forge no longer accepts.
pub const DEPRECATED_FIELDS: [&str; 2] = ["types", "checksum"];

/// Maximum length of `summary`, in characters.
pub const SUMMARY_MAX_CHARS: usize = 144;

/// A parsed module metadata document.
#[derive(Debug, Clone, Default)]
pub struct MetadataDocument {
    fields: Map<String, Value>,
}

impl MetadataDocument {
    /// Wrap an already-parsed JSON value. Returns `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Parse raw JSON text. `path` is only used for error messages.
    pub fn parse(raw: &str, path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|source| LintError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(value).ok_or_else(|| LintError::NotAnObject {
            path: path.to_path_buf(),
        })
    }

    /// Read and parse a metadata file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| LintError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = raw.len(), "loaded metadata");
        Self::parse(&raw, path)
    }

    /// Look up a field. A JSON `null` counts as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Look up a field and render it as text. Strings are returned as-is;
    /// any other value is rendered as compact JSON.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// The `dependencies` list, if present.
    ///
    /// `Some(Err(_))` means the field exists but is not an array. Each
    /// element is parsed on its own, so one malformed entry does not hide
    /// the others.
    #[must_use]
    pub fn dependencies(&self) -> Option<std::result::Result<Vec<RecordEntry>, String>> {
        self.get("dependencies").map(DependencyRecord::list_from_value)
    }

    /// The `requirements` list, if present. Same record shape as dependencies.
    #[must_use]
    pub fn requirements(&self) -> Option<std::result::Result<Vec<RecordEntry>, String>> {
        self.get("requirements").map(DependencyRecord::list_from_value)
    }

    /// Number of top-level fields, including explicit nulls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl std::str::FromStr for MetadataDocument {
    type Err = LintError;

    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(raw, Path::new(DEFAULT_METADATA_FILE))
    }
}

/// One element of a `dependencies` or `requirements` array: the record, or
/// why the element is not one.
pub type RecordEntry = std::result::Result<DependencyRecord, String>;

/// One entry of `dependencies` or `requirements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    /// Kept as raw JSON so a non-string requirement can be reported
    /// rather than rejected at parse time.
    #[serde(default)]
    pub version_requirement: Option<Value>,
}

impl DependencyRecord {
    pub fn new(name: impl Into<String>, version_requirement: Option<&str>) -> Self {
        Self {
            name: name.into(),
            version_requirement: version_requirement.map(|req| Value::String(req.to_string())),
        }
    }

    fn list_from_value(value: &Value) -> std::result::Result<Vec<RecordEntry>, String> {
        let Value::Array(items) = value else {
            return Err(format!("expected an array, found {value}"));
        };
        Ok(items
            .iter()
            .map(|item| Self::deserialize(item).map_err(|err| err.to_string()))
            .collect())
    }

    /// The requirement rendered for messages; absent renders as empty.
    #[must_use]
    pub fn requirement_text(&self) -> String {
        match &self.version_requirement {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
