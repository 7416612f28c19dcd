//! Error types for metadata-json-lint.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Rule violations are reported as diagnostics, not through
/// this type; only conditions that abort the whole run end up here.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    ValidationFailed(String),
}

pub type Result<T> = std::result::Result<T, LintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LintError::Parse {
            path: PathBuf::from("metadata.json"),
            source,
        };
        assert!(err.to_string().starts_with("Unable to parse metadata.json:"));
    }

    #[test]
    fn test_validation_failed_is_verbatim() {
        let err = LintError::ValidationFailed("Errors found in metadata.json".into());
        assert_eq!(err.to_string(), "Errors found in metadata.json");
    }
}
