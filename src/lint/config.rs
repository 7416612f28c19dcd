//! Validation configuration.

use serde::{Deserialize, Serialize};

use crate::metadata::MetadataDocument;

/// The three switches that decide which findings fail a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Treat an error state as a hard failure (non-zero exit)
    pub fail_on_warnings: bool,

    /// Unknown license identifiers put the run in the error state
    pub strict_license: bool,

    /// Open-ended dependency ranges put the run in the error state
    pub strict_dependencies: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fail_on_warnings: true,
            strict_license: true,
            strict_dependencies: false,
        }
    }
}

impl ValidationConfig {
    /// Create a new default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn fail_on_warnings(mut self, value: bool) -> Self {
        self.fail_on_warnings = value;
        self
    }

    #[must_use]
    pub const fn strict_license(mut self, value: bool) -> Self {
        self.strict_license = value;
        self
    }

    #[must_use]
    pub const fn strict_dependencies(mut self, value: bool) -> Self {
        self.strict_dependencies = value;
        self
    }
}

/// Context provided to validation rules during validation
pub struct ValidationContext<'a> {
    /// The document being validated
    pub metadata: &'a MetadataDocument,

    /// Configuration for validation
    pub config: &'a ValidationConfig,
}

impl<'a> ValidationContext<'a> {
    /// Create a minimal context for validation
    #[must_use]
    pub const fn new(metadata: &'a MetadataDocument, config: &'a ValidationConfig) -> Self {
        Self { metadata, config }
    }
}
