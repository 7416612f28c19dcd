//! Diagnostic types for metadata validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of validation rule
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Required and deprecated fields, summary length
    Structure,
    /// Dependency and requirement version ranges
    Dependency,
    /// License identifiers
    License,
    /// Tag formatting
    Tag,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Dependency => write!(f, "dependency"),
            Self::License => write!(f, "license"),
            Self::Tag => write!(f, "tag"),
        }
    }
}

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported; fails the run only under the matching strict flag
    Warning,
    /// Always fails the run
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A diagnostic message from validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule ID that generated this diagnostic
    pub rule_id: String,
    /// Severity level
    pub severity: Severity,
    /// The diagnostic message
    pub message: String,
    /// Whether this diagnostic puts the run into the error state.
    /// Always true for errors; for warnings it follows the strict flags.
    pub blocking: bool,
    /// Category of the rule
    pub category: RuleCategory,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(rule_id: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
            blocking: severity == Severity::Error,
            category: RuleCategory::Structure,
        }
    }

    /// Create an error diagnostic
    pub fn error(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule_id, Severity::Error, message)
    }

    /// Create a (non-blocking) warning diagnostic
    pub fn warning(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule_id, Severity::Warning, message)
    }

    /// Make a warning blocking when `strict` is set. Errors stay blocking.
    #[must_use]
    pub const fn blocking_if(mut self, strict: bool) -> Self {
        self.blocking = self.blocking || strict;
        self
    }

    /// Set the category
    #[must_use]
    pub const fn with_category(mut self, category: RuleCategory) -> Self {
        self.category = category;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}
