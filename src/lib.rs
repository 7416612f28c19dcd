//! metadata-json-lint - static checks for Puppet module `metadata.json` files.
//!
//! The crate is split the same way the binary runs:
//!
//! - [`metadata`] wraps the parsed JSON document
//! - [`lint`] holds the rule trait, the engine and the built-in rules
//! - [`version_range`] classifies Forge-style version requirements
//! - [`spdx`] is the bundled SPDX license identifier registry
//! - [`config`] and [`cli`] are the command-line shell around the engine
//!
//! # Example
//!
//! ```
//! use metadata_json_lint::lint::{ValidationConfig, ValidationEngine};
//! use metadata_json_lint::metadata::MetadataDocument;
//!
//! let doc: MetadataDocument = r#"{"name": "puppetlabs-ntp"}"#.parse().unwrap();
//! let engine = ValidationEngine::with_builtin_rules(ValidationConfig::default());
//! let result = engine.validate(&doc);
//!
//! assert!(result.has_errors);
//! for diag in &result.diagnostics {
//!     println!("{diag}");
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod metadata;
pub mod spdx;
pub mod version_range;

pub use error::{LintError, Result};
