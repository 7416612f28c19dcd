//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::FlagOverrides;
use crate::metadata::DEFAULT_METADATA_FILE;

pub mod lint;
pub mod output;

pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "metadata-json-lint",
    version,
    about = "Lint a Puppet module's metadata.json",
    long_about = "Checks required and deprecated fields, summary length, SPDX license \
                  identifiers, dependency version ranges and tags."
)]
pub struct Cli {
    /// Path to the metadata file [default: metadata.json]
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Fail when a dependency has an open-ended version requirement
    #[arg(long, overrides_with = "no_strict_dependencies")]
    pub strict_dependencies: bool,

    /// Only warn about open-ended dependency version requirements
    #[arg(long, overrides_with = "strict_dependencies")]
    pub no_strict_dependencies: bool,

    /// Fail when the license is not an SPDX identifier
    #[arg(long, overrides_with = "no_strict_license")]
    pub strict_license: bool,

    /// Only warn about non-SPDX licenses
    #[arg(long, overrides_with = "strict_license")]
    pub no_strict_license: bool,

    /// Exit non-zero when any check fails
    #[arg(long, overrides_with = "no_fail_on_warnings")]
    pub fail_on_warnings: bool,

    /// Report failures but always exit zero
    #[arg(long, overrides_with = "fail_on_warnings")]
    pub no_fail_on_warnings: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file [default: .metadata-json-lint.toml if present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List the checks and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The file to lint.
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_METADATA_FILE))
    }

    /// The `--[no-]` switch pairs, resolved. The last one given wins.
    #[must_use]
    pub const fn flag_overrides(&self) -> FlagOverrides {
        FlagOverrides {
            fail_on_warnings: switch(self.fail_on_warnings, self.no_fail_on_warnings),
            strict_license: switch(self.strict_license, self.no_strict_license),
            strict_dependencies: switch(self.strict_dependencies, self.no_strict_dependencies),
            format: self.format,
        }
    }
}

const fn switch(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}
