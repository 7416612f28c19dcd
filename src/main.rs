//! metadata-json-lint - Puppet module metadata linter

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use metadata_json_lint::LintError;
use metadata_json_lint::cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match metadata_json_lint::cli::lint::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(LintError::ValidationFailed(verdict)) => {
            eprintln!("{verdict}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,metadata_json_lint=debug",
        2 => "debug,metadata_json_lint=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.format == Some(OutputFormat::Json) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
