//! clonei - clone a repository and install its dependencies
//!
//! This is the main entry point for the clonei command-line interface.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use clonei_projects::Severity;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Some(Commands::Types(args)) => commands::types::run(args),
        Some(Commands::Detect(args)) => commands::detect::run(args),
        Some(Commands::Install(args)) => commands::install::run(args, config),
        None => commands::clone::run(cli.clone, config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Print an error with the severity of the underlying project error
fn report_error(err: &anyhow::Error) {
    let severity = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<clonei_projects::Error>())
        .map_or(Severity::Error, clonei_projects::Error::severity);

    output::report(severity, &format!("{:#}", err));
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                // Console output covers normal progress; logs are opt-in
                0 => EnvFilter::new("warn"),
                1 => EnvFilter::new("info"),
                2 => EnvFilter::new("debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
