//! fieldgeo CLI - Command-line interface
//!
//! Exposes the fieldgeo geometry utilities to shell pipelines.

mod cli;
mod commands;
mod config_loader;
mod errors;
mod input;
mod output;
mod output_types;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize tracing; logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let json = cli.json;

    // Execute the command
    match commands::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if json {
                output::OutputWriter::new(true).error(format!("{:#}", error));
            } else {
                errors::from_anyhow(error).display();
            }
            ExitCode::FAILURE
        }
    }
}
