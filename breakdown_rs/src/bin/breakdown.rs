//! `breakdown` binary entry point.

use std::process::ExitCode;

use breakdown::{Cli, commands};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match commands::dispatch(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[breakdown] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
