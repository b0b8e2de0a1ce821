//! Subcommand implementations.

pub mod classes;
pub mod render;
pub mod routes;

use anyhow::Result;

use crate::cli::Command;

/// Dispatch a parsed subcommand.
pub fn dispatch(command: &Command) -> Result<()> {
    match command {
        Command::Render { out, config } => render::run(out.as_deref(), config.as_deref()),
        Command::Classes(classes) => classes::run(classes),
        Command::Routes => {
            routes::run();
            Ok(())
        }
    }
}
