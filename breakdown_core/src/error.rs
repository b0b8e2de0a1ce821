//! Error type for the places where raw strings enter the control model.
//!
//! The controls themselves never fail: steppers clamp and selectors only
//! offer valid options. Parsing does.

use std::path::PathBuf;

/// Errors raised while parsing option values, routes or configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A raw option value that names no choice of the given control.
    #[error("unknown {control} option: {value:?}")]
    UnknownOption {
        control: &'static str,
        value: String,
    },

    /// A path outside the route table.
    #[error("no page is mounted at {0:?}")]
    UnknownRoute(String),

    /// Unreadable or malformed configuration file.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
