//! # css-breakdown
//!
//! Command line companion to the CSS Breakdown site.
//!
//! ```bash
//! # Static export of every page (into `out_dir` from breakdown.toml, or dist/)
//! breakdown render --out dist
//!
//! # Class name the Flexbox playground derives for a control set
//! breakdown classes flex --items 5 --wrap --justify-content center
//!
//! # Same, with item class, control values and generated CSS
//! breakdown classes grid --columns 4 --auto-flow "row dense" --json
//!
//! breakdown routes
//! ```

pub mod cli;
pub mod commands;

pub use cli::Cli;
