//! Leptos UI components shared by the pages.
//!
//! # Component Hierarchy
//!
//! ```text
//! Document (static export only)
//! └── Shell
//!     ├── Header (title + nav links)
//!     ├── <main> page
//!     │   └── FlexPage / GridPage
//!     │       ├── Counter, Toggle, ChoiceSelect, ResetButton
//!     │       ├── Preview
//!     │       └── CssSnippet
//!     └── Footer
//! ```

mod controls;
mod document;
mod preview;
mod shell;

pub use controls::{ChoiceSelect, Counter, ResetButton, Toggle};
pub use document::Document;
pub use preview::{CssSnippet, Preview};
pub use shell::Shell;
