//! # breakdown-core
//!
//! The control model behind the CSS Breakdown demo pages.
//!
//! Every interactive demo is a control set: a plain struct of bounded numbers
//! and closed-list choices. User input reaches it only as an action, applied
//! through [`ControlSet::apply`], so no invalid state is reachable. From the
//! current state the page derives one composite class name for the preview
//! container:
//!
//! ```rust
//! use breakdown_core::{ControlSet, FlexAction, FlexControls};
//!
//! let mut flex = FlexControls::default();
//! flex.apply(FlexAction::SetWrap(true));
//! flex.apply(FlexAction::IncrementGap);
//!
//! assert_eq!(
//!     flex.container_class(),
//!     "flexContainer gap1_5 row wrap justifyContent_flex_start alignItems_stretch"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`controls`] - bounded numbers, gaps, the [`Choice`] trait
//! - [`flex`] / [`grid`] - the two demo control sets
//! - [`route`] - path to page mapping
//! - [`config`] - `breakdown.toml` site settings

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controls;
pub mod error;
pub mod flex;
pub mod grid;
pub mod route;

pub use config::SiteConfig;
pub use controls::{Bounded, Choice, ControlSet, Gap};
pub use error::{Error, Result};
pub use flex::{FlexAction, FlexAlign, FlexControls, FlexDirection, FlexJustify};
pub use grid::{
    AlignContent, AlignItems, AutoFlow, GridAction, GridControls, JustifyContent, JustifyItems,
    RowSizing,
};
pub use route::Route;
