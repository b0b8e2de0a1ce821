//! # breakdown-pages
//!
//! Leptos components for the CSS Breakdown site: the routed shell, the static
//! lessons (Intro, Basics, Selectors) and the Flexbox and Grid playgrounds.
//!
//! The same components serve two builds:
//!
//! - **`csr`**: mounted in the browser by the `app` crate, with a router
//!   around [`components::Shell`] and reactive playground state.
//! - **`ssr`** (default): rendered to static HTML with [`render_page`] /
//!   [`render_site`], playgrounds in their default state.
//!
//! ## Architecture
//!
//! - [`components`] - shell chrome, control widgets, preview, document
//! - [`pages`] - one component per [`Route`]
//! - [`styles`] - base stylesheet plus rules generated from the option tables
//!
//! ```rust
//! use breakdown_core::{Route, SiteConfig};
//!
//! let html = breakdown_pages::render_page(Route::Flex, &SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("flexContainer gap1 row nowrap"));
//! ```

#![recursion_limit = "256"]

pub mod components;
pub mod pages;
pub mod styles;

pub use breakdown_core::Route;

#[cfg(feature = "ssr")]
use breakdown_core::SiteConfig;

/// Render `route` as a complete HTML document.
#[cfg(feature = "ssr")]
pub fn render_page(route: Route, site: &SiteConfig) -> String {
    use components::Document;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let doc = view! { <Document site=site.clone() route=route /> };
    let html = doc.to_html();

    // Leptos doesn't emit a DOCTYPE
    format!("<!DOCTYPE html>\n{html}")
}

/// Render every route, index first.
#[cfg(feature = "ssr")]
pub fn render_site(site: &SiteConfig) -> Vec<(Route, String)> {
    Route::ALL
        .into_iter()
        .map(|route| {
            tracing::debug!(%route, "rendering page");
            (route, render_page(route, site))
        })
        .collect()
}
