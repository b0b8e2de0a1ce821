//! Site configuration.
//!
//! Loads optional `breakdown.toml` from the working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::route::Route;

/// Name of the config file looked up when none is given explicitly.
pub const CONFIG_FILE: &str = "breakdown.toml";

/// Settings shared by the shell and the static export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title shown in the header and the document title.
    pub title: String,
    /// Footer text.
    pub footer: String,
    /// Prefix prepended to every internal link, e.g. `/css-breakdown`
    /// when the export is served from a sub-directory.
    pub base_path: String,
    /// Where `breakdown render` writes the export.
    pub out_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "CSS Breakdown".to_string(),
            footer: "Footer".to_string(),
            base_path: String::new(),
            out_dir: PathBuf::from("dist"),
        }
    }
}

impl SiteConfig {
    /// Load `breakdown.toml` from `root`.
    /// Returns defaults if the file doesn't exist or is invalid.
    pub fn discover(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no site config, using defaults");
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "ignoring site config");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Unlike [`SiteConfig::discover`],
    /// a missing or malformed file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config: SiteConfig = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.base_path = normalize_base(&config.base_path);
        Ok(config)
    }

    /// Link target for `route`, honouring the base path.
    pub fn href(&self, route: Route) -> String {
        match (self.base_path.as_str(), route) {
            ("", route) => route.path().to_string(),
            (base, Route::Intro) => format!("{base}/"),
            (base, route) => format!("{base}{}", route.path()),
        }
    }

    /// Document title for `route`.
    pub fn page_title(&self, route: Route) -> String {
        match route {
            Route::Intro => self.title.clone(),
            route => format!("{} | {}", route.title(), self.title),
        }
    }
}

/// `css-breakdown/` -> `/css-breakdown`, `/` -> ``.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
