//! Route table: which page is mounted at which path.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// One page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Intro,
    Basics,
    Flex,
    Grid,
    Selectors,
}

impl Route {
    /// Every route, index first.
    pub const ALL: [Route; 5] = [
        Route::Intro,
        Route::Basics,
        Route::Flex,
        Route::Grid,
        Route::Selectors,
    ];

    /// Routes linked from the header, in display order.
    pub const NAV: [Route; 4] = [Route::Basics, Route::Flex, Route::Grid, Route::Selectors];

    /// Map a URL path to its page. `/` and `/intro` both mount the intro;
    /// a single trailing slash is ignored.
    pub fn from_path(path: &str) -> Result<Self> {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        match trimmed {
            "" | "/intro" => Ok(Route::Intro),
            "/basics" => Ok(Route::Basics),
            "/flex" => Ok(Route::Flex),
            "/grid" => Ok(Route::Grid),
            "/selectors" => Ok(Route::Selectors),
            _ => Err(Error::UnknownRoute(path.to_string())),
        }
    }

    /// Canonical path of the page.
    pub fn path(self) -> &'static str {
        match self {
            Route::Intro => "/",
            Route::Basics => "/basics",
            Route::Flex => "/flex",
            Route::Grid => "/grid",
            Route::Selectors => "/selectors",
        }
    }

    /// Label used in navigation.
    pub fn label(self) -> &'static str {
        match self {
            Route::Intro => "Intro",
            Route::Basics => "Basics",
            Route::Flex => "Flex",
            Route::Grid => "Grid",
            Route::Selectors => "Selectors",
        }
    }

    /// Document title of the page.
    pub fn title(self) -> &'static str {
        match self {
            Route::Intro => "What is CSS?",
            Route::Basics => "CSS Basics",
            Route::Flex => "Flexbox",
            Route::Grid => "CSS Grid",
            Route::Selectors => "CSS Selectors",
        }
    }

    /// File the static export writes this page to, relative to the output
    /// directory.
    pub fn output_file(self) -> &'static str {
        match self {
            Route::Intro => "index.html",
            Route::Basics => "basics/index.html",
            Route::Flex => "flex/index.html",
            Route::Grid => "grid/index.html",
            Route::Selectors => "selectors/index.html",
        }
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self> {
        Self::from_path(path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
