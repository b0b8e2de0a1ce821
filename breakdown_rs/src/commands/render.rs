//! `breakdown render` - static export.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use breakdown_core::{Route, SiteConfig};
use tracing::{debug, info};

/// Site config for a run: the explicit file when given (errors are fatal),
/// otherwise `breakdown.toml` discovered in `root`.
pub fn resolve_config(explicit: Option<&Path>, root: &Path) -> Result<SiteConfig> {
    match explicit {
        Some(path) => SiteConfig::load_from_path(path)
            .with_context(|| format!("loading site config {}", path.display())),
        None => Ok(SiteConfig::discover(root)),
    }
}

/// Render every route into `out_dir`. Returns the written files, index first.
pub fn export(site: &SiteConfig, out_dir: &Path) -> Result<Vec<(Route, PathBuf)>> {
    let mut written = Vec::with_capacity(Route::ALL.len());
    for (route, html) in breakdown_pages::render_site(site) {
        let path = out_dir.join(route.output_file());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
        debug!(%route, path = %path.display(), "page written");
        written.push((route, path));
    }
    info!(pages = written.len(), out = %out_dir.display(), "export finished");
    Ok(written)
}

pub fn run(out: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let site = resolve_config(config, &cwd)?;
    let out_dir = out.map(Path::to_path_buf).unwrap_or_else(|| site.out_dir.clone());

    let written = export(&site, &out_dir)?;
    for (route, path) in &written {
        println!("{:<12} {}", route.path(), path.display());
    }
    println!("Wrote {} pages to {}", written.len(), out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn export_writes_one_file_per_route() {
        let tmp = TempDir::new().unwrap();
        let written = export(&SiteConfig::default(), tmp.path()).unwrap();

        assert_eq!(written.len(), Route::ALL.len());
        for route in Route::ALL {
            let html = fs::read_to_string(tmp.path().join(route.output_file())).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"), "{route}");
        }
        assert!(tmp.path().join("index.html").is_file());
        assert!(tmp.path().join("flex/index.html").is_file());
    }

    #[test]
    fn explicit_config_errors_are_fatal() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        let err = resolve_config(Some(&missing), tmp.path()).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn discovered_config_is_applied() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("breakdown.toml"),
            "title = \"Layout Lab\"\nbase_path = \"lab\"\n",
        )
        .unwrap();

        let site = resolve_config(None, tmp.path()).unwrap();
        assert_eq!(site.title, "Layout Lab");
        assert_eq!(site.href(Route::Grid), "/lab/grid");
    }
}
