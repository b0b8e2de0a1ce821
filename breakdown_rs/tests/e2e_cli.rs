//! End-to-end CLI tests for `breakdown`.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn breakdown() -> Command {
    cargo_bin_cmd!("breakdown")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        breakdown()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("classes"))
            .stdout(predicate::str::contains("routes"));
    }

    #[test]
    fn shows_version() {
        breakdown()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn lists_routes() {
        breakdown()
            .arg("routes")
            .assert()
            .success()
            .stdout(predicate::str::contains("/basics"))
            .stdout(predicate::str::contains("/selectors"))
            .stdout(predicate::str::contains("CSS Grid"));
    }

    #[test]
    fn missing_subcommand_fails() {
        breakdown().assert().failure();
    }
}

// ============================================
// Class Name Derivation
// ============================================

mod classes {
    use super::*;

    #[test]
    fn flex_defaults() {
        breakdown()
            .args(["classes", "flex"])
            .assert()
            .success()
            .stdout(
                "flexContainer gap1 row nowrap justifyContent_flex_start alignItems_stretch\n",
            );
    }

    #[test]
    fn flex_wrap_only_changes_the_wrap_token() {
        breakdown()
            .args(["classes", "flex", "--wrap"])
            .assert()
            .success()
            .stdout("flexContainer gap1 row wrap justifyContent_flex_start alignItems_stretch\n");
    }

    #[test]
    fn grid_options() {
        breakdown()
            .args([
                "classes",
                "grid",
                "--columns",
                "4",
                "--rows",
                "minmax",
                "--auto-flow",
                "row dense",
                "--justify-content",
                "space-evenly",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("cols4 rows_minmax flow_row_dense"))
            .stdout(predicate::str::contains("justifyContent_space_evenly"));
    }

    #[test]
    fn out_of_range_values_clamp_with_a_warning() {
        breakdown()
            .args(["classes", "grid", "--columns", "12"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cols8"))
            .stderr(predicate::str::contains("clamping"));
    }

    #[test]
    fn counts_beyond_a_byte_clamp() {
        breakdown()
            .args(["classes", "flex", "--items", "300"])
            .assert()
            .success()
            .stderr(predicate::str::contains("clamping"));
    }

    #[test]
    fn negative_gaps_snap_to_zero() {
        breakdown()
            .args(["classes", "flex", "--gap", "-1"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("flexContainer gap0 "))
            .stderr(predicate::str::contains("snapped"));

        breakdown()
            .args(["classes", "grid", "--column-gap", "-1", "--items", "-3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("columnGap0 "))
            .stderr(predicate::str::contains("snapped"))
            .stderr(predicate::str::contains("clamping"));
    }

    #[test]
    fn unknown_option_is_rejected() {
        breakdown()
            .args(["classes", "flex", "--align-items", "middle"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("middle"));
    }

    #[test]
    fn json_output() {
        breakdown()
            .args(["classes", "flex", "--grow", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"item\": \"flexItem grow\""))
            .stdout(predicate::str::contains("display: flex;"));
    }
}

// ============================================
// Static Export
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_every_page() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("site");

        breakdown()
            .current_dir(tmp.path())
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote 5 pages"));

        for page in [
            "index.html",
            "basics/index.html",
            "flex/index.html",
            "grid/index.html",
            "selectors/index.html",
        ] {
            assert!(out.join(page).is_file(), "missing {page}");
        }
        let flex = fs::read_to_string(out.join("flex/index.html")).unwrap();
        assert!(flex.contains("Flexbox Controls"));
    }

    #[test]
    fn uses_discovered_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("breakdown.toml"),
            "title = \"Layout Lab\"\nout_dir = \"public\"\n",
        )
        .unwrap();

        breakdown()
            .current_dir(tmp.path())
            .arg("render")
            .assert()
            .success();

        let index = fs::read_to_string(tmp.path().join("public/index.html")).unwrap();
        assert!(index.contains("<title>Layout Lab</title>"));
    }

    #[test]
    fn bad_explicit_config_fails() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("broken.toml");
        fs::write(&config, "title = [").unwrap();

        breakdown()
            .current_dir(tmp.path())
            .args(["render", "--config"])
            .arg(&config)
            .assert()
            .failure()
            .stderr(predicate::str::contains("broken.toml"));
    }
}
