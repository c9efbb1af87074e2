//! End-to-End CLI Tests for repovision

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use image::{Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Command running in `dir`, so no stray `.repovision/config.toml` is picked up
fn repovision(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("repovision");
    cmd.current_dir(dir);
    cmd
}

fn write_snapshot(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("snapshot.png");
    RgbaImage::from_pixel(width, height, Rgba([13, 17, 23, 255]))
        .save(&path)
        .expect("write snapshot");
    path
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let temp = TempDir::new().expect("temp dir");
        repovision(temp.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("export"));
    }

    #[test]
    fn shows_version() {
        let temp = TempDir::new().expect("temp dir");
        repovision(temp.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn missing_input_fails() {
        let temp = TempDir::new().expect("temp dir");
        repovision(temp.path())
            .args(["render", "does-not-exist.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read"));
    }

    #[test]
    fn invalid_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("bad.toml");
        std::fs::write(&config, "[capture]\nscale = 0.0\n").expect("write config");

        repovision(temp.path())
            .arg("--config")
            .arg(&config)
            .arg("export")
            .arg(fixture("analysis.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load config"));
    }
}

// ============================================
// Report and Diagram Tests
// ============================================

mod report {
    use super::*;

    #[test]
    fn writes_html_report() {
        let temp = TempDir::new().expect("temp dir");
        let output = temp.path().join("out/report.html");

        repovision(temp.path())
            .arg("render")
            .arg(fixture("analysis.json"))
            .arg("-o")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains("Report written to"));

        let html = std::fs::read_to_string(&output).expect("report exists");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("acme-api"));
        assert!(html.contains("results-content"));
        assert!(html.contains("18,452"));
        // Component view has no description
        assert!(html.contains("No diagram available for this view"));
    }

    #[test]
    fn absent_view_reports_no_diagram() {
        let temp = TempDir::new().expect("temp dir");
        repovision(temp.path())
            .arg("diagram")
            .arg(fixture("analysis.json"))
            .args(["--view", "component"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No diagram available for this view"));
    }

    #[test]
    fn architecture_view_renders_svg() {
        let temp = TempDir::new().expect("temp dir");
        let output = temp.path().join("architecture.svg");

        repovision(temp.path())
            .arg("diagram")
            .arg(fixture("analysis.json"))
            .arg("-o")
            .arg(&output)
            .assert()
            .success();

        let svg = std::fs::read_to_string(&output).expect("svg written");
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn broken_view_shows_raw_source() {
        let temp = TempDir::new().expect("temp dir");
        repovision(temp.path())
            .arg("diagram")
            .arg(fixture("analysis.json"))
            .args(["--view", "flow"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Could not render diagram. Showing raw code instead.",
            ))
            .stdout(predicate::str::contains("flowchart ??? -->> ]]"))
            .stdout(predicate::str::contains("<svg").not());
    }
}

// ============================================
// Export Tests
// ============================================

mod export {
    use super::*;

    #[test]
    fn structured_export_without_snapshot() {
        let temp = TempDir::new().expect("temp dir");

        repovision(temp.path())
            .arg("export")
            .arg(fixture("analysis.json"))
            .args(["--out-dir", "pdf"])
            .assert()
            .success()
            .stdout(predicate::str::contains("acme-api-analysis.pdf"))
            .stdout(predicate::str::contains("structured export"));

        let bytes =
            std::fs::read(temp.path().join("pdf/acme-api-analysis.pdf")).expect("pdf written");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn capture_export_from_snapshot() {
        let temp = TempDir::new().expect("temp dir");
        let snapshot = write_snapshot(temp.path(), 640, 2000);

        repovision(temp.path())
            .arg("export")
            .arg(fixture("analysis.json"))
            .arg("--capture")
            .arg(&snapshot)
            .assert()
            .success()
            .stdout(predicate::str::contains("capture export"))
            // 2000/640 * 210mm = 656.25mm on 297mm pages
            .stdout(predicate::str::contains("3 pages"));

        assert!(temp.path().join("acme-api-analysis.pdf").exists());
    }

    #[test]
    fn unreadable_snapshot_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let bogus = temp.path().join("snapshot.png");
        std::fs::write(&bogus, b"not a png").expect("write bogus snapshot");

        repovision(temp.path())
            .arg("export")
            .arg(fixture("analysis.json"))
            .arg("--capture")
            .arg(&bogus)
            .assert()
            .success()
            .stdout(predicate::str::contains("structured export"));

        assert!(temp.path().join("acme-api-analysis.pdf").exists());
    }

    #[test]
    fn project_config_changes_default_name() {
        let temp = TempDir::new().expect("temp dir");
        let config_dir = temp.path().join(".repovision");
        std::fs::create_dir_all(&config_dir).expect("config dir");
        std::fs::write(config_dir.join("config.toml"), "[export]\ndefault_base_name = \"report\"\n")
            .expect("write config");
        std::fs::write(temp.path().join("empty.json"), "{}").expect("write input");

        repovision(temp.path())
            .args(["export", "empty.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("report-analysis.pdf"));
    }
}
