//! Tests for error handling, suggestions and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn scaffbom(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scaffbom").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn test_error_negative_length() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["compute", "-L", "-5", "-H", "4", "-W", "0.70"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid length"));
}

#[test]
fn test_error_zero_height() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["compute", "-L", "5", "-H", "0", "-W", "0.70"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid height"));
}

#[test]
fn test_error_negative_trapdoors() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["compute", "-L", "5", "-H", "4", "-W", "0.70", "-F", "-1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("trapdoor_count"));
}

#[test]
fn test_error_with_suggestions_unknown_stabilization() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["compute", "-L", "30", "-H", "8", "-W", "0.70", "-s", "haubans"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unrecognized stabilization mode"))
        .stderr(predicate::str::contains("stabilisateurs, amarrage, aucun"))
        .stderr(predicate::str::contains("--lenient"));
}

#[test]
fn test_error_missing_geometry() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["compute", "-L", "5"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--height"));
}

#[test]
fn test_error_malformed_request() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["compute", "--request", "-"])
        .write_stdin(r#"{"L": 5, "H": 4}"#)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid request in stdin"))
        .stderr(predicate::str::contains("largeur"));
}

#[test]
fn test_error_unreadable_request_file() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["compute", "--request"])
        .arg(home.path().join("absent.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read request"));
}

#[test]
fn test_error_malformed_catalog() {
    let home = TempDir::new().unwrap();
    let catalog = home.path().join("refs.json");
    fs::write(&catalog, "{ not json").unwrap();

    scaffbom(&home)
        .args(["compute", "-L", "5", "-H", "4", "-W", "0.70", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("refs.json"));
}

#[test]
fn test_error_unsupported_catalog_format() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["catalog", "--catalog", "refs.yaml"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_error_unknown_reference() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["catalog", "ALTXXX"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unknown reference code 'ALTXXX'"))
        .stderr(predicate::str::contains("scaffbom rules"));
}

#[test]
fn test_error_unknown_config_key() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["config", "get", "does.not.exist"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_missing_config_file() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .arg("--config")
        .arg(home.path().join("absent.toml"))
        .arg("rules")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_error_bad_output_format_in_config() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .env("SCAFFBOM__OUTPUT__FORMAT", "xml")
        .args(["compute", "-L", "5", "-H", "4", "-W", "0.70"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("output.format"));
}

#[test]
fn test_verbose_shows_cause_chain() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["-v", "compute", "--request"])
        .arg(home.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Caused by:"))
        .stderr(predicate::str::contains("--verbose for more details").not());
}
