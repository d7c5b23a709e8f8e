//! Integration tests for the `scaffbom` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config directory and log settings.
fn scaffbom(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scaffbom").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn quantity(json: &serde_json::Value, code: &str) -> Option<u64> {
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["reference"] == code)
        .map(|item| item["quantity"].as_u64().unwrap())
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compute"))
        .stdout(predicate::str::contains("rules"))
        .stdout(predicate::str::contains("catalog"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn compute_narrow_free_standing_as_json() {
    let home = TempDir::new().unwrap();
    let output = scaffbom(&home)
        .args(["compute", "-L", "5", "-H", "4", "-W", "0.70", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);

    assert_eq!(quantity(&json, "ALTASV5"), Some(6));
    assert_eq!(quantity(&json, "ALTKLC1"), Some(8));
    assert_eq!(quantity(&json, "ALTKPI5"), Some(8));
    assert_eq!(quantity(&json, "ALTKGH5"), Some(4));
    assert_eq!(quantity(&json, "ALTKLC2"), None);
    assert_eq!(json["items"][0]["designation"], "Socle à vérin");
}

#[test]
fn compute_wide_stabilized_craned() {
    let home = TempDir::new().unwrap();
    let output = scaffbom(&home)
        .args([
            "compute",
            "-L",
            "20",
            "-H",
            "6",
            "-W",
            "1.00",
            "-F",
            "2",
            "--wall-protection",
            "OUI",
            "--crane-lift",
            "oui",
            "--stabilization",
            "stabilisateurs",
            "--plastic-wedges",
            "OUI",
            "--output-format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);

    assert_eq!(quantity(&json, "ALT000675"), Some(9));
    assert_eq!(quantity(&json, "ALTAMX1"), Some(27));
    assert_eq!(quantity(&json, "ALTACPI"), Some(27));
    for code in ["ALTRLEV", "ALTKB12", "ALTKB13", "ALTKFSV"] {
        assert!(quantity(&json, code).is_some(), "{code} should be ordered");
    }
    for code in ["ALTAA11", "ALTAPA2", "ALTL99P"] {
        assert_eq!(quantity(&json, code), None);
    }
}

#[test]
fn compute_csv_quotes_designations() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["compute", "-L", "5", "-H", "4", "-W", "0.70", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("reference,designation,quantity\n"))
        .stdout(predicate::str::contains("ALTASV5,Socle à vérin,6\n"))
        .stdout(predicate::str::contains("ALTKLC1,\"Lisse 0,70 m\",8\n"));
}

#[test]
fn compute_table_shows_metrics_and_totals() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["compute", "-L", "5", "-H", "4", "-W", "0.70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 bay(s), 2 level(s)"))
        .stdout(predicate::str::contains("ALTKLC1"))
        .stdout(predicate::str::contains("piece(s)"));
}

#[test]
fn compute_non_standard_width_warns() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["compute", "-L", "5", "-H", "4", "-W", "0.85"])
        .assert()
        .success()
        .stdout(predicate::str::contains("width-specific parts are omitted"))
        .stdout(predicate::str::contains("ALTKLC1").not());
}

#[test]
fn compute_reads_french_request_from_stdin() {
    let home = TempDir::new().unwrap();
    let output = scaffbom(&home)
        .args(["compute", "--request", "-", "--format", "json"])
        .write_stdin(r#"{"L": 30, "H": 8, "largeur": 0.70, "stabilisation": "amarrage"}"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    for code in ["ALTAA11", "ALTAPA2", "ALTL99P"] {
        assert_eq!(quantity(&json, code), Some(20));
    }
    assert_eq!(quantity(&json, "ALT000675"), None);
}

#[test]
fn compute_accepts_whole_float_trapdoor_count() {
    let home = TempDir::new().unwrap();
    let output = scaffbom(&home)
        .args(["compute", "--request", "-", "--format", "json"])
        .write_stdin(r#"{"L": 5, "H": 4, "largeur": 0.70, "F": 1.0}"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(quantity(&stdout_json(&output), "ALTKPE5").is_some());
}

#[test]
fn compute_reads_request_file() {
    let home = TempDir::new().unwrap();
    let request = home.path().join("chantier.json");
    fs::write(
        &request,
        r#"{"length": 5, "height": 4, "width": 0.7, "crane_lift": true}"#,
    )
    .unwrap();

    let output = scaffbom(&home)
        .args(["compute", "--format", "json", "--request"])
        .arg(&request)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(quantity(&stdout_json(&output), "ALTRLEV").is_some());
}

#[test]
fn identical_requests_give_identical_output() {
    let home = TempDir::new().unwrap();
    let args = ["compute", "-L", "12.3", "-H", "5.2", "-W", "1.0", "-F", "1", "--format", "json"];

    let first = scaffbom(&home).args(args).output().unwrap();
    let second = scaffbom(&home).args(args).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn lenient_flag_accepts_unknown_mode() {
    let home = TempDir::new().unwrap();
    let output = scaffbom(&home)
        .args([
            "compute", "-L", "30", "-H", "8", "-W", "0.70", "-s", "haubans", "--lenient", "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(quantity(&stdout_json(&output), "ALTAA11"), None);
}

#[test]
fn lenient_from_environment() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .env("SCAFFBOM__PARSING__LENIENT_TOKENS", "true")
        .args(["compute", "-L", "5", "-H", "4", "-W", "0.70", "-s", "haubans"])
        .assert()
        .success();
}

#[test]
fn custom_catalog_file() {
    let home = TempDir::new().unwrap();
    let catalog = home.path().join("refs.toml");
    fs::write(&catalog, "ALTASV5 = \"Base jack\"\n").unwrap();

    let output = scaffbom(&home)
        .args(["compute", "-L", "5", "-H", "4", "-W", "0.70", "--format", "json", "--catalog"])
        .arg(&catalog)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["items"][0]["designation"], "Base jack");
    assert_eq!(json["items"][1]["designation"], "");
}

#[test]
fn missing_catalog_file_gives_empty_designations() {
    let home = TempDir::new().unwrap();
    let output = scaffbom(&home)
        .args(["compute", "-L", "5", "-H", "4", "-W", "0.70", "--format", "json", "--catalog"])
        .arg(home.path().join("absent.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["items"][0]["designation"], "");
}

#[test]
fn catalog_path_from_config_file() {
    let home = TempDir::new().unwrap();
    let catalog = home.path().join("refs.json");
    fs::write(&catalog, r#"{"ALTKLC1": "Narrow ledger"}"#).unwrap();
    let config = home.path().join("scaffbom.toml");
    fs::write(
        &config,
        format!("[catalog]\npath = {:?}\n", catalog.display().to_string()),
    )
    .unwrap();

    scaffbom(&home)
        .arg("--config")
        .arg(&config)
        .args(["catalog", "ALTKLC1"])
        .assert()
        .success()
        .stdout("Narrow ledger\n");
}

#[test]
fn rules_list_in_declared_order() {
    let home = TempDir::new().unwrap();
    let output = scaffbom(&home)
        .args(["rules", "--format", "list"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let codes: Vec<_> = stdout.lines().collect();

    assert_eq!(codes.len(), 24);
    assert_eq!(codes.first(), Some(&"ALTASV5"));
    assert_eq!(codes.last(), Some(&"ALTKFSV"));
}

#[test]
fn rules_as_json_carry_formulas() {
    let home = TempDir::new().unwrap();
    let output = scaffbom(&home)
        .args(["rules", "--format", "json"])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rules = json.as_array().unwrap();
    assert_eq!(rules.len(), 24);
    assert_eq!(rules[0]["reference"], "ALTASV5");
    assert!(rules.iter().all(|r| r["formula"].as_str().is_some_and(|f| !f.is_empty())));
}

#[test]
fn catalog_lookup_is_case_insensitive() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["catalog", "altklc1"])
        .assert()
        .success()
        .stdout("Lisse 0,70 m\n");
}

#[test]
fn catalog_lookup_honours_json_format() {
    let home = TempDir::new().unwrap();
    let output = scaffbom(&home)
        .args(["catalog", "ALTL99P", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"ALTL99P": "Cales bois"})
    );
}

#[test]
fn json_output_format_logs_json_lines() {
    let home = TempDir::new().unwrap();
    let output = scaffbom(&home)
        .args(["--output-format", "json", "compute", "-L", "5", "-H", "4", "-W", "0.70", "--catalog"])
        .arg(home.path().join("absent.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    let event: serde_json::Value = serde_json::from_str(stderr.lines().next().unwrap()).unwrap();
    assert_eq!(event["level"], "WARN");
    assert!(stdout_json(&output)["items"].is_array());
}

#[test]
fn builtin_catalog_is_complete() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["catalog", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALTKFSV"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 24));
}

#[test]
fn config_get_defaults() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout("table\n");
}

#[test]
fn config_env_override() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .env("SCAFFBOM__OUTPUT__FORMAT", "csv")
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout("csv\n");
}

#[test]
fn init_then_refuse_then_force() {
    let home = TempDir::new().unwrap();

    scaffbom(&home).arg("init").assert().success();
    assert!(home.path().join("scaffbom").join("config.toml").exists());

    scaffbom(&home)
        .arg("init")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    scaffbom(&home).args(["init", "--force"]).assert().success();
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    scaffbom(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffbom"));
}
