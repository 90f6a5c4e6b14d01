//! CLI integration tests. None of these reach the network.

mod support;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use dashrates::testkit::config::FULL_TOML;
use support::config::{missing_config, write_temp_config};

/// The binary, run from an empty directory with no config override.
fn dashrates(cwd: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("dashrates");
    cmd.current_dir(cwd.path())
        .env_remove("DASHRATES_CONFIG")
        .env_remove("DASHRATES_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn empty_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

#[test]
fn help_lists_commands() {
    let cwd = empty_dir();
    dashrates(&cwd)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashrates"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("rates"))
        .stdout(predicate::str::contains("sources"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag() {
    let cwd = empty_dir();
    dashrates(&cwd)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn sources_json_lists_whole_catalog() {
    let cwd = empty_dir();
    let output = dashrates(&cwd)
        .args(["sources", "--json"])
        .output()
        .expect("run dashrates");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("sources --json prints one JSON document");
    let sources = value["sources"].as_array().expect("sources array");
    assert_eq!(value["command"], "sources");
    assert_eq!(sources.len(), 29);

    let livecoin = sources
        .iter()
        .find(|s| s["name"] == "Livecoin")
        .expect("Livecoin listed");
    assert_eq!(livecoin["enabled"], false);
    assert_eq!(livecoin["pair"], "DASH/USD");
}

#[test]
fn sources_table_respects_config_file() {
    let cwd = empty_dir();
    let file = write_temp_config(FULL_TOML);
    dashrates(&cwd)
        .args(["sources", "--color", "never", "--config"])
        .arg(&file.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Coinbase Pro"))
        .stdout(predicate::str::contains("2 of 29 enabled"));
}

#[test]
fn config_validate_accepts_good_file() {
    let cwd = empty_dir();
    let file = write_temp_config(FULL_TOML);
    dashrates(&cwd)
        .args(["config", "validate", "--color", "never", "-c"])
        .arg(&file.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration valid"));
}

#[test]
fn config_validate_rejects_bad_file() {
    let cwd = empty_dir();
    let file = write_temp_config(
        r#"
[http]
connect_timeout_ms = 0
"#,
    );
    dashrates(&cwd)
        .args(["config", "validate", "--color", "never", "-c"])
        .arg(&file.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("http.connect_timeout_ms"));
}

#[test]
fn config_validate_reports_missing_file() {
    let cwd = empty_dir();
    let (_dir, path) = missing_config();
    dashrates(&cwd)
        .args(["config", "validate", "--color", "never", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn config_show_without_file_uses_defaults() {
    let cwd = empty_dir();
    dashrates(&cwd)
        .args(["config", "show", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, defaults"))
        .stdout(predicate::str::contains("concurrent"));
}

#[test]
fn check_rejects_unknown_source_before_fetching() {
    let cwd = empty_dir();
    dashrates(&cwd)
        .args(["check", "--color", "never", "-s", "Mt.Gox"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown source 'Mt.Gox'"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let cwd = empty_dir();
    dashrates(&cwd)
        .arg("trade")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
