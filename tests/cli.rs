use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".sustainability").join("config.json")
}

const BINARY_NAME: &str = "sustainability-dashboard";

fn cmd(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()); // simulate different $HOME
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let tmp = temp_home_dir();
    cmd(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("sustainability monitoring dashboard"));
}

#[test]
fn summary_prints_kpis_and_alerts() {
    let tmp = temp_home_dir();
    cmd(&tmp)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("1500 kWh"))
        .stdout(contains("High Energy Consumption"));
}

#[test]
fn summary_with_kpi_prints_insights() {
    let tmp = temp_home_dir();
    cmd(&tmp)
        .args(["summary", "--kpi", "waste"])
        .assert()
        .success()
        .stdout(contains("Waste Trend Analysis"))
        .stdout(contains("Goal Progress"));
}

#[test]
fn summary_rejects_unknown_filter_field() {
    let tmp = temp_home_dir();
    cmd(&tmp)
        .args(["summary", "--filter", "bogus=1"])
        .assert()
        .failure()
        .stderr(contains("bogus"));
}

#[test]
fn summary_rejects_zero_watch_interval() {
    let tmp = temp_home_dir();
    cmd(&tmp)
        .args(["summary", "--watch", "0"])
        .assert()
        .failure()
        .stderr(contains("--watch"));
}

#[test]
/// Saved filters should be picked up by later runs.
fn set_filters_creates_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    cmd(&tmp)
        .args(["set-filters", "--filter", "timeRange=week", "--filter", "unit=unit2"])
        .assert()
        .success()
        .stdout(contains("Default filters saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"week\""));

    cmd(&tmp)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("This Week | Unit 2"));
}

#[test]
/// Reset command should delete an existing config file.
fn reset_config_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    cmd(&tmp)
        .arg("reset-config")
        .assert()
        .success()
        .stdout(contains("Removing config file"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}
