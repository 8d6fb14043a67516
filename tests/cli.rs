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
    dir.path().join(".distributeai").join("dashboard.json")
}

const BINARY_NAME: &str = "distributeai-dashboard";

/// Nothing listens on the discard port, so connections are refused quickly.
const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

fn dashboard(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()) // simulate different $HOME
        .env_remove("DISTRIBUTEAI_API_URL");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let tmp = temp_home_dir();
    dashboard(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Command-line arguments"))
        .stdout(contains("headless"));
}

#[test]
/// One-shot commands exit non-zero when the coordinator is unreachable.
fn stats_fails_against_unreachable_coordinator() {
    let tmp = temp_home_dir();
    dashboard(&tmp)
        .args(["stats", "--api-url", UNREACHABLE_URL])
        .assert()
        .failure()
        .stderr(contains("Failed to fetch stats"));
}

#[test]
fn health_fails_against_unreachable_coordinator() {
    let tmp = temp_home_dir();
    dashboard(&tmp)
        .arg("health")
        .env("DISTRIBUTEAI_API_URL", UNREACHABLE_URL)
        .assert()
        .failure()
        .stderr(contains("Coordinator is unreachable"));
}

#[test]
fn job_detail_fails_against_unreachable_coordinator() {
    let tmp = temp_home_dir();
    dashboard(&tmp)
        .args(["job", "job-1", "--api-url", UNREACHABLE_URL])
        .assert()
        .failure()
        .stderr(contains("Failed to fetch job"));
}

#[test]
/// An explicit config path is used as given.
fn explicit_config_path_is_used() {
    let tmp = temp_home_dir();
    let custom = tmp.path().join("custom.json");

    dashboard(&tmp)
        .args(["config", "--set-background", "true", "--config"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(contains("Config saved"));

    let saved = fs::read_to_string(&custom).unwrap();
    assert!(saved.contains("\"with_background_color\": true"));
    assert!(!config_file_path(&tmp).exists());
}

#[test]
fn invalid_api_url_is_rejected() {
    let tmp = temp_home_dir();
    dashboard(&tmp)
        .args(["nodes", "--api-url", "not-a-url"])
        .assert()
        .failure()
        .stderr(contains("Invalid API URL 'not-a-url'"));
}

#[test]
/// The config command writes the settings and later runs pick them up.
fn config_command_persists_api_url() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    dashboard(&tmp)
        .args(["config", "--set-api-url", "http://127.0.0.1:9/"])
        .assert()
        .success()
        .stdout(contains("Config saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"api_url\": \"http://127.0.0.1:9\""));

    // Picked up from the config file, so the request goes to the unreachable address
    dashboard(&tmp)
        .arg("jobs")
        .assert()
        .failure()
        .stderr(contains("Failed to fetch jobs"));
}

#[test]
/// A malformed config file is reported instead of silently ignored.
fn malformed_config_file_fails() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "not json").unwrap();

    dashboard(&tmp)
        .arg("stats")
        .assert()
        .failure()
        .stderr(contains("Failed to load config"));
}
