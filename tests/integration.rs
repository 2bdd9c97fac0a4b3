use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn beerstates(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("beerstates").unwrap();
    cmd.arg("--config-dir").arg(tmp.path().join("config"));
    cmd
}

fn data_path(tmp: &TempDir) -> PathBuf {
    tmp.path().join("states_data.json")
}

fn read_not_had(path: &Path) -> Vec<String> {
    let text = std::fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    value["not_had"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_help_flag() {
    let tmp = TempDir::new().unwrap();
    beerstates(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--complete <STATE>")
                .and(predicate::str::contains("Usage")),
        );
    assert!(!data_path(&tmp).exists(), "--help must not touch data");
}

#[test]
fn test_version_flag() {
    let tmp = TempDir::new().unwrap();
    beerstates(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("beerstates 0.1.0"));
}

#[test]
fn test_complete_creates_file_from_defaults() {
    let tmp = TempDir::new().unwrap();
    let data = data_path(&tmp);

    beerstates(&tmp)
        .arg("--data")
        .arg(&data)
        .args(["--complete", "al"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Marked AL as completed!")
                .and(predicate::str::contains("Data saved to")),
        );

    assert_eq!(read_not_had(&data), vec!["AK", "KS", "MS", "NE", "SD"]);
}

#[test]
fn test_complete_twice_reports_already_completed() {
    let tmp = TempDir::new().unwrap();
    let data = data_path(&tmp);

    beerstates(&tmp)
        .arg("--data")
        .arg(&data)
        .args(["--complete", "KS"])
        .assert()
        .success();

    beerstates(&tmp)
        .arg("--data")
        .arg(&data)
        .args(["--complete", "ks"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("KS was already marked as completed.")
                .and(predicate::str::contains("Data saved").not()),
        );

    assert_eq!(read_not_had(&data), vec!["AL", "AK", "MS", "NE", "SD"]);
}

#[test]
fn test_complete_unknown_state_fails() {
    let tmp = TempDir::new().unwrap();
    let data = data_path(&tmp);

    beerstates(&tmp)
        .arg("--data")
        .arg(&data)
        .args(["--complete", "zz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown state code: ZZ"));

    assert!(!data.exists(), "unknown codes must not write the file");
}

#[test]
fn test_uncomplete_puts_state_back() {
    let tmp = TempDir::new().unwrap();
    let data = data_path(&tmp);

    beerstates(&tmp)
        .arg("--data")
        .arg(&data)
        .args(["--uncomplete", "tx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked TX as not had."));

    assert_eq!(
        read_not_had(&data),
        vec!["AL", "AK", "KS", "MS", "NE", "SD", "TX"]
    );
}

#[test]
fn test_status_with_defaults() {
    let tmp = TempDir::new().unwrap();
    beerstates(&tmp)
        .arg("--data")
        .arg(data_path(&tmp))
        .arg("--status")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Progress: 45/51 states (88.2%)")
                .and(predicate::str::contains("Not Had (6 states)"))
                .and(predicate::str::contains("South Dakota")),
        );
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let data = data_path(&tmp);
    std::fs::write(&data, "{ not json").unwrap();

    beerstates(&tmp)
        .arg("--data")
        .arg(&data)
        .arg("--status")
        .assert()
        .success()
        .stderr(predicate::str::contains("Using default data"))
        .stdout(predicate::str::contains("Progress: 45/51 states"));
}

#[test]
fn test_invalid_not_had_exits_with_failure() {
    let tmp = TempDir::new().unwrap();
    let data = data_path(&tmp);
    std::fs::write(&data, r#"{ "states": ["AL", "AK"], "not_had": ["AK", "ZZ"] }"#).unwrap();

    // Render path: fails validation before touching the terminal.
    beerstates(&tmp)
        .arg("--data")
        .arg(&data)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid states in not_had list"));
}

#[test]
fn test_invalid_not_had_does_not_block_complete() {
    let tmp = TempDir::new().unwrap();
    let data = data_path(&tmp);
    std::fs::write(&data, r#"{ "states": ["AL", "AK"], "not_had": ["AK", "ZZ"] }"#).unwrap();

    beerstates(&tmp)
        .arg("--data")
        .arg(&data)
        .args(["--complete", "AK"])
        .assert()
        .success();

    assert_eq!(read_not_had(&data), vec!["ZZ"]);
}

#[test]
fn test_bad_boundary_file_exits_with_failure() {
    let tmp = TempDir::new().unwrap();
    beerstates(&tmp)
        .arg("--data")
        .arg(data_path(&tmp))
        .arg("--boundaries")
        .arg(tmp.path().join("missing.geojson"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error loading geographic data"));
}

#[test]
fn test_config_file_sets_data_path() {
    let tmp = TempDir::new().unwrap();
    let config_dir = tmp.path().join("config");
    let data = tmp.path().join("from_config.json");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        serde_json::json!({ "data_file": data }).to_string(),
    )
    .unwrap();

    beerstates(&tmp).args(["--complete", "NE"]).assert().success();

    assert!(read_not_had(&data).iter().all(|c| c != "NE"));
}

#[test]
fn test_actions_are_mutually_exclusive() {
    let tmp = TempDir::new().unwrap();
    beerstates(&tmp)
        .args(["--complete", "AL", "--status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
