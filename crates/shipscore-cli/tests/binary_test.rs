//! Runs the built `shipscore` executable and checks exit codes and streams.

use std::path::Path;
use std::process::{Command, Output};

fn shipscore(home: &Path, root: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shipscore"));
    cmd.arg("--root").arg(root).args(args).env("HOME", home);
    for key in [
        "SHIPSCORE_LOG",
        "SHIPSCORE_ARTIFACTS_DIR",
        "SHIPSCORE_SCORES_PATH",
        "SHIPSCORE_RECORDS_DIR",
        "SHIPSCORE_PROPOSALS_DIR",
        "SHIPSCORE_ACTOR",
        "SHIPSCORE_MIN_SCORE",
        "USERPROFILE",
    ] {
        cmd.env_remove(key);
    }
    cmd.output().unwrap()
}

#[test]
fn test_score_exits_zero_and_prints_summary_on_stdout() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();

    let out = shipscore(home.path(), root.path(), &["score"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("### ShipScore\n"));
    assert!(stdout.ends_with("**Final ShipScore: 88.0%**\n"));

    // Missing artifacts are reported on stderr at the default level.
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("gate artifacts unavailable, using defaults"));
}

#[test]
fn test_quiet_keeps_stderr_clean() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();

    let out = shipscore(home.path(), root.path(), &["-q", "score"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}

#[test]
fn test_gate_failure_exits_two() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();

    let out = shipscore(home.path(), root.path(), &["-q", "score", "--min-score", "95"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8(out.stdout).unwrap().contains("88.0%"));
}

#[test]
fn test_config_error_exits_one_with_code_on_stderr() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("shipscore.toml"), "[gate]\nmin_score = \"high\"\n").unwrap();

    let out = shipscore(home.path(), root.path(), &["-q", "run"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("[CONFIG_ERROR]"), "{stderr}");
    assert!(!root.path().join("cdrs").exists());
}

#[test]
fn test_propose_prints_path_of_written_proposal() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    let artifacts = root.path().join("artifacts");
    std::fs::create_dir_all(&artifacts).unwrap();
    std::fs::write(artifacts.join("opa.json"), r#"{"deny": 2}"#).unwrap();

    let out = shipscore(home.path(), root.path(), &["-q", "propose"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    let path = Path::new(stdout.trim_end());
    assert!(path.is_file());
    assert!(stdout.trim_end().ends_with("_s3_block_public_access.tf"));
}
