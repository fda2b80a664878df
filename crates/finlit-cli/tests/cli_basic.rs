//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a temporary data
//! directory (FINLIT_DATA_DIR) so they never touch a real profile.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against the given data dir and return output.
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "finlit-cli", "--"])
        .args(args)
        .env("FINLIT_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_checkin_claim_and_repeat() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["checkin", "claim", "--date", "2024-01-01"]);
    assert_eq!(code, 0, "checkin claim failed");
    assert!(stdout.contains("+10 points"), "unexpected output: {stdout}");

    let (stdout, _, code) = run_cli(dir.path(), &["checkin", "claim", "--date", "2024-01-01"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("already checked in"), "unexpected output: {stdout}");

    let (stdout, _, code) = run_cli(dir.path(), &["checkin", "claim", "--date", "2024-01-02"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("+12 points"), "unexpected output: {stdout}");
}

#[test]
fn test_checkin_status_json() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["checkin", "claim", "--date", "2024-03-05"]);

    let (stdout, _, code) = run_cli(dir.path(), &["checkin", "status", "--date", "2024-03-05"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["checked_today"], true);
    assert_eq!(parsed["streak"], 1);
}

#[test]
fn test_checkin_rejects_malformed_date() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["checkin", "claim", "--date", "not-a-date"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid calendar day"), "stderr: {stderr}");
}

#[test]
fn test_progress_add_and_show() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["progress", "add", "50", "--skill", "budgeting"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("level 2"), "unexpected output: {stdout}");
    assert!(stdout.contains("level up!"), "unexpected output: {stdout}");

    let (stdout, _, code) = run_cli(dir.path(), &["progress", "show"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total_points"], 50);
    assert_eq!(parsed["level"], 2);
    assert_eq!(parsed["level_progress"], 0.0);
}

#[test]
fn test_article_complete_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(
        dir.path(),
        &["article", "complete", "saving-101", "--points", "30"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("+30 points"), "unexpected output: {stdout}");

    let (stdout, _, code) = run_cli(
        dir.path(),
        &["article", "complete", "saving-101", "--points", "30"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("already completed"), "unexpected output: {stdout}");
}

#[test]
fn test_achievements_list() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["achievements", "list"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed.as_array().map(|a| !a.is_empty()).unwrap_or(false));
}

#[test]
fn test_stats_summary() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["checkin", "claim", "--date", "2024-03-05"]);

    let (stdout, _, code) = run_cli(dir.path(), &["stats"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total_points"], 10);
    assert_eq!(parsed["total_check_in_days"], 1);
}

#[test]
fn test_checkin_claim_rejects_earlier_day() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["checkin", "claim", "--date", "2024-01-10"]);

    let (stdout, _, code) = run_cli(dir.path(), &["checkin", "claim", "--date", "2024-01-05"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("already checked in"), "unexpected output: {stdout}");

    // The claimed day is still not re-claimable after the back-dated attempt
    let (stdout, _, _) = run_cli(dir.path(), &["checkin", "claim", "--date", "2024-01-10"]);
    assert!(stdout.contains("already checked in"), "unexpected output: {stdout}");

    let (stdout, _, _) = run_cli(dir.path(), &["stats"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total_check_in_days"], 1);
    assert_eq!(parsed["total_points"], 10);
}

#[test]
fn test_compact_output_when_pretty_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "pretty_output", "false"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["stats"]);
    assert_eq!(code, 0);
    assert!(!stdout.trim().contains('\n'), "expected compact JSON: {stdout}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["level"], 1);
}

#[test]
fn test_config_get_set() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "reminders.hour"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "20");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "reminders.hour", "7"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "reminders.hour"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "7");
}
