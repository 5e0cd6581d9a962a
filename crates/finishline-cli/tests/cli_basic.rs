//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    run_cli_with_log(args, None)
}

/// Like [`run_cli`], with `RUST_LOG` set to `log` or removed.
fn run_cli_with_log(args: &[&str], log: Option<&str>) -> (String, String, i32) {
    let mut command = Command::new("cargo");
    command.args(["run", "-q", "-p", "finishline-cli", "--"]).args(args);
    match log {
        Some(filter) => command.env("RUST_LOG", filter),
        None => command.env_remove("RUST_LOG"),
    };
    let output = command.output().expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn write_example(dir: &Path) -> String {
    let path = dir.join("scene.toml");
    let path = path.to_str().unwrap().to_string();
    let (_, stderr, code) = run_cli(&["init", &path]);
    assert_eq!(code, 0, "init failed: {stderr}");
    path
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_example(dir.path());
    let (_, stderr, code) = run_cli(&["init", &path]);
    assert_ne!(code, 0);
    assert!(stderr.contains("already exists"));

    let (_, _, code) = run_cli(&["init", &path, "--force"]);
    assert_eq!(code, 0);
}

#[test]
fn test_check_prints_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_example(dir.path());
    let (stdout, _, code) = run_cli(&["check", &path]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["node"], "#progress");
    assert_eq!(json["mode"], "finish_line");
}

#[test]
fn test_check_single_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_example(dir.path());
    let (stdout, _, code) = run_cli(&["check", &path, "--key", "start_line"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "#intro");

    let (_, stderr, code) = run_cli(&["check", &path, "--key", "nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown option 'nope'"));
}

#[test]
fn test_log_level_follows_rust_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_example(dir.path());

    let (_, stderr, code) = run_cli_with_log(&["check", &path], Some("info"));
    assert_eq!(code, 0);
    assert!(stderr.contains("finish line options"), "stderr: {stderr}");

    let (_, stderr, code) = run_cli_with_log(&["check", &path], None);
    assert_eq!(code, 0);
    assert!(!stderr.contains("finish line options"), "stderr: {stderr}");
}

#[test]
fn test_run_states() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_example(dir.path());

    for (scroll, state) in [("300", "idle"), ("600", "running"), ("980", "completed")] {
        let (stdout, stderr, code) = run_cli(&["run", &path, "--scroll", scroll]);
        assert_eq!(code, 0, "run failed: {stderr}");
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(json["evaluation"]["state"], state);
    }

    let (stdout, _, _) = run_cli(&["run", &path, "--scroll", "980"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["inline_top"], 1000.0);
    assert_eq!(json["node_classes"][0], "progress--finished");
}

#[test]
fn test_run_repeat_emits_no_second_event() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_example(dir.path());
    let (stdout, _, code) = run_cli(&["run", &path, "--scroll", "600", "--repeat", "2"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["evaluation"]["state"], "running");
    assert!(json["evaluation"]["event"].is_null());
    assert_eq!(json["page_classes"][0], "has-progress");
}

#[test]
fn test_run_repeat_must_be_positive() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_example(dir.path());
    let (stdout, _, code) = run_cli(&["run", &path, "--repeat", "0"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_sweep_rejects_oversized_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_example(dir.path());
    let (stdout, stderr, code) = run_cli(&["sweep", &path, "--from", "0", "--to", "1e15", "--step", "0.001"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("step"), "stderr: {stderr}");
}

#[test]
fn test_sweep_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_example(dir.path());
    let (stdout, stderr, code) = run_cli(&["sweep", &path, "--from", "0", "--to", "1200", "--step", "10"]);
    assert_eq!(code, 0, "sweep failed: {stderr}");
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["state"], "running");
    assert_eq!(lines[0]["scroll_top"], 520.0);
    assert_eq!(lines[1]["event"]["type"], "ZoneCompleted");
}

#[test]
fn test_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_example(dir.path());
    let (stdout, _, code) = run_cli(&["snapshot", &path, "--scroll", "600"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["type"], "StateSnapshot");
    assert_eq!(json["state"], "running");
    assert_eq!(json["triggers"]["start"], 520.0);
}

#[test]
fn test_missing_scene_fails() {
    let (_, stderr, code) = run_cli(&["check", "/definitely/not/here.toml"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}
