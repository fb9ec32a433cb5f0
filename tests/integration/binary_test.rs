use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("scontrol_nodes.txt")
}

/// Run the binary with an isolated config directory
fn run(args: &[&str], home: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nodestat"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("NODESTAT_SCONTROL")
        .output()
        .expect("failed to run nodestat")
}

#[test]
fn test_report_from_input_file() {
    let home = TempDir::new().unwrap();
    let input = fixture();
    let output = run(&["--input", input.to_str().unwrap()], &home);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("Hostname"));
    assert!(lines[1].starts_with("node01 "));
    assert!(lines[2].starts_with("node02(d) "));
}

#[test]
fn test_filters_and_exports() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let csv = out.path().join("idle.csv");
    let json = out.path().join("idle.json");
    let input = fixture();

    let output = run(
        &[
            "--input",
            input.to_str().unwrap(),
            "--idle-only",
            "--state",
            "IDLE",
            "--csv",
            csv.to_str().unwrap(),
            "--json",
            json.to_str().unwrap(),
        ],
        &home,
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);

    let csv = fs::read_to_string(&csv).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.lines().nth(1).unwrap().starts_with("node04,"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["Hostname"], "node05");
}

#[test]
fn test_contradictory_filters_print_only_header() {
    let home = TempDir::new().unwrap();
    let input = fixture();
    let output = run(&["--input", input.to_str().unwrap(), "--gpu-only", "--idle-only"], &home);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 1);
}

#[test]
fn test_invalid_pattern_fails_before_output() {
    let home = TempDir::new().unwrap();
    let input = fixture();
    let output = run(&["--input", input.to_str().unwrap(), "--state", "(idle"], &home);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid --state pattern"));
}

#[test]
fn test_missing_scheduler_fails() {
    let home = TempDir::new().unwrap();
    let output = run(&["--scontrol", "/nonexistent/bin/scontrol"], &home);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unwritable_export_fails_after_table() {
    let home = TempDir::new().unwrap();
    let input = fixture();
    let output = run(
        &["--input", input.to_str().unwrap(), "--csv", "/nonexistent/dir/nodes.csv"],
        &home,
    );
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Hostname"));
    assert_eq!(stdout.lines().count(), 6);
}

#[test]
fn test_summary() {
    let home = TempDir::new().unwrap();
    let input = fixture();
    let output = run(&["--input", input.to_str().unwrap(), "--summary"], &home);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  Nodes: 5 (1 down)"));
    assert!(stdout.contains("  Cores: 80 / 192 in use (41.7%)"));
    assert!(stdout.contains("  GPUs: 2 / 8 in use"));
}

#[test]
fn test_config_set_and_get() {
    let home = TempDir::new().unwrap();
    let output = run(&["config", "set", "scontrol", "/opt/slurm/bin/scontrol"], &home);
    assert!(output.status.success());

    let output = run(&["config", "get"], &home);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("/opt/slurm/bin/scontrol"));
}
