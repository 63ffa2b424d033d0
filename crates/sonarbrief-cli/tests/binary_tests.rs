// Rust guideline compliant 2026-10-19

//! Tests that spawn the `sonarbrief` binary.

use std::process::Command;

fn sonarbrief() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sonarbrief"));
    cmd.env_remove("SONAR_TOKEN").env_remove("PROJECT_KEY");
    cmd
}

#[test]
fn test_binary_fails_without_token() {
    let output = sonarbrief()
        .env("PROJECT_KEY", "proj")
        .output()
        .expect("Failed to run sonarbrief");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SONAR_TOKEN environment variable is required"));
    assert!(stderr.contains("export SONAR_TOKEN="));
    assert!(output.stdout.is_empty(), "no report should be printed");
}

#[test]
fn test_binary_fails_without_project_key() {
    let output = sonarbrief()
        .env("SONAR_TOKEN", "tok")
        .output()
        .expect("Failed to run sonarbrief");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PROJECT_KEY environment variable is required"));
}

#[test]
fn test_binary_help_lists_environment() {
    let output = sonarbrief()
        .arg("--help")
        .output()
        .expect("Failed to run sonarbrief");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SONAR_TOKEN"));
    assert!(stdout.contains("PROJECT_KEY"));
}
