//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("folio").expect("Failed to find folio binary")
}

// ============================================================================
// CV Command Tests
// ============================================================================

#[test]
fn test_cv_to_stdout() {
    cli_cmd()
        .args(["cv", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("CURRICULUM VITAE"))
        .stdout(predicate::str::contains("RAKHA RAIHAN ALFARIZKY"))
        .stdout(predicate::str::contains("Tetap Ngoding, Tetap Penasaran"));
}

#[test]
fn test_cv_default_file_name() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .current_dir(dir.path())
        .arg("cv")
        .assert()
        .success()
        .stdout(predicate::str::contains("CV_Rakha_Raihan_Alfarizky.txt"));

    let written = std::fs::read_to_string(dir.path().join("CV_Rakha_Raihan_Alfarizky.txt")).unwrap();
    assert!(written.contains("PROYEK"));
}

#[test]
fn test_cv_custom_output_path() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("resume.txt");

    cli_cmd()
        .arg("cv")
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn test_cv_with_custom_profile() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("profile.json");
    std::fs::write(
        &profile,
        r#"{
            "name": "Ada Lovelace",
            "title": "Analyst",
            "contact": {"email": "ada@example.com", "linkedin": "l", "github": "g", "instagram": "ada"},
            "summary": "Notes on the engine.",
            "motto": "Poetical science",
            "copyright_year": 1843
        }"#,
    )
    .unwrap();

    cli_cmd()
        .args(["cv", "--stdout", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("ADA LOVELACE"))
        .stdout(predicate::str::contains("© 1843 Ada Lovelace"))
        .stdout(predicate::str::contains("PROYEK").not());
}

#[test]
fn test_cv_rejects_broken_profile() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("profile.json");
    std::fs::write(&profile, "{ not json").unwrap();

    cli_cmd()
        .args(["cv", "--stdout", "--profile"])
        .arg(&profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse profile"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_defaults() {
    cli_cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"threshold\": 0.1"))
        .stdout(predicate::str::contains("\"root_margin\": \"0px 0px -50px 0px\""));
}

#[test]
fn test_config_file_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(&path, r#"{"reveal": {"skill_stagger_ms": 150}}"#).unwrap();

    cli_cmd()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"skill_stagger_ms\": 150"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(&path, r#"{"reveal": {"threshold": 2.0}}"#).unwrap();

    cli_cmd()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reveal.threshold"));
}

// ============================================================================
// Plan Command Tests
// ============================================================================

#[test]
fn test_plan_lists_listeners_and_groups() {
    cli_cmd()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Listeners (9):"))
        .stdout(predicate::str::contains("PageScroll"))
        .stdout(predicate::str::contains("children every 100ms"))
        .stdout(predicate::str::contains("siblings every 200ms"));
}

#[test]
fn test_plan_without_trail() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(&path, r#"{"trail": {"enabled": false}}"#).unwrap();

    cli_cmd()
        .arg("--config")
        .arg(&path)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Listeners (8):"))
        .stdout(predicate::str::contains("CursorTrail").not());
}
