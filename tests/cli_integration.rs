//! CLI integration tests for Capstan.
//!
//! These tests drive the full workflow against a local mock lock server.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const MANIFEST: &str = r#"{
  "name": "acme/app",
  "require": {
    "acme/core": "^2.0"
  }
}"#;

/// Get the capstan binary command.
fn capstan() -> Command {
    let mut cmd = Command::cargo_bin("capstan").unwrap();
    cmd.env_remove("CAPSTAN_URL");
    cmd
}

/// Create a project directory holding a manifest.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("composer.json"), MANIFEST).unwrap();
    tmp
}

/// Write a project config pointing at the given server.
fn write_config(tmp: &TempDir, body: &str) {
    fs::create_dir_all(tmp.path().join(".capstan")).unwrap();
    fs::write(tmp.path().join(".capstan/config.toml"), body).unwrap();
}

// ============================================================================
// capstan install
// ============================================================================

#[test]
fn test_install_writes_lock_file() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/install");
        then.status(200).body("LOCKDATA");
    });

    let tmp = project();

    capstan()
        .args(["install", "--url", server.base_url().as_str()])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Locked"));

    mock.assert();
    assert_eq!(
        fs::read_to_string(tmp.path().join("composer.lock")).unwrap(),
        "LOCKDATA"
    );
}

#[test]
fn test_install_fails_without_manifest() {
    let tmp = TempDir::new().unwrap();

    capstan()
        .args(["install", "--url", "http://127.0.0.1:9"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest not found"));
}

#[test]
fn test_install_reports_server_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v2/install");
        then.status(500).body("resolver exploded");
    });

    let tmp = project();

    capstan()
        .args(["install", "--url", server.base_url().as_str()])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("500"));

    assert!(!tmp.path().join("composer.lock").exists());
}

#[test]
fn test_disabled_service_refuses_to_call_out() {
    let tmp = project();
    write_config(&tmp, "[service]\nenabled = false\n");

    capstan()
        .args(["install", "--url", "http://127.0.0.1:9"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("disabled"));
}

// ============================================================================
// capstan require
// ============================================================================

#[test]
fn test_require_updates_manifest_and_lock() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/generate")
            .body_contains("package=acme%2Fmailer");
        then.status(200).body("LOCKDATA");
    });

    let tmp = project();
    write_config(
        &tmp,
        &format!(
            "[service]\nurl = \"{}\"\ndialect = \"generate\"\n",
            server.base_url()
        ),
    );

    capstan()
        .args(["require", "acme/mailer", "~1.4"])
        .current_dir(tmp.path())
        .assert()
        .success();

    mock.assert();

    let manifest = fs::read_to_string(tmp.path().join("composer.json")).unwrap();
    assert!(manifest.contains("acme/mailer"));
    assert!(manifest.contains("~1.4"));
    assert!(tmp.path().join("composer.lock").exists());
}

#[test]
fn test_dry_require_prints_preview_and_writes_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v2/require/dry");
        then.status(200).body("{\"packages\": []}");
    });

    let tmp = project();
    write_config(
        &tmp,
        &format!(
            "[service]\nurl = \"{}\"\ndialect = \"generate\"\n",
            server.base_url()
        ),
    );
    let manifest_before = fs::read_to_string(tmp.path().join("composer.json")).unwrap();

    capstan()
        .args(["require", "acme/mailer", "--dry-run"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("packages"));

    let manifest_after = fs::read_to_string(tmp.path().join("composer.json")).unwrap();
    assert_eq!(manifest_before, manifest_after);
    assert!(!tmp.path().join("composer.lock").exists());
}

// ============================================================================
// capstan update
// ============================================================================

#[test]
fn test_update_single_package_uses_partial_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/updatePackage")
            .body_contains("package=acme%2Fcore");
        then.status(200).body("LOCKDATA");
    });

    let tmp = project();

    capstan()
        .args(["update", "acme/core", "--url", server.base_url().as_str()])
        .current_dir(tmp.path())
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_update_everything_uses_generate() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/generate");
        then.status(200).body("LOCKDATA");
    });

    let tmp = project();

    capstan()
        .args(["update", "--url", server.base_url().as_str()])
        .current_dir(tmp.path())
        .assert()
        .success();

    mock.assert();
}

// ============================================================================
// capstan outdated / latest
// ============================================================================

#[test]
fn test_outdated_lists_packages() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/versions/outdated");
        then.status(200)
            .body(r#"{"acme/core": {"current": "2.0.1", "latest": "2.1.0"}}"#);
    });

    let tmp = project();
    fs::write(
        tmp.path().join("composer.lock"),
        r#"{"content-hash": "abc"}"#,
    )
    .unwrap();

    capstan()
        .args(["outdated", "--url", server.base_url().as_str()])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("acme/core 2.0.1 -> 2.1.0"));
}

#[test]
fn test_outdated_requires_lock_file() {
    let tmp = project();

    capstan()
        .args(["outdated", "--url", "http://127.0.0.1:9"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("lock file not found"));
}

#[test]
fn test_latest_reports_advice() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/versions/latest")
            .body_contains("stable=1");
        then.status(200).body(r#"{"acme/core": "2.4.0"}"#);
    });

    let tmp = project();

    capstan()
        .args(["latest", "--stable", "--url", server.base_url().as_str()])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("acme/core: 2.4.0 available"));
}

// ============================================================================
// capstan completions
// ============================================================================

#[test]
fn test_completions_bash() {
    capstan()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capstan"));
}
