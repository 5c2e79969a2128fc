//! CLI integration tests for appinfoctl
//!
//! - appinfoctl compare A B   prints equal/greater/lower
//! - appinfoctl containers    lists expo, native, web
//! - appinfoctl show          initializes and prints the record as JSON

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_appinfoctl"))
        .args(args)
        .env_remove("APP_INFO_LOG")
        .output()
        .expect("Failed to run appinfoctl")
}

fn write_config(dir: &Path) -> String {
    let manifest = dir.join("app.json");
    std::fs::write(
        &manifest,
        r#"{"manifest": {"name": "cli-app", "version": "3.2.1"}}"#,
    )
    .unwrap();

    let config = dir.join("config.toml");
    std::fs::write(
        &config,
        format!(
            "secure_store_path = {:?}\nmanifest_path = {:?}\napp_ownership = \"expo\"\nlog_level = \"warn\"\n",
            dir.join("secure_store.json"),
            manifest,
        ),
    )
    .unwrap();
    config.to_string_lossy().into_owned()
}

#[test]
fn test_compare_lower() {
    let output = run(&["compare", "1.14.5", "2.0.0"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("equal:   false"), "got: {}", stdout);
    assert!(stdout.contains("greater: false"), "got: {}", stdout);
    assert!(stdout.contains("lower:   true"), "got: {}", stdout);
}

#[test]
fn test_compare_equal_with_padding() {
    let output = run(&["compare", "1.14.0", "1.14"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("equal:   true"), "got: {}", stdout);
}

#[test]
fn test_containers_listed() {
    let output = run(&["containers"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["expo", "native", "web"]);
}

#[test]
fn test_show_prints_record_and_keeps_installation_id() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    let first = run(&["--config", &config, "show"]);
    assert!(first.status.success(), "stderr: {}", String::from_utf8_lossy(&first.stderr));
    let first: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();

    assert_eq!(first["appName"], "cli-app");
    assert_eq!(first["appVersion"], "3.2.1");
    assert_eq!(first["appContainer"], "expo");
    assert!(first["installationId"].is_string());

    let second = run(&["--config", &config, "show", "--container", "web"]);
    assert!(second.status.success());
    let second: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();

    assert_eq!(second["installationId"], first["installationId"]);
    assert_ne!(second["sessionId"], first["sessionId"]);
    assert_eq!(second["appContainer"], "web");
}

#[test]
fn test_show_rejects_unknown_container() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    let output = run(&["--config", &config, "show", "--container", "submarine"]);

    assert!(!output.status.success());
}
