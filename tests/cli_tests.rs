//! End-to-end tests for the `confstore` binary.

#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn confstore_cmd(root: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("confstore"));
    cmd.args(["--app", "demo", "--root"]).arg(root.path());
    cmd
}

#[test]
fn test_dir_prints_app_directory() {
    let root = TempDir::new().unwrap();
    let expected = root.path().join("demo");

    confstore_cmd(&root)
        .arg("dir")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().as_ref()));
}

#[test]
fn test_path_joins_relative_file() {
    let root = TempDir::new().unwrap();
    let expected = root.path().join("demo").join("nested").join("a.json");

    confstore_cmd(&root)
        .args(["path", "nested/a.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().as_ref()));
}

#[test]
fn test_show_creates_empty_file() {
    let root = TempDir::new().unwrap();

    confstore_cmd(&root)
        .args(["show", "prefs.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));

    assert!(root.path().join("demo/prefs.toml").is_file());
}

#[test]
fn test_show_prints_existing_content_as_json() {
    let root = TempDir::new().unwrap();
    let app_dir = root.path().join("demo");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("prefs.yaml"), "theme: nord\nsize: 12\n").unwrap();

    confstore_cmd(&root)
        .args(["show", "prefs.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"theme\": \"nord\""))
        .stdout(predicate::str::contains("\"size\": 12"));
}

#[test]
fn test_convert_between_formats() {
    let root = TempDir::new().unwrap();
    let app_dir = root.path().join("demo");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("prefs.json"), r#"{"theme": "nord", "size": 12}"#).unwrap();

    confstore_cmd(&root)
        .args(["convert", "prefs.json", "prefs.toml"])
        .assert()
        .success();

    let toml_text = fs::read_to_string(app_dir.join("prefs.toml")).unwrap();
    assert!(toml_text.contains("theme = \"nord\""));
    assert!(toml_text.contains("size = 12"));
}

#[test]
fn test_convert_missing_source_fails() {
    let root = TempDir::new().unwrap();

    confstore_cmd(&root)
        .args(["convert", "absent.json", "out.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(!root.path().join("demo/absent.json").exists());
}

#[test]
fn test_unknown_format_fails() {
    let root = TempDir::new().unwrap();

    confstore_cmd(&root)
        .args(["show", "prefs.ini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown configuration format"));
}

#[test]
fn test_formats_lists_defaults() {
    let root = TempDir::new().unwrap();

    confstore_cmd(&root)
        .arg("formats")
        .assert()
        .success()
        .stdout("json\ntoml\nyaml\nyml\n");
}

#[test]
fn test_empty_app_name_is_rejected() {
    Command::new(cargo_bin("confstore"))
        .args(["--app", "", "dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("application name must not be empty"));
}
