#![allow(deprecated)]

use chrono::Local;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Binary with a clean host environment: no config, editor, active
/// document or workspaces unless a test sets them
fn cmd(temp: &TempDir) -> assert_cmd::Command {
    cmd_with_config(temp, &temp.path().join("no-config.yaml"))
}

fn cmd_with_config(temp: &TempDir, config: &Path) -> assert_cmd::Command {
    let mut c = assert_cmd::Command::cargo_bin("date-md").unwrap();
    c.env("HOME", temp.path())
        .env_remove("DATE_MD_ACTIVE")
        .env_remove("DATE_MD_WORKSPACES")
        .env_remove("DATE_MD_CONFIG")
        .env_remove("VISUAL")
        .env_remove("EDITOR")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config);
    c
}

fn today_name() -> String {
    format!("{}.md", Local::now().format("%Y%m%d"))
}

fn today_suffixed(n: u32) -> String {
    format!("{}_{}.md", Local::now().format("%Y%m%d"), n)
}

fn dir(temp: &TempDir, name: &str) -> std::path::PathBuf {
    let path = temp.path().join(name);
    fs::create_dir_all(&path).unwrap();
    path
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).unwrap().next().is_none()
}

#[test]
fn new_creates_empty_note_in_target_directory() {
    let temp = TempDir::new().unwrap();
    let proj = dir(&temp, "proj");

    cmd(&temp)
        .args(["--no-open", "new"])
        .arg(&proj)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Created file: {}", today_name())));

    let note = proj.join(today_name());
    assert_eq!(fs::metadata(&note).unwrap().len(), 0);
}

#[test]
fn bare_invocation_uses_first_workspace() {
    let temp = TempDir::new().unwrap();
    let w1 = dir(&temp, "w1");
    let w2 = dir(&temp, "w2");

    cmd(&temp)
        .arg("--no-open")
        .arg("-w")
        .arg(&w1)
        .arg("-w")
        .arg(&w2)
        .assert()
        .success();

    assert!(w1.join(today_name()).is_file());
    assert!(is_empty_dir(&w2));
}

#[test]
fn workspaces_from_environment() {
    let temp = TempDir::new().unwrap();
    let w1 = dir(&temp, "w1");
    let w2 = dir(&temp, "w2");
    let list = std::env::join_paths([&w1, &w2]).unwrap();

    cmd(&temp)
        .env("DATE_MD_WORKSPACES", list)
        .args(["--no-open", "new"])
        .assert()
        .success();

    assert!(w1.join(today_name()).is_file());
}

#[test]
fn workspaces_from_config_file() {
    let temp = TempDir::new().unwrap();
    let notes = dir(&temp, "notes");
    let config = temp.path().join("config.yaml");
    fs::write(&config, format!("workspaces:\n  - \"{}\"\n", notes.display())).unwrap();

    cmd_with_config(&temp, &config)
        .args(["--no-open", "new"])
        .assert()
        .success();

    assert!(notes.join(today_name()).is_file());
}

#[test]
fn second_note_same_day_gets_suffix() {
    let temp = TempDir::new().unwrap();
    let proj = dir(&temp, "proj");

    for _ in 0..3 {
        cmd(&temp).args(["--no-open", "new"]).arg(&proj).assert().success();
    }

    assert!(proj.join(today_name()).is_file());
    assert!(proj.join(today_suffixed(1)).is_file());
    assert!(proj.join(today_suffixed(2)).is_file());
}

#[test]
fn file_target_creates_sibling() {
    let temp = TempDir::new().unwrap();
    let docs = dir(&temp, "docs");
    let plan = docs.join("plan.txt");
    fs::write(&plan, "plan").unwrap();

    cmd(&temp).args(["--no-open", "new"]).arg(&plan).assert().success();

    assert!(docs.join(today_name()).is_file());
}

#[test]
fn selection_first_entry_is_target() {
    let temp = TempDir::new().unwrap();
    let a = dir(&temp, "a");
    let b = dir(&temp, "b");

    cmd(&temp)
        .arg("--no-open")
        .arg("--selection")
        .arg(&a)
        .arg("--selection")
        .arg(&b)
        .assert()
        .success();

    assert!(a.join(today_name()).is_file());
    assert!(is_empty_dir(&b));
}

#[test]
fn active_document_beats_workspace() {
    let temp = TempDir::new().unwrap();
    let docs = dir(&temp, "docs");
    let open = docs.join("readme.md");
    fs::write(&open, "# readme").unwrap();
    let root = dir(&temp, "root");

    cmd(&temp)
        .env("DATE_MD_ACTIVE", &open)
        .arg("--no-open")
        .arg("-w")
        .arg(&root)
        .assert()
        .success();

    assert!(docs.join(today_name()).is_file());
    assert!(is_empty_dir(&root));
}

#[test]
fn selection_beats_active_document() {
    let temp = TempDir::new().unwrap();
    let docs = dir(&temp, "docs");
    let open = docs.join("readme.md");
    fs::write(&open, "# readme").unwrap();
    let picked = dir(&temp, "picked");

    cmd(&temp)
        .env("DATE_MD_ACTIVE", &open)
        .arg("--no-open")
        .arg("--selection")
        .arg(&picked)
        .assert()
        .success();

    assert!(picked.join(today_name()).is_file());
    assert!(!docs.join(today_name()).exists());
}

#[test]
fn ignored_active_document_is_reported() {
    let temp = TempDir::new().unwrap();
    let root = dir(&temp, "root");

    cmd(&temp)
        .args(["-v", "--no-open", "--active", "notes:draft.md", "-w"])
        .arg(&root)
        .assert()
        .success()
        .stderr(predicate::str::contains("'notes:draft.md' is not a local file"));

    assert!(root.join(today_name()).is_file());
}

#[test]
fn untitled_active_document_falls_back_to_workspace() {
    let temp = TempDir::new().unwrap();
    let root = dir(&temp, "root");

    cmd(&temp)
        .args(["--no-open", "--active", "untitled:Untitled-1", "-w"])
        .arg(&root)
        .assert()
        .success();

    assert!(root.join(today_name()).is_file());
}

#[test]
fn nothing_open_reports_no_workspace() {
    let temp = TempDir::new().unwrap();

    cmd(&temp)
        .arg("--no-open")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create file"))
        .stderr(predicate::str::contains("No workspace is open"));
}

#[test]
fn vanished_target_does_not_fall_back() {
    let temp = TempDir::new().unwrap();
    let root = dir(&temp, "root");
    let gone = temp.path().join("gone.txt");

    cmd(&temp)
        .args(["--no-open", "new"])
        .arg(&gone)
        .arg("-w")
        .arg(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read metadata"));

    assert!(is_empty_dir(&root));
}

#[test]
fn resolve_prints_without_creating() {
    let temp = TempDir::new().unwrap();
    let proj = dir(&temp, "proj");
    fs::write(proj.join(today_name()), "").unwrap();

    cmd(&temp)
        .arg("resolve")
        .arg(&proj)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("File: {}", today_suffixed(1))));

    assert!(!proj.join(today_suffixed(1)).exists());
}

#[test]
fn new_json_output() {
    let temp = TempDir::new().unwrap();
    let proj = dir(&temp, "proj");

    let out = cmd(&temp)
        .args(["--no-open", "--json", "new"])
        .arg(&proj)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["file_name"].as_str(), Some(today_name().as_str()));
    assert!(json["path"].as_str().unwrap().ends_with(&today_name()));
}

#[test]
fn list_shows_dated_notes_only() {
    let temp = TempDir::new().unwrap();
    let proj = dir(&temp, "proj");
    for name in ["20240115.md", "20240115_1.md", "ideas.md"] {
        fs::write(proj.join(name), "").unwrap();
    }

    cmd(&temp)
        .arg("list")
        .arg(&proj)
        .assert()
        .success()
        .stdout(predicate::str::contains("- 20240115.md"))
        .stdout(predicate::str::contains("- 20240115_1.md"))
        .stdout(predicate::str::contains("ideas.md").not());

    let out = cmd(&temp)
        .args(["ls", "--json"])
        .arg(&proj)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json, serde_json::json!(["20240115.md", "20240115_1.md"]));
}

#[cfg(unix)]
#[test]
fn editor_is_run_on_new_note() {
    let temp = TempDir::new().unwrap();
    let proj = dir(&temp, "proj");

    cmd(&temp)
        .env("EDITOR", "true")
        .arg("new")
        .arg(&proj)
        .assert()
        .success();

    assert!(proj.join(today_name()).is_file());
}

#[cfg(unix)]
#[test]
fn failing_editor_keeps_note_and_reports_open_failure() {
    let temp = TempDir::new().unwrap();
    let proj = dir(&temp, "proj");

    cmd(&temp)
        .args(["--editor", "false", "new"])
        .arg(&proj)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Created file:"))
        .stderr(predicate::str::contains("Failed to open file"));

    assert!(proj.join(today_name()).is_file());
}
