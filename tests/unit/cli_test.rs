//! Integration tests for the todopro CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn todopro(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("todopro"));
    cmd.env("TODOPRO_HOME", home.path()).env_remove("TODOPRO_API_URL");
    cmd
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    todopro(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("todopro"));
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    todopro(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("manage your tasks"));
}

#[test]
fn test_no_args_shows_info() {
    let home = TempDir::new().unwrap();
    todopro(&home).assert().success().stdout(predicate::str::contains("todopro v"));
}

#[test]
fn test_version_json() {
    let home = TempDir::new().unwrap();
    todopro(&home)
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_config_set_url_and_show() {
    let home = TempDir::new().unwrap();

    todopro(&home)
        .args(["config", "set-url", "https://todo.example.com/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://todo.example.com"));

    let content = std::fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(content.contains("https://todo.example.com"));

    todopro(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in use:    https://todo.example.com"));

    todopro(&home)
        .args(["config", "show", "--api-url", "http://127.0.0.1:1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in use:    http://127.0.0.1:1234"));
}

#[test]
fn test_config_rejects_bad_url() {
    let home = TempDir::new().unwrap();
    todopro(&home)
        .args(["config", "set-url", "todo.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must start with http"));
}

#[test]
fn test_logout_when_signed_out() {
    let home = TempDir::new().unwrap();
    todopro(&home)
        .args(["logout", "--api-url", "http://127.0.0.1:9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_task_add_rejects_blank_title() {
    let home = TempDir::new().unwrap();
    todopro(&home)
        .args(["task", "add", "   ", "--api-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title is required"));
}
