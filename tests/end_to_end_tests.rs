//! Full register-to-logout walkthrough

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{add_entry, datahub_cmd, init_store};

#[test]
fn test_full_session() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    init_store(dir);

    datahub_cmd()
        .current_dir(dir)
        .args(["register", "u@test.com", "pw1"])
        .assert()
        .success();
    datahub_cmd()
        .current_dir(dir)
        .args(["login", "u@test.com", "pw1"])
        .assert()
        .success();

    let id = add_entry(dir, "Note", "Hi");

    let output = datahub_cmd().current_dir(dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Note"));

    datahub_cmd()
        .current_dir(dir)
        .args(["edit", &id, "--title", "Note2"])
        .assert()
        .success();
    datahub_cmd()
        .current_dir(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note2"));

    datahub_cmd()
        .current_dir(dir)
        .args(["delete", &id])
        .assert()
        .success();
    datahub_cmd()
        .current_dir(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));

    datahub_cmd()
        .current_dir(dir)
        .arg("logout")
        .assert()
        .success();
    datahub_cmd()
        .current_dir(dir)
        .args(["login", "u@test.com", "wrong"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid email or password"));
}

#[test]
fn test_simulated_latency_does_not_change_results() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    datahub_cmd()
        .arg("init")
        .arg(dir)
        .args(["--latency-ms", "20"])
        .assert()
        .success();

    datahub_cmd()
        .current_dir(dir)
        .args(["register", "u@test.com", "pw1"])
        .assert()
        .success();
    datahub_cmd()
        .current_dir(dir)
        .args(["login", "u@test.com", "pw1"])
        .assert()
        .success();
}
