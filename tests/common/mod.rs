#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn datahub_cmd() -> Command {
    let mut cmd = Command::cargo_bin("datahub").unwrap();
    cmd.env_remove("DATAHUB_ROOT");
    cmd.env_remove("DATAHUB_LOG");
    cmd
}

/// Initialize a store in `dir`
pub fn init_store(dir: &Path) {
    datahub_cmd().arg("init").arg(dir).assert().success();
}

/// Register and sign in
pub fn sign_in(dir: &Path, email: &str, password: &str) {
    datahub_cmd()
        .current_dir(dir)
        .args(["register", email, password])
        .assert()
        .success();
    datahub_cmd()
        .current_dir(dir)
        .args(["login", email, password])
        .assert()
        .success();
}

/// Create an entry and return its id
pub fn add_entry(dir: &Path, title: &str, content: &str) -> String {
    let output = datahub_cmd()
        .current_dir(dir)
        .args(["add", title, content])
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Created entry ")
        .unwrap_or_else(|| panic!("unexpected add output: {}", stdout))
        .to_string()
}
