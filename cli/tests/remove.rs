//! # Buildkit Remove Integration Tests
//!
//! File: cli/tests/remove.rs
//! Author: Christi Mahu
//!
//! Integration tests for `bk-remove`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_remove_directory_tree() {
    let temp = tempdir().unwrap();
    let tree = temp.path().join("obj");
    fs::create_dir_all(tree.join("Debug/x64")).unwrap();
    fs::write(tree.join("Debug/x64/main.obj"), "obj").unwrap();

    tool_cmd("bk-remove", temp.path())
        .arg("obj")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removing obj"));

    assert!(!tree.exists());
}

#[test]
fn test_remove_single_file() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("game.pdb"), "pdb").unwrap();
    fs::write(temp.path().join("game.exe"), "exe").unwrap();

    tool_cmd("bk-remove", temp.path())
        .arg("game.pdb")
        .assert()
        .success();

    assert!(!temp.path().join("game.pdb").exists());
    assert!(temp.path().join("game.exe").exists());
}

#[test]
fn test_remove_twice_is_idempotent() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("gen")).unwrap();

    tool_cmd("bk-remove", temp.path()).arg("gen").assert().success();
    tool_cmd("bk-remove", temp.path())
        .arg("gen")
        .assert()
        .success()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_remove_missing_with_strict_fails() {
    let temp = tempdir().unwrap();
    tool_cmd("bk-remove", temp.path())
        .args(["--strict", "nothing-here"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nothing-here"));
}

#[test]
fn test_broken_project_config_does_not_block_remove_or_copy() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join(".buildkit.toml"), "[patch]\nbogus = 1\n").unwrap();
    fs::write(temp.path().join("victim.txt"), "x").unwrap();

    tool_cmd("bk-copy", temp.path())
        .args(["--strict", "victim.txt", "copy.txt"])
        .assert()
        .success();
    tool_cmd("bk-remove", temp.path())
        .args(["--strict", "victim.txt"])
        .assert()
        .success();

    assert!(temp.path().join("copy.txt").is_file());
    assert!(!temp.path().join("victim.txt").exists());
}

// Linux file systems accept arbitrary bytes in names; APFS does not.
#[test]
#[cfg(target_os = "linux")]
fn test_remove_non_utf8_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = tempdir().unwrap();
    let name = OsStr::from_bytes(b"build\xff");
    fs::create_dir_all(temp.path().join(name).join("obj")).unwrap();

    tool_cmd("bk-remove", temp.path())
        .args([OsStr::new("--strict"), name])
        .assert()
        .success();

    assert!(!temp.path().join(name).exists());
}
