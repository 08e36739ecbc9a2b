//! # Buildkit Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! that declares `mod common;` gets commands pointing at the binaries built
//! for the current test run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// `assert_cmd::Command` for one of the standalone tools (`bk-copy`, `bk-zip`, ...).
///
/// The command runs inside `workdir` so no `.buildkit.toml` from the
/// repository checkout leaks into the test. `HOME` and `XDG_CONFIG_HOME` point
/// into `workdir` as well, so the developer's user config is never read.
pub fn tool_cmd(name: &str, workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(name)
        .unwrap_or_else(|e| panic!("Failed to find {} binary for testing: {}", name, e));
    cmd.current_dir(workdir)
        .env_remove("RUST_LOG")
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", user_config_home(workdir));
    cmd
}

/// Value of `XDG_CONFIG_HOME` for commands built by `tool_cmd`.
pub fn user_config_home(workdir: &Path) -> std::path::PathBuf {
    workdir.join(".config")
}

/// `assert_cmd::Command` for the `buildkit` multiplexer.
pub fn buildkit_cmd(workdir: &Path) -> Command {
    tool_cmd("buildkit", workdir)
}
