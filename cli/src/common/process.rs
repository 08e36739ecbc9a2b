//! # Buildkit Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Wrappers around `std::process::Command` for tools that drive an external
//! program:
//!
//! - **`tool_dir`**: the directory holding the running executable. Companion
//!   files (the doxygen binary and its base template) are looked up there.
//! - **`companion_executable`**: a program name next to the running tool, with
//!   the platform executable suffix.
//! - **`pipe_to_command`**: spawns a program, writes a text blob to its stdin,
//!   closes stdin and waits. The exit status is returned to the caller, which
//!   decides whether it matters.
//!
use crate::core::error::{BuildkitError, Result};
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

/// Directory containing the running executable.
pub fn tool_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        BuildkitError::FileSystem(format!("Executable path has no parent: {:?}", exe)).into()
    })
}

/// `name` plus the platform executable suffix, located next to the running tool.
pub fn companion_executable(name: &str) -> Result<PathBuf> {
    Ok(tool_dir()?.join(format!("{}{}", name, std::env::consts::EXE_SUFFIX)))
}

/// Runs `program` with `args`, feeding `input` to its stdin, and waits for it.
///
/// # Errors
///
/// `BuildkitError::ExternalCommand` if the program cannot be started, or an
/// I/O error if writing its stdin or waiting on it fails. A non-zero exit
/// status is not an error here.
pub fn pipe_to_command(program: &Path, args: &[&str], input: &str) -> Result<ExitStatus> {
    info!("Running {:?} {:?}", program, args);
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| BuildkitError::ExternalCommand {
            cmd: program.display().to_string(),
            reason: e.to_string(),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(input.as_bytes()) {
            drop(stdin);
            // Reap the child before reporting; it may still be running.
            let _ = child.kill();
            match child.wait() {
                Ok(status) => debug!("{:?} exited with {} after a failed write", program, status),
                Err(wait_err) => debug!("Failed to wait for {:?}: {}", program, wait_err),
            }
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to write to stdin of {:?}", program)));
        }
        // Dropping stdin closes the pipe so the child sees end of input.
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {:?}", program))?;
    debug!("{:?} exited with {}", program, status);
    Ok(status)
}
