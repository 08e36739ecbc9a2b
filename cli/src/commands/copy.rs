//! # Buildkit Copy Handler
//!
//! File: cli/src/commands/copy.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `bk-copy <src> <dst>` (also `buildkit copy`): copies a file, or a
//! directory tree, to the destination, creating destination directories as
//! needed and replacing files that already exist there.
//!
//! ## Architecture
//!
//! 1. Both arguments are normalized so `\`-separated paths from upstream build
//!    tools resolve on the host.
//! 2. `common::fs::copy::copy_tree` walks the source node by node.
//! 3. Each failure is recorded on the `Outcome`; other files keep copying under
//!    the default policy, and nothing is rolled back.
//!
//! A source that does not exist is not an error: there is simply nothing to copy.
//!
//! ## Usage
//!
//! ```bash
//! bk-copy resources build/bin/Release/resources
//! bk-copy ..\libraries\glfw\lib\glfw3.dll build\bin\Debug\glfw3.dll
//! ```
//!
use crate::common::fs::{copy, io, io::PathKind, paths};
use crate::core::{cli, error::Result, outcome::Outcome};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{info, warn};

/// Arguments for the copy tool.
#[derive(Parser, Debug)]
#[command(about = "Copy a file or directory tree, creating destination directories")]
pub struct CopyArgs {
    /// File or directory to copy.
    #[arg(value_parser = paths::PathArg)]
    pub source: PathBuf,

    /// Destination path (the copy of `source` itself, not its parent).
    #[arg(value_parser = paths::PathArg)]
    pub destination: PathBuf,

    /// Ignored.
    #[arg(hide = true)]
    pub extra: Vec<OsString>,
}

pub fn handle_copy(args: CopyArgs, outcome: &mut Outcome) -> Result<()> {
    cli::warn_extra_args(&args.extra);
    println!(
        "Copying {} -> {}",
        args.source.display(),
        args.destination.display()
    );
    if io::classify(&args.source) == PathKind::Other {
        warn!(
            "Nothing to copy: {:?} is not a file or directory",
            args.source
        );
        return Ok(());
    }
    copy::copy_tree(&args.source, &args.destination, outcome)?;
    info!(
        "Copied {} file(s), {} failure(s)",
        outcome.completed(),
        outcome.failures().len()
    );
    Ok(())
}
