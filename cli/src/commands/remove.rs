//! # Buildkit Remove Handler
//!
//! File: cli/src/commands/remove.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `bk-remove <path>` (also `buildkit remove <path>`): deletes a
//! file, or a whole directory tree, at the given path. There is no dry run,
//! no confirmation and no undo.
//!
//! A path that is already gone is reported as a failure but, under the default
//! policy, the tool still exits 0, so calling it twice on the same path is safe.
//!
//! ## Usage
//!
//! ```bash
//! bk-remove build/intermediate
//! bk-remove build\bin\Release\game.pdb
//! ```
//!
use crate::common::fs::{paths, remove};
use crate::core::{cli, error::Result, outcome::Outcome};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Arguments for the remove tool.
#[derive(Parser, Debug)]
#[command(about = "Delete a file or a directory tree")]
pub struct RemoveArgs {
    /// File or directory to delete.
    #[arg(value_parser = paths::PathArg)]
    pub path: PathBuf,

    /// Ignored.
    #[arg(hide = true)]
    pub extra: Vec<OsString>,
}

pub fn handle_remove(args: RemoveArgs, outcome: &mut Outcome) -> Result<()> {
    cli::warn_extra_args(&args.extra);
    println!("Removing {}", args.path.display());
    if outcome
        .check(&args.path, remove::remove_path(&args.path))?
        .is_some()
    {
        outcome.completed_one();
    }
    Ok(())
}
