//! # Buildkit Zip Handler
//!
//! File: cli/src/commands/zip.rs
//! Author: Christi Mahu
//!
//! Implements `bk-zip <src> <dst.zip>` (also `buildkit zip`): packs a file or
//! a directory tree into a zip archive whose entry names are relative to the
//! source (see `common::archive::zip`). The destination's parent directory is
//! created if needed; a partially written archive is left in place on failure.
//!
//! ```bash
//! bk-zip build/bin/Release dist/game-win64.zip
//! ```
//!
use crate::common::{archive, fs::paths};
use crate::core::{cli, error::Result, outcome::Outcome};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Arguments for the zip tool.
#[derive(Parser, Debug)]
#[command(about = "Pack a file or directory tree into a zip archive")]
pub struct ZipArgs {
    /// File or directory to archive. Entry names are relative to it.
    #[arg(value_parser = paths::PathArg)]
    pub source: PathBuf,

    /// Archive file to create (overwritten if it exists).
    #[arg(value_parser = paths::PathArg)]
    pub destination: PathBuf,

    /// Ignored.
    #[arg(hide = true)]
    pub extra: Vec<OsString>,
}

pub fn handle_zip(args: ZipArgs, outcome: &mut Outcome) -> Result<()> {
    cli::warn_extra_args(&args.extra);
    println!(
        "Archiving {} -> {}",
        args.source.display(),
        args.destination.display()
    );
    archive::zip::create_zip(&args.source, &args.destination, outcome)
}
