//! # Buildkit Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Recursive copy of a file or directory tree, node by node, so that a failure
//! on one file can be reported without losing the rest of the tree.
//!
//! ## Architecture
//!
//! `copy_tree` classifies the source immediately before acting on it:
//! - **file**: an existing target file is deleted, missing parent directories
//!   are created, the bytes are copied (`fs::copy` carries the permission
//!   bits) and the modification time is applied to the copy.
//! - **directory**: `walkdir` visits the tree in the order the OS lists it,
//!   following links. Each directory is created under the target (so empty
//!   directories survive) and each file is copied as above, at the target
//!   joined with its path relative to the source.
//! - **anything else** (absent, dangling link, special file): silently skipped.
//!
//! Failures go to the `Outcome` at the entry where they happen. A directory
//! that cannot be created is not descended into; its siblings still are.
//! Nothing already copied is rolled back.
//!
//! ## Usage
//!
//! ```rust
//! use buildkit::common::fs::copy;
//! use buildkit::core::outcome::{Outcome, Policy};
//! use std::path::Path;
//!
//! # fn run_example() -> anyhow::Result<()> {
//! let mut outcome = Outcome::new(Policy::Lenient);
//! copy::copy_tree(Path::new("./resources"), Path::new("./build/resources"), &mut outcome)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::io::{self, PathKind};
use crate::core::{error::Result, outcome::Outcome};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Copies `source` to `target`, recursing into directories.
///
/// Returns `Err` only when the outcome runs under the strict policy and an
/// entry failed.
pub fn copy_tree(source: &Path, target: &Path, outcome: &mut Outcome) -> Result<()> {
    match io::classify(source) {
        PathKind::File => {
            if outcome.check(source, copy_file(source, target))?.is_some() {
                outcome.completed_one();
            }
        }
        PathKind::Directory => copy_directory(source, target, outcome)?,
        PathKind::Other => debug!("Skipping {:?}: not a file or directory", source),
    }
    Ok(())
}

fn copy_directory(source: &Path, target: &Path, outcome: &mut Outcome) -> Result<()> {
    let mut walker = WalkDir::new(source).follow_links(true).into_iter();
    while let Some(entry_result) = walker.next() {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) if io::is_dangling_link(&e) => {
                debug!("Skipping dangling link: {:?}", e.path());
                continue;
            }
            Err(e) => {
                let failed_path = e.path().map_or_else(|| source.to_path_buf(), Path::to_path_buf);
                outcome.record(
                    &failed_path,
                    anyhow::Error::new(e).context("Failed to read directory entry"),
                )?;
                continue;
            }
        };
        let src_path = entry.path();
        let relative = src_path
            .strip_prefix(source)
            .with_context(|| format!("{:?} is not inside {:?}", src_path, source));
        let Some(relative) = outcome.check(src_path, relative)? else {
            continue;
        };
        let target_path = if relative.as_os_str().is_empty() {
            target.to_path_buf()
        } else {
            target.join(relative)
        };

        if entry.file_type().is_dir() {
            if outcome
                .check(src_path, io::ensure_dir_exists(&target_path))?
                .is_none()
            {
                walker.skip_current_dir();
            }
        } else if entry.file_type().is_file() {
            if outcome
                .check(src_path, copy_file(src_path, &target_path))?
                .is_some()
            {
                outcome.completed_one();
            }
        } else {
            debug!("Skipping {:?}: not a file or directory", src_path);
        }
    }
    Ok(())
}

/// Copies a single file, replacing any existing file at `target`.
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if target.is_file() {
        fs::remove_file(target)
            .with_context(|| format!("Failed to remove existing file {:?}", target))?;
    }
    io::ensure_parent_exists(target)?;
    fs::copy(source, target)
        .with_context(|| format!("Failed to copy {:?} to {:?}", source, target))?;
    copy_modified_time(source, target)?;
    info!("Copied {:?} -> {:?}", source, target);
    Ok(())
}

fn copy_modified_time(source: &Path, target: &Path) -> Result<()> {
    let modified = fs::metadata(source)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("Failed to read modification time of {:?}", source))?;

    // The copy inherited the source permissions; a read-only copy has to be
    // opened for writing briefly to set its timestamp.
    let permissions = fs::metadata(target)?.permissions();
    if permissions.readonly() {
        let mut writable = permissions.clone();
        #[allow(clippy::permissions_set_readonly_false)]
        writable.set_readonly(false);
        fs::set_permissions(target, writable)?;
    }
    let result = fs::File::options()
        .write(true)
        .open(target)
        .and_then(|file| file.set_modified(modified));
    if permissions.readonly() {
        fs::set_permissions(target, permissions)?;
    }
    result.with_context(|| format!("Failed to set modification time on {:?}", target))
}
