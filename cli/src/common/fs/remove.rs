//! # Buildkit Filesystem Removal
//!
//! File: cli/src/common/fs/remove.rs
//! Author: Christi Mahu
//!
//! Deletes a single path: files and symbolic links are unlinked, anything else
//! is removed as a directory tree. A link to a directory is unlinked rather
//! than followed, so the tree it points to is left alone.
//!
use crate::core::error::{BuildkitError, Result};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Removes a file, a symbolic link, or a whole directory tree.
///
/// # Errors
///
/// `BuildkitError::NotFound` when nothing exists at `path`, otherwise the
/// underlying I/O error with the path as context.
pub fn remove_path(path: &Path) -> Result<()> {
    let is_file_like = fs::symlink_metadata(path)
        .map(|meta| !meta.is_dir())
        .unwrap_or(false);

    let result = if is_file_like {
        fs::remove_file(path)
    } else {
        fs::remove_dir_all(path)
    };

    match result {
        Ok(()) => {
            info!("Removed {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(BuildkitError::NotFound {
            path: path.to_path_buf(),
        }
        .into()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {:?}", path)),
    }
}
