//! # Buildkit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` that the tools share:
//! - **`ensure_dir_exists`**: creates a directory and its parents if needed, and
//!   fails if the path exists as something other than a directory.
//! - **`ensure_parent_exists`**: the same, applied to a file path's parent.
//! - **`read_file_to_string`**: `fs::read_to_string` with the path in the error.
//! - **`classify`**: re-queries the filesystem for a path's kind right before acting.
//! - **`is_dangling_link`**: tells a broken symbolic link apart from a real walk error.
//!
//! ## Usage
//!
//! ```rust
//! use buildkit::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> anyhow::Result<()> {
//! io::ensure_parent_exists(Path::new("out/docs/archive.zip"))?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{BuildkitError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// What a path refers to at the moment it is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    /// Absent, a dangling link, or a special file.
    Other,
}

/// Classifies `path`, following symbolic links.
pub fn classify(path: &Path) -> PathKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => PathKind::File,
        Ok(meta) if meta.is_dir() => PathKind::Directory,
        _ => PathKind::Other,
    }
}

/// Ensures that a directory exists at the specified path (like `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// the directory fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(BuildkitError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Ensures the parent directory of a file path exists.
///
/// Paths without a parent (or with an empty one, like `out.zip`) need nothing.
pub fn ensure_parent_exists(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir_exists(parent),
        _ => Ok(()),
    }
}

/// True when a `walkdir` error comes from a symbolic link whose target is gone.
///
/// Walks that follow links report such entries as errors; callers that treat
/// "neither file nor directory" as a silent skip use this to filter them out.
pub fn is_dangling_link(err: &walkdir::Error) -> bool {
    let not_found = err
        .io_error()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound);
    not_found
        && err.path().is_some_and(|path| {
            fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
        })
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_ensure_parent_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let target = base_dir.path().join("deep/er/out.zip");
        ensure_parent_exists(&target)?;
        assert!(base_dir.path().join("deep/er").is_dir());
        assert!(!target.exists());
        // A bare file name has an empty parent and needs nothing.
        ensure_parent_exists(Path::new("out.zip"))?;
        Ok(())
    }

    #[test]
    fn test_classify() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("f.txt");
        fs::write(&file_path, "x")?;
        assert_eq!(classify(&file_path), PathKind::File);
        assert_eq!(classify(base_dir.path()), PathKind::Directory);
        assert_eq!(classify(&base_dir.path().join("nope")), PathKind::Other);
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_is_dangling_link() -> Result<()> {
        let base_dir = tempdir()?;
        std::os::unix::fs::symlink(base_dir.path().join("gone"), base_dir.path().join("link"))?;
        let errors: Vec<walkdir::Error> = walkdir::WalkDir::new(base_dir.path())
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| entry.err())
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(is_dangling_link(&errors[0]));
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let result = read_file_to_string(&base_dir.path().join("nonexistent.txt"));
        assert!(result.is_err());
        Ok(())
    }
}
