//! # Buildkit ZIP Archive Operations (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Packs a file or a directory tree into a `.zip` archive on disk, with entry
//! names relative to the archive root:
//!
//! - a single file becomes one entry named by its base name (`/x/y/file.txt` → `file.txt`);
//! - a directory contributes one entry per file found by a recursive walk,
//!   named by the path relative to that directory (`sub/b.txt`, never `T/sub/b.txt`).
//!
//! ## Architecture
//!
//! - `walkdir` provides the depth-first walk; entries are written in walk order.
//! - Names come from stripping the root prefix off each walked path and joining
//!   the components with `/`, so the process working directory is never touched.
//! - Files are Deflate-compressed with the `zip` crate and keep their Unix permission bits.
//! - An unreadable file or walk error is reported to the `Outcome` and skipped;
//!   the archive's central directory is still written at the end. A read that
//!   fails halfway leaves a truncated entry, which the error message says.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use buildkit::common::archive::zip;
//! use buildkit::core::outcome::{Outcome, Policy};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut outcome = Outcome::new(Policy::Lenient);
//! zip::create_zip(Path::new("./build/docs"), Path::new("./dist/docs.zip"), &mut outcome)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::io::{self, PathKind};
use crate::core::{
    error::{BuildkitError, Result},
    outcome::Outcome,
};
use anyhow::Context;
use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

/// Creates the archive `destination` from `source`.
///
/// Returns `Err` only when the outcome runs under the strict policy and
/// something failed; lenient failures are recorded on `outcome`.
pub fn create_zip(source: &Path, destination: &Path, outcome: &mut Outcome) -> Result<()> {
    let kind = io::classify(source);
    if kind == PathKind::Other {
        return outcome.record(
            source,
            BuildkitError::NotFound {
                path: source.to_path_buf(),
            }
            .into(),
        );
    }

    let Some(mut writer) = outcome.check(destination, open_archive(destination))? else {
        return Ok(());
    };
    // Keeps an archive written inside its own source tree from swallowing itself.
    let archive_path = fs::canonicalize(destination).ok();

    if kind == PathKind::File {
        let added = file_entry_name(source).and_then(|name| add_file(&mut writer, source, &name));
        if outcome.check(source, added)?.is_some() {
            outcome.completed_one();
        }
    } else {
        for entry in WalkDir::new(source).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let failed_path = e.path().map_or_else(|| source.to_path_buf(), Path::to_path_buf);
                    outcome.record(&failed_path, e.into())?;
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if archive_path.is_some() && fs::canonicalize(entry.path()).ok() == archive_path {
                debug!("Skipping the archive being written: {:?}", entry.path());
                continue;
            }
            let name = match relative_entry_name(source, entry.path()) {
                Ok(name) => name,
                Err(e) => {
                    outcome.record(entry.path(), e)?;
                    continue;
                }
            };
            if outcome
                .check(entry.path(), add_file(&mut writer, entry.path(), &name))?
                .is_some()
            {
                outcome.completed_one();
            }
        }
    }

    let finished = writer
        .finish()
        .map_err(BuildkitError::from)
        .with_context(|| format!("Failed to finalize archive {:?}", destination));
    if outcome.check(destination, finished)?.is_some() {
        info!(
            "Wrote {:?} ({} entries)",
            destination,
            outcome.completed()
        );
    }
    Ok(())
}

fn open_archive(destination: &Path) -> Result<ZipWriter<File>> {
    io::ensure_parent_exists(destination)?;
    let file = File::create(destination)
        .with_context(|| format!("Failed to create archive {:?}", destination))?;
    Ok(ZipWriter::new(file))
}

fn add_file<W: Write + Seek>(writer: &mut ZipWriter<W>, path: &Path, name: &str) -> Result<()> {
    // Opened before the entry is started so an unreadable file leaves no empty entry behind.
    let mut file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    let options = entry_options(&file);
    writer
        .start_file(name, options)
        .map_err(BuildkitError::from)
        .with_context(|| format!("Failed to start archive entry '{}'", name))?;
    if let Err(e) = std::io::copy(&mut file, writer) {
        // The entry header is already written; whatever was copied stays in the archive.
        return Err(anyhow::Error::new(e).context(format!(
            "Failed to write {:?} into archive entry '{}' (entry left incomplete)",
            path, name
        )));
    }
    debug!("Added '{}' from {:?}", name, path);
    Ok(())
}

fn entry_options(file: &File) -> FileOptions {
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = file.metadata() {
            return options.unix_permissions(meta.permissions().mode() & 0o777);
        }
    }
    #[cfg(not(unix))]
    let _ = file;
    options
}

/// Entry name for a single archived file: its base name.
fn file_entry_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            BuildkitError::FileSystem(format!("Path has no file name: {:?}", path)).into()
        })
}

/// Entry name for a walked file: its path relative to `root`, `/`-separated.
pub fn relative_entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative: PathBuf = path
        .strip_prefix(root)
        .with_context(|| format!("{:?} is not inside archive root {:?}", path, root))?
        .to_path_buf();
    let name = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if name.is_empty() {
        return Err(BuildkitError::FileSystem(format!(
            "Empty archive entry name for {:?}",
            path
        ))
        .into());
    }
    Ok(name)
}
