//! # Buildkit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers used by the tools:
//!
//! - **`copy`**: node-by-node recursive copy reporting into an `Outcome` (`bk-copy`).
//! - **`io`**: path classification, directory creation, file reading.
//! - **`paths`**: normalization of `\`/`/` separators in path arguments.
//! - **`remove`**: file or tree removal (`bk-remove`).
//!
//! Callers import the submodule they need, e.g. `crate::common::fs::io::ensure_dir_exists`.
//!

/// Recursive copy of files and directory trees.
pub mod copy;
/// Basic I/O helpers (`classify`, `ensure_dir_exists`, `read_file_to_string`).
pub mod io;
/// Path argument normalization.
pub mod paths;
/// Removal of files and directory trees.
pub mod remove;
