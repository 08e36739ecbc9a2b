//! # Buildkit Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types shared by every tool. It follows the
//! usual two-layer approach:
//! - `BuildkitError`: a `thiserror` enum for the failures the tools know how to name
//! - `Result<T>`: an alias for `anyhow::Result<T>` so call sites can add context freely
//!
//! The variants map onto the error taxonomy the tools report:
//! - not-found (a target path is absent)
//! - filesystem / archive / external command failures
//! - configuration and argument problems
//!
//! ## Examples
//!
//! ```rust
//! use buildkit::core::error::{BuildkitError, Result};
//! use std::path::Path;
//!
//! fn require(path: &Path) -> Result<()> {
//!     if !path.exists() {
//!         return Err(BuildkitError::NotFound { path: path.to_path_buf() }.into());
//!     }
//!     Ok(())
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the buildkit tools.
#[derive(Error, Debug)]
pub enum BuildkitError {
    #[error("Path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Zip archive error: {source}")]
    Archive {
        #[from]
        source: zip::result::ZipError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External command failed: {cmd}: {reason}")]
    ExternalCommand { cmd: String, reason: String },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
