//! # Buildkit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utility modules used by the command handlers. Command-specific
//! logic lives in `commands::`, infrastructure (errors, config, outcomes) in
//! `core::`, and the reusable building blocks here:
//!
//! - **`archive`**: ZIP archive creation.
//! - **`fs`**: path classification, copying, removal, separator normalization.
//! - **`process`**: running an external program with text piped to its stdin.
//! - **`text`**: case-insensitive literal patching of project files.
//!
//! ```rust
//! use buildkit::common::{archive, fs, process, text};
//! ```
//!

/// ZIP archive creation.
pub mod archive;
/// Filesystem operations (copy, remove, I/O, path arguments).
pub mod fs;
/// External process execution.
pub mod process;
/// Project file text patching.
pub mod text;
