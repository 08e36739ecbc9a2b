//! # Buildkit Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! One module per tool. Each defines a `clap` argument struct, validated once
//! at the boundary, and a handler with the shared signature
//! `fn(Args, &mut Outcome) -> Result<()>` (see `core::cli::Handler`), so the
//! same handler serves both the standalone `bk-*` binary and the matching
//! `buildkit` subcommand. Handlers that need configuration load it themselves.
//!
//! ## Tools
//!
//! - `copy`: `bk-copy <src> <dst>`
//! - `doxygen`: `bk-doxygen <srcDir> <dstDir> <projectName>`
//! - `patch`: `bk-patch <root>`
//! - `remove`: `bk-remove <path>`
//! - `zip`: `bk-zip <src> <dst.zip>`
//!

/// Recursive copy of a file or directory tree.
pub mod copy;
/// Doxygen configuration merge and invocation.
pub mod doxygen;
/// In-place patching of project files.
pub mod patch;
/// Removal of a file or directory tree.
pub mod remove;
/// Zip packaging of a file or directory tree.
pub mod zip;
