//! # Buildkit
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! Helper tools invoked by a native-code build orchestrator: remove, copy,
//! zip, doxygen and project-file patching. Each tool has its own binary
//! (`bk-remove`, `bk-copy`, `bk-zip`, `bk-doxygen`, `bk-patch`) and is also
//! available as a subcommand of `buildkit`.
//!
//! - `commands`: argument structs and handlers, one module per tool
//! - `common`: filesystem, archive, process and text building blocks
//! - `core`: errors, configuration, logging, outcomes and the tool harness
//!
pub mod commands;
pub mod common;
pub mod core;
