//! # Buildkit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by every tool:
//! - `cli`: common flags, the standalone-tool harness and exit-status mapping
//! - `config`: optional TOML configuration loading, merging, and validation
//! - `error`: error types and the `Result` alias
//! - `logging`: `tracing` subscriber setup
//! - `outcome`: per-invocation failure aggregation under a lenient or strict policy
//!
//! ## Usage
//!
//! ```rust
//! use buildkit::core::config::Config;
//! use buildkit::core::error::{BuildkitError, Result};
//! use buildkit::core::outcome::{Outcome, Policy};
//! ```
//!
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod outcome;
