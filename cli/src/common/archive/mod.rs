//! # Buildkit Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Archive-related utilities. The only format needed by the build is ZIP,
//! written to disk by `bk-zip` for packaging build output.
//!
//! - **`zip`**: creates a `.zip` from a file or directory tree with root-relative entry names.
//!
//! ```rust
//! use buildkit::common::archive;
//! use buildkit::core::outcome::{Outcome, Policy};
//! use std::path::Path;
//!
//! # fn run() -> anyhow::Result<()> {
//! let mut outcome = Outcome::new(Policy::Strict);
//! archive::zip::create_zip(Path::new("./bin"), Path::new("./dist/bin.zip"), &mut outcome)?;
//! # Ok(())
//! # }
//! ```
//!

pub mod zip;
