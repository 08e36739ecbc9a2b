//! # Buildkit Doxygen Handler
//!
//! File: cli/src/commands/doxygen.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `bk-doxygen <srcDir> <dstDir> <projectName>` (also
//! `buildkit doxygen`): builds a doxygen configuration for one project and
//! streams it to doxygen's standard input.
//!
//! ## Architecture
//!
//! 1. Read the base template, `doxygen.conf` next to the running tool (or
//!    `doxygen.template` from configuration).
//! 2. If `<srcDir>/doxygen/doxygen.conf` exists, append it verbatim. No key
//!    merging happens here: doxygen keeps the last value it reads for a key,
//!    so the project fragment wins.
//! 3. Replace every `$INPUT`, then `$OUTPUT`, then `$PROJECT_NAME`.
//! 4. Run `doxygen -` (next to the tool, or `doxygen.executable`) with the
//!    result on stdin and wait for it. Its exit status is logged, never
//!    treated as a failure; only failing to launch or feed it is.
//!
//! ## Usage
//!
//! ```bash
//! bk-doxygen libraries/chaos build/doc/chaos chaos
//! ```
//!
use crate::common::{
    fs::{io, paths},
    process,
};
use crate::core::{
    cli,
    config::{self, Config},
    error::Result,
    outcome::Outcome,
};
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Placeholder replaced by the source directory.
pub const INPUT_TOKEN: &str = "$INPUT";
/// Placeholder replaced by the output directory.
pub const OUTPUT_TOKEN: &str = "$OUTPUT";
/// Placeholder replaced by the project name.
pub const PROJECT_NAME_TOKEN: &str = "$PROJECT_NAME";

const DOXYGEN_PROGRAM: &str = "doxygen";
const TEMPLATE_FILENAME: &str = "doxygen.conf";

/// Arguments for the doxygen tool.
#[derive(Parser, Debug)]
#[command(about = "Generate documentation by piping a merged configuration to doxygen")]
pub struct DoxygenArgs {
    /// Directory containing the sources to document (substituted for `$INPUT`).
    #[arg(value_parser = paths::PathArg)]
    pub source_dir: PathBuf,

    /// Directory doxygen writes its output to (substituted for `$OUTPUT`).
    #[arg(value_parser = paths::PathArg)]
    pub output_dir: PathBuf,

    /// Project name (substituted for `$PROJECT_NAME`).
    pub project_name: String,

    /// Ignored.
    #[arg(hide = true)]
    pub extra: Vec<OsString>,
}

pub fn handle_doxygen(args: DoxygenArgs, outcome: &mut Outcome) -> Result<()> {
    cli::warn_extra_args(&args.extra);
    let config = config::load_config()?;
    generate(args, &config, outcome)
}

/// Builds the configuration for `args` and runs doxygen on it.
pub fn generate(args: DoxygenArgs, config: &Config, outcome: &mut Outcome) -> Result<()> {
    println!(
        "Generating documentation for '{}' from {} into {}",
        args.project_name,
        args.source_dir.display(),
        args.output_dir.display()
    );

    let template_path = match &config.doxygen.template {
        Some(path) => Ok(PathBuf::from(path)),
        None => process::tool_dir().map(|dir| dir.join(TEMPLATE_FILENAME)),
    };
    let document = template_path
        .and_then(|template| build_document(&template, &args, config));
    let Some(document) = outcome.check(&args.source_dir, document)? else {
        return Ok(());
    };

    let executable = match &config.doxygen.executable {
        Some(path) => Ok(PathBuf::from(path)),
        None => process::companion_executable(DOXYGEN_PROGRAM),
    };
    let run = executable
        .and_then(|program| process::pipe_to_command(&program, &["-"], &document));
    if let Some(status) = outcome.check(&args.source_dir, run)? {
        if status.success() {
            info!("doxygen finished for '{}'", args.project_name);
        } else {
            warn!("doxygen exited with {} (ignored)", status);
        }
        outcome.completed_one();
    }
    Ok(())
}

/// Reads the template and optional project fragment and renders the final configuration.
fn build_document(template: &Path, args: &DoxygenArgs, config: &Config) -> Result<String> {
    debug!("Loading doxygen template {:?}", template);
    let base = io::read_file_to_string(template)?;

    let fragment_path = args
        .source_dir
        .join(&config.doxygen.override_dir)
        .join(&config.doxygen.override_file);
    let fragment = if fragment_path.is_file() {
        info!("Appending project doxygen settings from {:?}", fragment_path);
        Some(io::read_file_to_string(&fragment_path)?)
    } else {
        debug!("No project doxygen settings at {:?}", fragment_path);
        None
    };

    Ok(render_config(
        &base,
        fragment.as_deref(),
        &args.source_dir.display().to_string(),
        &args.output_dir.display().to_string(),
        &args.project_name,
    ))
}

/// Concatenates `base` and `fragment`, then substitutes the three placeholders.
pub fn render_config(
    base: &str,
    fragment: Option<&str>,
    input: &str,
    output: &str,
    project_name: &str,
) -> String {
    let mut merged = base.to_string();
    if let Some(fragment) = fragment {
        if !merged.is_empty() && !merged.ends_with('\n') {
            merged.push('\n');
        }
        merged.push_str(fragment);
    }
    merged
        .replace(INPUT_TOKEN, input)
        .replace(OUTPUT_TOKEN, output)
        .replace(PROJECT_NAME_TOKEN, project_name)
}
