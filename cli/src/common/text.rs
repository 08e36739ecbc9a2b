//! # Buildkit Text Patching (`common::text`)
//!
//! File: cli/src/common/text.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A `PatchRule` rewrites project files generated by the build system: on
//! every line, every case-insensitive occurrence of a literal marker becomes a
//! literal replacement. Files are handled as bytes, line by line, so encodings
//! and line endings (`\n`, `\r\n`, missing final newline) come out exactly as
//! they went in.
//!
//! `rewrite_file` never edits a file in place. The new content goes to a
//! temporary file in the same directory, which then replaces the original in a
//! single rename.
//!
use crate::core::{config::PatchConfig, error::Result};
use anyhow::Context;
use regex::bytes::{NoExpand, Regex, RegexBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// A case-insensitive literal substitution restricted to files with a given suffix.
#[derive(Debug, Clone)]
pub struct PatchRule {
    matcher: Regex,
    replacement: Vec<u8>,
    extension: String,
}

impl PatchRule {
    pub fn new(extension: &str, pattern: &str, replacement: &str) -> Result<Self> {
        let matcher = RegexBuilder::new(&regex::escape(pattern))
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Invalid patch pattern '{}'", pattern))?;
        Ok(Self {
            matcher,
            replacement: replacement.as_bytes().to_vec(),
            extension: extension.to_lowercase(),
        })
    }

    pub fn from_config(config: &PatchConfig) -> Result<Self> {
        Self::new(&config.extension, &config.pattern, &config.replacement)
    }

    /// Whether the file name ends with the rule's extension, ignoring case.
    pub fn applies_to(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase().ends_with(&self.extension))
            .unwrap_or(false)
    }

    /// Returns the patched content, or `None` when nothing matches.
    pub fn apply(&self, content: &[u8]) -> Option<Vec<u8>> {
        if !self.matcher.is_match(content) {
            return None;
        }
        let mut patched = Vec::with_capacity(content.len());
        for line in content.split_inclusive(|&byte| byte == b'\n') {
            patched.extend_from_slice(
                &self
                    .matcher
                    .replace_all(line, NoExpand(self.replacement.as_slice())),
            );
        }
        Some(patched)
    }
}

/// Applies `rule` to the file at `path`, replacing it atomically.
///
/// Returns `Ok(false)` when the file contained nothing to patch and was left untouched.
pub fn rewrite_file(path: &Path, rule: &PatchRule) -> Result<bool> {
    let original = fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    let Some(patched) = rule.apply(&original) else {
        debug!("Nothing to patch in {:?}", path);
        return Ok(false);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;
    temp.write_all(&patched)
        .and_then(|()| temp.as_file().sync_all())
        .with_context(|| format!("Failed to write temporary file {:?}", temp.path()))?;
    let permissions = fs::metadata(path)?.permissions();
    fs::set_permissions(temp.path(), permissions)
        .with_context(|| format!("Failed to copy permissions onto {:?}", temp.path()))?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {:?}", path))?;
    Ok(true)
}
