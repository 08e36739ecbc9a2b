//! # Buildkit Project Patch Handler
//!
//! File: cli/src/commands/patch.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `bk-patch <root>` (also `buildkit patch`): walks `root` and
//! rewrites every project file (by default `*.vcxproj`) whose lines contain the
//! configured marker, replacing each case-insensitive occurrence with the
//! configured replacement. By default this turns
//! `<CharacterSet>Unicode</CharacterSet>` into
//! `<CharacterSet>MultiByte</CharacterSet>` in generated Visual Studio projects.
//!
//! ## Architecture
//!
//! - `patch_tree` walks `root` with `walkdir` (following links) and hands
//!   eligible files to a patch function (normally `common::text::rewrite_file`).
//! - Errors are recorded on the `Outcome` for the entry they belong to, so an
//!   unreadable file or directory only costs that entry; siblings and other
//!   subtrees are still patched under the default policy.
//! - Files with other extensions, dangling links, and anything that is not a
//!   file or a directory are skipped without comment.
//! - Configuration (`[patch]` in `.buildkit.toml`) is loaded by the handler
//!   itself; a broken config file fails this tool only.
//!
//! ## Usage
//!
//! ```bash
//! bk-patch build/projects
//! ```
//!
use crate::common::{
    fs::{io, io::PathKind, paths},
    text::{self, PatchRule},
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
use tracing::{debug, info};
use walkdir::WalkDir;

/// Arguments for the project patch tool.
#[derive(Parser, Debug)]
#[command(about = "Patch project files in place under a directory tree")]
pub struct PatchArgs {
    /// Directory (or single project file) to patch.
    #[arg(value_parser = paths::PathArg)]
    pub root: PathBuf,

    /// Ignored.
    #[arg(hide = true)]
    pub extra: Vec<OsString>,
}

pub fn handle_patch(args: PatchArgs, outcome: &mut Outcome) -> Result<()> {
    cli::warn_extra_args(&args.extra);
    let config = config::load_config()?;
    patch_projects(&args.root, &config, outcome)
}

/// Patches every project file under `root` with the rule from `config`.
pub fn patch_projects(root: &Path, config: &Config, outcome: &mut Outcome) -> Result<()> {
    let rule = PatchRule::from_config(&config.patch)?;
    println!(
        "Patching {} files under {}",
        config.patch.extension,
        root.display()
    );
    patch_tree(root, &rule, outcome, &mut |path| text::rewrite_file(path, &rule))?;
    info!("Patched {} file(s)", outcome.completed());
    Ok(())
}

/// Walks `root`, calling `patch_file` for every file the rule applies to.
///
/// `patch_file` returns whether it changed the file.
pub fn patch_tree<F>(root: &Path, rule: &PatchRule, outcome: &mut Outcome, patch_file: &mut F) -> Result<()>
where
    F: FnMut(&Path) -> Result<bool>,
{
    if io::classify(root) == PathKind::Other {
        debug!("Nothing to patch at {:?}", root);
        return Ok(());
    }
    for entry_result in WalkDir::new(root).follow_links(true) {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) if io::is_dangling_link(&e) => {
                debug!("Skipping dangling link: {:?}", e.path());
                continue;
            }
            Err(e) => {
                let failed_path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                outcome.record(
                    &failed_path,
                    anyhow::Error::new(e).context("Failed to read directory entry"),
                )?;
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !rule.applies_to(path) {
            continue;
        }
        if let Some(true) = outcome.check(path, patch_file(path))? {
            println!("Patched {}", path.display());
            outcome.completed_one();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::Policy;
    use anyhow::anyhow;
    use std::fs;
    use tempfile::tempdir;

    const UNICODE_LINES: &str =
        "<CharacterSet>Unicode</CharacterSet>\n<characterset>unicode</characterset>\n";
    const PATCHED_LINES: &str =
        "<CharacterSet>MultiByte</CharacterSet>\n<CharacterSet>MultiByte</CharacterSet>\n";

    #[test]
    fn test_patch_projects_rewrites_only_project_files() -> Result<()> {
        let temp = tempdir()?;
        let project = temp.path().join("Game.vcxproj");
        let other = temp.path().join("Game.vcxproj.filters");
        fs::write(&project, UNICODE_LINES)?;
        fs::write(&other, UNICODE_LINES)?;

        let mut outcome = Outcome::new(Policy::Lenient);
        patch_projects(temp.path(), &Config::default(), &mut outcome)?;

        assert_eq!(fs::read_to_string(&project)?, PATCHED_LINES);
        assert_eq!(fs::read_to_string(&other)?, UNICODE_LINES);
        assert_eq!(outcome.completed(), 1);
        Ok(())
    }

    #[test]
    fn test_patch_isolation_on_failure() -> Result<()> {
        let temp = tempdir()?;
        fs::create_dir_all(temp.path().join("nested/deeper"))?;
        let files = [
            temp.path().join("a.vcxproj"),
            temp.path().join("bad.vcxproj"),
            temp.path().join("nested/b.vcxproj"),
            temp.path().join("nested/deeper/c.VCXPROJ"),
        ];
        for file in &files {
            fs::write(file, UNICODE_LINES)?;
        }
        let rule = PatchRule::from_config(&Config::default().patch)?;

        let mut outcome = Outcome::new(Policy::Lenient);
        patch_tree(temp.path(), &rule, &mut outcome, &mut |path| {
            if path.file_name().is_some_and(|name| name == "bad.vcxproj") {
                return Err(anyhow!("simulated unreadable file"));
            }
            text::rewrite_file(path, &rule)
        })?;

        assert_eq!(outcome.failures().len(), 1);
        assert_eq!(outcome.failures()[0].path, files[1]);
        assert_eq!(outcome.completed(), 3);
        assert_eq!(fs::read_to_string(&files[0])?, PATCHED_LINES);
        assert_eq!(fs::read_to_string(&files[1])?, UNICODE_LINES);
        assert_eq!(fs::read_to_string(&files[2])?, PATCHED_LINES);
        assert_eq!(fs::read_to_string(&files[3])?, PATCHED_LINES);
        Ok(())
    }

    #[test]
    fn test_patch_strict_stops_at_failure() -> Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("bad.vcxproj"), UNICODE_LINES)?;
        let rule = PatchRule::from_config(&Config::default().patch)?;

        let mut outcome = Outcome::new(Policy::Strict);
        let result = patch_tree(temp.path(), &rule, &mut outcome, &mut |_| {
            Err(anyhow!("simulated unreadable file"))
        });
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_patch_single_file_root() -> Result<()> {
        let temp = tempdir()?;
        let project = temp.path().join("Tool.vcxproj");
        fs::write(&project, UNICODE_LINES)?;

        let mut outcome = Outcome::new(Policy::Strict);
        patch_projects(&project, &Config::default(), &mut outcome)?;

        assert_eq!(fs::read_to_string(&project)?, PATCHED_LINES);
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_patch_skips_dangling_link() -> Result<()> {
        let temp = tempdir()?;
        let project = temp.path().join("Game.vcxproj");
        fs::write(&project, UNICODE_LINES)?;
        std::os::unix::fs::symlink(temp.path().join("gone.vcxproj"), temp.path().join("Old.vcxproj"))?;

        let mut outcome = Outcome::new(Policy::Strict);
        patch_projects(temp.path(), &Config::default(), &mut outcome)?;

        assert!(outcome.is_clean());
        assert_eq!(fs::read_to_string(&project)?, PATCHED_LINES);
        Ok(())
    }
}
