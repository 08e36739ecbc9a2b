//! # Buildkit Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The tools are normally driven entirely by positional arguments, but the
//! constants they rely on (the project-file patch rule, where the doxygen
//! binary and its base template live) can be overridden from TOML files.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.buildkit.toml` in the current directory or an ancestor
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//! 3. Default values defined in the code
//!
//! Loading, merging, `~` expansion and validation happen once per invocation.
//!
//! ## Examples
//!
//! ```toml
//! [patch]
//! extension = ".vcxproj"
//! pattern = "<CharacterSet>Unicode</CharacterSet>"
//! replacement = "<CharacterSet>MultiByte</CharacterSet>"
//!
//! [doxygen]
//! executable = "~/tools/doxygen/bin/doxygen"
//! template = "~/tools/doxygen/doxygen.conf"
//! ```
//!
use crate::core::error::{BuildkitError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub patch: PatchConfig,
    #[serde(default)]
    pub doxygen: DoxygenConfig,
}

/// The text substitution applied by `bk-patch` to project files.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PatchConfig {
    /// File name suffix selecting project files (matched case-insensitively).
    #[serde(default = "default_patch_extension")]
    pub extension: String,
    /// Literal marker replaced on every line (matched case-insensitively).
    #[serde(default = "default_patch_pattern")]
    pub pattern: String,
    /// Literal text written in place of each marker occurrence.
    #[serde(default = "default_patch_replacement")]
    pub replacement: String,
}

/// Locations used by `bk-doxygen`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DoxygenConfig {
    /// Doxygen executable. Defaults to `doxygen` next to the running tool.
    pub executable: Option<String>,
    /// Base configuration template. Defaults to `doxygen.conf` next to the running tool.
    pub template: Option<String>,
    /// Subdirectory of the source directory holding the override fragment.
    #[serde(default = "default_override_dir")]
    pub override_dir: String,
    /// File name of the override fragment inside `override_dir`.
    #[serde(default = "default_override_file")]
    pub override_file: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            extension: default_patch_extension(),
            pattern: default_patch_pattern(),
            replacement: default_patch_replacement(),
        }
    }
}

impl Default for DoxygenConfig {
    fn default() -> Self {
        Self {
            executable: None,
            template: None,
            override_dir: default_override_dir(),
            override_file: default_override_file(),
        }
    }
}

fn default_patch_extension() -> String {
    ".vcxproj".to_string()
}
fn default_patch_pattern() -> String {
    "<CharacterSet>Unicode</CharacterSet>".to_string()
}
fn default_patch_replacement() -> String {
    "<CharacterSet>MultiByte</CharacterSet>".to_string()
}
fn default_override_dir() -> String {
    "doxygen".to_string()
}
fn default_override_file() -> String {
    "doxygen.conf".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".buildkit.toml";

/// Loads the merged configuration, searching for the project file from the current directory.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    load_config_from(&current_dir)
}

/// Loads the merged configuration, searching for the project file from `start_dir`.
pub fn load_config_from(start_dir: &Path) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config(start_dir)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Buildkit", "buildkit") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found.");
        Ok(None)
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let project_config = dir.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let pick = |project: String, user: String, default: &str| {
        if project != default {
            project
        } else {
            user
        }
    };
    Config {
        patch: PatchConfig {
            extension: pick(
                project_cfg.patch.extension,
                user.patch.extension,
                &defaults.patch.extension,
            ),
            pattern: pick(
                project_cfg.patch.pattern,
                user.patch.pattern,
                &defaults.patch.pattern,
            ),
            replacement: pick(
                project_cfg.patch.replacement,
                user.patch.replacement,
                &defaults.patch.replacement,
            ),
        },
        doxygen: DoxygenConfig {
            executable: project_cfg.doxygen.executable.or(user.doxygen.executable),
            template: project_cfg.doxygen.template.or(user.doxygen.template),
            override_dir: pick(
                project_cfg.doxygen.override_dir,
                user.doxygen.override_dir,
                &defaults.doxygen.override_dir,
            ),
            override_file: pick(
                project_cfg.doxygen.override_file,
                user.doxygen.override_file,
                &defaults.doxygen.override_file,
            ),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    for path in [&mut config.doxygen.executable, &mut config.doxygen.template]
        .into_iter()
        .flatten()
    {
        *path = shellexpand::tilde(path.as_str()).into_owned();
        debug!("Expanded configured path: {}", path);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.patch.extension.is_empty() {
        return Err(anyhow!(BuildkitError::Config(
            "patch.extension must not be empty".to_string()
        )));
    }
    if config.patch.pattern.is_empty() {
        return Err(anyhow!(BuildkitError::Config(
            "patch.pattern must not be empty".to_string()
        )));
    }
    if config.doxygen.override_file.is_empty() {
        return Err(anyhow!(BuildkitError::Config(
            "doxygen.override_file must not be empty".to_string()
        )));
    }
    debug!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.patch.extension, ".vcxproj");
        assert_eq!(config.patch.pattern, "<CharacterSet>Unicode</CharacterSet>");
        assert_eq!(config.doxygen.override_dir, "doxygen");
        assert_eq!(config.doxygen.override_file, "doxygen.conf");
        assert!(config.doxygen.executable.is_none());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let toml_content = r#"
            [patch]
            pattern = "<PlatformToolset>v141</PlatformToolset>"

            [doxygen]
            executable = "~/bin/doxygen"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.patch.pattern, "<PlatformToolset>v141</PlatformToolset>");
        assert_eq!(config.patch.extension, ".vcxproj"); // Default
        assert_eq!(config.doxygen.executable.as_deref(), Some("~/bin/doxygen")); // Not yet expanded
        assert_eq!(config.doxygen.override_dir, "doxygen");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[patch]\nbogus = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_wins() {
        let user = Config {
            patch: PatchConfig {
                replacement: "user".into(),
                ..Default::default()
            },
            doxygen: DoxygenConfig {
                executable: Some("/user/doxygen".into()),
                template: Some("/user/doxygen.conf".into()),
                ..Default::default()
            },
        };
        let project = Config {
            patch: PatchConfig {
                extension: ".csproj".into(),
                ..Default::default()
            },
            doxygen: DoxygenConfig {
                executable: Some("/project/doxygen".into()),
                ..Default::default()
            },
        };

        let merged = merge_configs(user, Some(project));

        assert_eq!(merged.patch.extension, ".csproj");
        assert_eq!(merged.patch.replacement, "user");
        assert_eq!(merged.doxygen.executable.as_deref(), Some("/project/doxygen"));
        assert_eq!(merged.doxygen.template.as_deref(), Some("/user/doxygen.conf"));
    }

    #[test]
    fn test_validate_rejects_empty_pattern() {
        let config = Config {
            patch: PatchConfig {
                pattern: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("patch.pattern"));
    }

    #[test]
    fn test_project_config_found_in_ancestor() -> Result<()> {
        let root = tempdir()?;
        fs::create_dir(root.path().join(".git"))?;
        fs::write(
            root.path().join(PROJECT_CONFIG_FILENAME),
            "[patch]\nextension = \".vcproj\"\n",
        )?;
        let nested = root.path().join("a/b");
        fs::create_dir_all(&nested)?;

        let found = find_project_config_path(&nested);
        assert_eq!(found, Some(root.path().join(PROJECT_CONFIG_FILENAME)));

        let config = load_project_config(&nested)?.expect("project config");
        assert_eq!(config.patch.extension, ".vcproj");
        Ok(())
    }

    #[test]
    fn test_project_config_search_stops_at_git() -> Result<()> {
        let root = tempdir()?;
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "")?;
        let repo = root.path().join("repo");
        fs::create_dir_all(repo.join(".git"))?;

        assert_eq!(find_project_config_path(&repo), None);
        Ok(())
    }

    #[test]
    fn test_path_expansion_leaves_absolute_paths() {
        let mut config = Config {
            doxygen: DoxygenConfig {
                executable: Some("/opt/doxygen/bin/doxygen".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        expand_config_paths(&mut config);
        assert_eq!(
            config.doxygen.executable.as_deref(),
            Some("/opt/doxygen/bin/doxygen")
        );
        assert!(config.doxygen.template.is_none());
    }
}
