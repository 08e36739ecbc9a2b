//! # Path Argument Normalization
//!
//! File: cli/src/common/fs/paths.rs
//! Author: Christi Mahu
//!
//! Build tools upstream of us (MSBuild, premake output, batch scripts) happily
//! hand over `dir\sub\file` even when the tools run on a Unix host. Windows
//! accepts both separators natively, so only non-Windows hosts need the
//! backslashes rewritten.
//!
//! Arguments are taken as `OsStr`: a path is not required to be UTF-8, and
//! the rewrite works on the raw bytes.
//!
use clap::{builder::TypedValueParser, error::ErrorKind, Arg, Command};
use std::ffi::OsStr;
use std::path::PathBuf;

/// Turns a path argument in either separator style into a host path.
#[cfg(unix)]
pub fn normalize_separators(raw: &OsStr) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes: Vec<u8> = raw
        .as_bytes()
        .iter()
        .map(|&b| if b == b'\\' { b'/' } else { b })
        .collect();
    PathBuf::from(OsString::from_vec(bytes))
}

/// Turns a path argument in either separator style into a host path.
#[cfg(not(unix))]
pub fn normalize_separators(raw: &OsStr) -> PathBuf {
    PathBuf::from(raw)
}

/// `clap` value parser for path arguments: rejects empty values and
/// normalizes separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathArg;

impl TypedValueParser for PathArg {
    type Value = PathBuf;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        if value.is_empty() {
            let name = arg.map_or_else(|| "path".to_string(), |a| a.get_id().to_string());
            return Err(clap::Error::raw(
                ErrorKind::InvalidValue,
                format!("{} must not be empty\n", name),
            )
            .with_cmd(cmd));
        }
        Ok(normalize_separators(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: &OsStr) -> Result<PathBuf, clap::Error> {
        PathArg.parse_ref(&Command::new("bk-test"), None, value)
    }

    #[test]
    #[cfg(unix)]
    fn test_backslashes_become_slashes() {
        assert_eq!(
            normalize_separators(OsStr::new(r"build\bin\Release\game.exe")),
            PathBuf::from("build/bin/Release/game.exe")
        );
    }

    #[test]
    fn test_forward_slashes_unchanged() {
        assert_eq!(
            normalize_separators(OsStr::new("a/b/c.txt")),
            PathBuf::from("a/b/c.txt")
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert!(parse(OsStr::new("")).is_err());
        assert_eq!(parse(OsStr::new("x")).unwrap(), PathBuf::from("x"));
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_path_accepted() {
        use std::os::unix::ffi::OsStrExt;
        let parsed = parse(OsStr::from_bytes(b"build\\\xff")).unwrap();
        assert_eq!(parsed.as_os_str().as_bytes(), b"build/\xff");
    }
}
