//! # Buildkit Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The `buildkit` binary exposes every tool as a subcommand. It is the same
//! code the standalone `bk-*` binaries run; it exists for build scripts that
//! prefer a single executable.
//!
//! ## Examples
//!
//! ```bash
//! buildkit remove build/intermediate
//! buildkit copy resources build/bin/Release/resources
//! buildkit zip build/bin/Release dist/game.zip
//! buildkit doxygen libraries/chaos build/doc/chaos chaos
//! buildkit --strict -v patch build/projects
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap (usage errors exit 0 unless `--strict`)
//! 2. Configure logging based on verbosity level
//! 3. Route to the tool's handler through `core::cli::execute`
//! 4. Map the outcome to an exit status
//!
use buildkit::commands;
use buildkit::core::cli::{self, GlobalOpts};
use clap::{Parser, Subcommand};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "buildkit",
    about = "Helper tools for native-code builds",
    long_about = "Remove, copy, zip, document and patch build trees.\n\
                  Failures are logged and the exit status stays 0 unless --strict is given.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    globals: GlobalOpts,
}

/// Enum defining all available tools.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "rm")]
    Remove(commands::remove::RemoveArgs),
    #[command(alias = "cp")]
    Copy(commands::copy::CopyArgs),
    Zip(commands::zip::ZipArgs),
    #[command(alias = "doc")]
    Doxygen(commands::doxygen::DoxygenArgs),
    Patch(commands::patch::PatchArgs),
}

fn main() {
    let strict_requested = std::env::args_os().any(|arg| arg == "--strict");
    let parsed = match Cli::try_parse() {
        Ok(parsed) => parsed,
        Err(e) => std::process::exit(cli::usage_error(&e, strict_requested)),
    };

    buildkit::core::logging::init(parsed.globals.verbose);
    tracing::debug!("Parsed CLI arguments: {:?}", parsed);

    let globals = &parsed.globals;
    let code = match parsed.command {
        Commands::Remove(args) => cli::execute(globals, args, commands::remove::handle_remove),
        Commands::Copy(args) => cli::execute(globals, args, commands::copy::handle_copy),
        Commands::Zip(args) => cli::execute(globals, args, commands::zip::handle_zip),
        Commands::Doxygen(args) => cli::execute(globals, args, commands::doxygen::handle_doxygen),
        Commands::Patch(args) => cli::execute(globals, args, commands::patch::handle_patch),
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_copy_with_global_flags() {
        let parsed = Cli::try_parse_from(["buildkit", "copy", "a", "b", "--strict", "-vv"]).unwrap();
        assert!(parsed.globals.strict);
        assert_eq!(parsed.globals.verbose, 2);
        assert!(matches!(parsed.command, Commands::Copy(_)));
    }

    #[test]
    fn test_extra_positional_arguments_are_accepted() {
        let parsed = Cli::try_parse_from(["buildkit", "doxygen", "src", "out", "Proj", "extra"]).unwrap();
        match parsed.command {
            Commands::Doxygen(args) => {
                assert_eq!(args.project_name, "Proj");
                assert_eq!(args.extra, vec![std::ffi::OsString::from("extra")]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_doxygen_requires_three_arguments() {
        assert!(Cli::try_parse_from(["buildkit", "doxygen", "src", "out"]).is_err());
    }
}
