//! # Buildkit Tool Harness
//!
//! File: cli/src/core/cli.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared plumbing for the `bk-*` binaries and the `buildkit` multiplexer:
//! flags common to every tool, argument validation at the boundary, running a
//! command handler against an `Outcome`, and turning the result into a process
//! exit status.
//!
//! Configuration is not loaded here. Only the tools that read it (`doxygen`,
//! `patch`) call `config::load_config`, so a broken `.buildkit.toml` cannot
//! stop a plain remove or copy.
//!
//! ## Exit status
//!
//! | Situation | default | `--strict` |
//! |---|---|---|
//! | success, or failures logged | 0 | - |
//! | operation failure | 0 | 1 |
//! | usage error | 0 | 2 |
//!
//! Build orchestrators calling these tools historically rely on the exit
//! status always being 0, so that remains the default.
//!
use crate::core::{
    error::Result,
    logging,
    outcome::{Outcome, Policy},
};
use clap::{error::ErrorKind, Args, Command, FromArgMatches};
use std::ffi::OsString;
use tracing::{debug, warn};

/// Flags accepted by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Stop at the first failure and exit with a non-zero status.
    #[arg(long, global = true)]
    pub strict: bool,
}

/// Signature shared by every command handler.
pub type Handler<A> = fn(A, &mut Outcome) -> Result<()>;

/// Exit status for a usage error.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Parses the process arguments for a standalone tool and runs its handler.
///
/// Returns the process exit status; binaries pass it to `std::process::exit`.
pub fn run_standalone<A>(name: &'static str, about: &'static str, handler: Handler<A>) -> i32
where
    A: Args + FromArgMatches + std::fmt::Debug,
{
    let command = GlobalOpts::augment_args(A::augment_args(
        Command::new(name)
            .about(about)
            .version(env!("CARGO_PKG_VERSION")),
    ));
    let strict_requested = std::env::args_os().any(|arg| arg == "--strict");

    let matches = match command.try_get_matches() {
        Ok(matches) => matches,
        Err(e) => return usage_error(&e, strict_requested),
    };
    let parsed = GlobalOpts::from_arg_matches(&matches)
        .and_then(|globals| A::from_arg_matches(&matches).map(|args| (globals, args)));
    let (globals, args) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => return usage_error(&e, strict_requested),
    };

    logging::init(globals.verbose);
    debug!("{} arguments: {:?}", name, args);
    execute(&globals, args, handler)
}

/// Runs `handler` under the policy chosen by `globals`.
pub fn execute<A>(globals: &GlobalOpts, args: A, handler: Handler<A>) -> i32 {
    let mut outcome = Outcome::new(Policy::from_strict_flag(globals.strict));
    let result = handler(args, &mut outcome);
    exit_code(&outcome, result)
}

/// Logs positional arguments beyond the ones a tool uses.
///
/// Older build scripts pass extra values; they are accepted and ignored.
pub fn warn_extra_args(extra: &[OsString]) {
    if !extra.is_empty() {
        warn!("Ignoring extra argument(s): {:?}", extra);
    }
}

/// Reports the outcome and maps it to a process exit status.
pub fn exit_code(outcome: &Outcome, result: Result<()>) -> i32 {
    outcome.report();
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            match outcome.policy() {
                Policy::Strict => 1,
                Policy::Lenient => 0,
            }
        }
    }
}

/// Prints a clap error (usage, help or version) and picks the exit status.
pub fn usage_error(e: &clap::Error, strict: bool) -> i32 {
    let _ = e.print();
    match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ if strict => USAGE_EXIT_CODE,
        _ => 0,
    }
}
