//! # Buildkit Operation Outcomes
//!
//! File: cli/src/core/outcome.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every tool invocation owns one `Outcome`. Recursive walkers report each
//! node's result to it instead of deciding locally whether an error is fatal:
//!
//! - `Policy::Lenient` (default): the failure is stored and the walker carries
//!   on with sibling work. `report` prints every stored failure once, at the
//!   end. The process still exits 0.
//! - `Policy::Strict`: the failure is returned to the caller, which propagates
//!   it with `?` and aborts the invocation with a non-zero exit status.
//!
//! ## Usage
//!
//! ```rust
//! use buildkit::core::outcome::{Outcome, Policy};
//! use std::path::Path;
//!
//! # fn run() -> anyhow::Result<()> {
//! let mut outcome = Outcome::new(Policy::Lenient);
//! let path = Path::new("missing.txt");
//! if let Err(e) = std::fs::remove_file(path) {
//!     outcome.record(path, e.into())?; // kept for the summary, not returned
//! }
//! assert_eq!(outcome.failures().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How failures are treated during an invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Log, remember, continue. Exit status stays 0.
    #[default]
    Lenient,
    /// Abort on the first failure. Exit status is non-zero.
    Strict,
}

impl Policy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Policy::Strict
        } else {
            Policy::Lenient
        }
    }
}

/// A failure recorded while processing a single path.
#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// Aggregated result of one tool invocation.
#[derive(Debug)]
pub struct Outcome {
    policy: Policy,
    completed: usize,
    failures: Vec<Failure>,
}

impl Outcome {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            completed: 0,
            failures: Vec::new(),
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Counts one successfully processed path.
    pub fn completed_one(&mut self) {
        self.completed += 1;
    }

    /// Records a failure for `path`.
    ///
    /// Under `Policy::Lenient` the error is stored for `report` and `Ok(())` is
    /// returned so the caller keeps going. Under `Policy::Strict` the error is
    /// handed back with the path attached as context.
    pub fn record(&mut self, path: &Path, err: anyhow::Error) -> Result<()> {
        match self.policy {
            Policy::Strict => Err(err.context(format!("Failed on {}", path.display()))),
            Policy::Lenient => {
                debug!("Recorded failure on {}: {:#}", path.display(), err);
                self.failures.push(Failure {
                    path: path.to_path_buf(),
                    error: err,
                });
                Ok(())
            }
        }
    }

    /// Routes a per-node result through the outcome.
    ///
    /// `Ok(Some(value))` on success, `Ok(None)` when a lenient failure was
    /// recorded, `Err` when the strict policy aborts.
    pub fn check<T>(&mut self, path: &Path, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) => self.record(path, e).map(|()| None),
        }
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Prints the lenient-mode failure summary to stderr, if there is anything to say.
    pub fn report(&self) {
        debug!(
            "Outcome: {} completed, {} failed",
            self.completed,
            self.failures.len()
        );
        if self.failures.is_empty() {
            return;
        }
        eprintln!("\n{} operation(s) failed:", self.failures.len());
        for failure in &self.failures {
            eprintln!("- {}: {:#}", failure.path.display(), failure.error);
        }
    }
}
