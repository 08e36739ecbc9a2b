//! `bk-copy`: standalone entry point for `buildkit::commands::copy`.
use buildkit::commands::copy::{handle_copy, CopyArgs};
use buildkit::core::cli;

fn main() {
    std::process::exit(cli::run_standalone::<CopyArgs>(
        "bk-copy",
        "Copy a file or directory tree, creating destination directories",
        handle_copy,
    ));
}
