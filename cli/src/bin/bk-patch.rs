//! `bk-patch`: standalone entry point for `buildkit::commands::patch`.
use buildkit::commands::patch::{handle_patch, PatchArgs};
use buildkit::core::cli;

fn main() {
    std::process::exit(cli::run_standalone::<PatchArgs>(
        "bk-patch",
        "Patch project files in place under a directory tree",
        handle_patch,
    ));
}
