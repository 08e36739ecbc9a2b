//! `bk-remove`: standalone entry point for `buildkit::commands::remove`.
use buildkit::commands::remove::{handle_remove, RemoveArgs};
use buildkit::core::cli;

fn main() {
    std::process::exit(cli::run_standalone::<RemoveArgs>(
        "bk-remove",
        "Delete a file or a directory tree",
        handle_remove,
    ));
}
