//! `bk-zip`: standalone entry point for `buildkit::commands::zip`.
use buildkit::commands::zip::{handle_zip, ZipArgs};
use buildkit::core::cli;

fn main() {
    std::process::exit(cli::run_standalone::<ZipArgs>(
        "bk-zip",
        "Pack a file or directory tree into a zip archive",
        handle_zip,
    ));
}
