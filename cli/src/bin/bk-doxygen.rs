//! `bk-doxygen`: standalone entry point for `buildkit::commands::doxygen`.
use buildkit::commands::doxygen::{handle_doxygen, DoxygenArgs};
use buildkit::core::cli;

fn main() {
    std::process::exit(cli::run_standalone::<DoxygenArgs>(
        "bk-doxygen",
        "Generate documentation by piping a merged configuration to doxygen",
        handle_doxygen,
    ));
}
