//! Memory Bank helper - command-line entry point

use std::process::ExitCode;

use memory_bank::cli;

fn main() -> ExitCode {
    cli::run()
}
