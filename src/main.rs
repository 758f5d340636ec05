//! salesboard CLI entry point
//!
//! Minimal entrypoint: parse arguments, dispatch, print errors to
//! stderr and exit non-zero on failure. All logic lives in the CLI
//! module.

use salesboard::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
