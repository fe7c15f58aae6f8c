//! prodledger CLI entry point
//!
//! Parses arguments, dispatches to the CLI module and exits non-zero on
//! failure. The error response itself is already on stdout.

use prodledger::cli;

fn main() {
    if cli::run().is_err() {
        std::process::exit(1);
    }
}
