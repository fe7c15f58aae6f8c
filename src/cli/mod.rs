//! CLI module for prodledger
//!
//! Provides command-line interface for:
//! - init: Create an empty ledger file
//! - invoke: Run one contract function against a ledger file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, invoke, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{payload_value, write_error, write_response};
