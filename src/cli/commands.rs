//! CLI command implementations
//!
//! `invoke` follows a fixed sequence:
//! 1. Load configuration (defaults when no file is given)
//! 2. Open the ledger file
//! 3. Dispatch the function
//! 4. Save the ledger, only after a successful write
//! 5. Print the response

use std::path::Path;

use crate::config::ContractConfig;
use crate::contract::{functions, ProductContract};
use crate::ledger::MemoryLedger;
use crate::observability::{log_event_with_fields, Event};

use super::args::{Cli, Command};
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{write_error, write_response};

/// Parse arguments and run the selected command.
///
/// Failures are reported on stdout as an error response and returned so the
/// process can exit non-zero.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    report_failure(run_command(cli.command), |e| {
        write_error(e.code_str(), e.message())
    })
}

/// Reports a failed command. The command's own error is always the one
/// returned, even when reporting it fails.
fn report_failure(
    result: CliResult<()>,
    report: impl FnOnce(&CliError) -> CliResult<()>,
) -> CliResult<()> {
    if let Err(e) = &result {
        if let Err(write_err) = report(e) {
            let reason = write_err.to_string();
            log_event_with_fields(
                Event::ResponseWriteFailed,
                &[("code", e.code_str()), ("error", reason.as_str())],
            );
        }
    }
    result
}

/// Run one command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { ledger } => {
            init(&ledger)?;
            write_response(b"")
        }
        Command::Invoke {
            ledger,
            config,
            function,
            args,
        } => {
            let payload = invoke(&ledger, config.as_deref(), &function, &args)?;
            write_response(&payload)
        }
    }
}

/// Create an empty ledger file at `path`
pub fn init(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::already_initialized(path.display()));
    }
    let ledger = MemoryLedger::open(path)?;
    ledger.save()?;
    Ok(())
}

/// Invoke `function` against the ledger file at `ledger_path`
pub fn invoke(
    ledger_path: &Path,
    config_path: Option<&Path>,
    function: &str,
    args: &[String],
) -> CliResult<Vec<u8>> {
    let config = match config_path {
        Some(path) => {
            let config = ContractConfig::load(path)?;
            let shown = path.display().to_string();
            log_event_with_fields(Event::ConfigLoaded, &[("path", shown.as_str())]);
            config
        }
        None => ContractConfig::default(),
    };

    if !ledger_path.exists() {
        return Err(CliError::new(
            CliErrorCode::LedgerError,
            format!("No ledger at {}; run init first", ledger_path.display()),
        ));
    }

    let contract = ProductContract::new(config);
    let mut ledger = MemoryLedger::open(ledger_path)?;

    let payload = contract.invoke(&mut ledger, function, args)?;
    if functions::is_write(function) {
        ledger.save()?;
    }

    Ok(payload)
}
