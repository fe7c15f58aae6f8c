//! JSON output handling for the CLI
//!
//! - One JSON object per invocation on stdout
//! - Payloads that are JSON are embedded as values, others as strings

use std::io::{self, Write};

use serde_json::{json, Value};

use super::errors::CliResult;

/// Turns a contract payload into the `data` member of a response
pub fn payload_value(payload: &[u8]) -> Value {
    if payload.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(payload)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(payload).into_owned()))
}

/// Write a success response to stdout
pub fn write_response(payload: &[u8]) -> CliResult<()> {
    let response = json!({
        "status": "ok",
        "data": payload_value(payload)
    });
    write_value(&response)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_value(&response)
}

fn write_value(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
