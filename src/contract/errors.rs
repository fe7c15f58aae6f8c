//! # Contract Errors
//!
//! Every failure of an invocation. Errors from the record codec, the
//! aggregator and the ledger pass through unchanged.

use thiserror::Error;

use crate::ledger::LedgerError;
use crate::pagination::PageError;
use crate::record::RecordError;

/// Result type for contract invocations
pub type ContractResult<T> = Result<T, ContractError>;

/// Contract errors
#[derive(Debug, Error)]
pub enum ContractError {
    /// No function with this name
    #[error("Received unknown function invocation: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments for a function
    #[error("{function}: invalid number of args, expected {expected}, got {got}")]
    InvalidArgCount {
        function: String,
        expected: &'static str,
        got: usize,
    },

    /// Nothing stored at the requested key
    #[error("No record stored at key '{0}'")]
    NotFound(String),

    /// Building the response payload failed
    #[error("Response serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl ContractError {
    /// Stable code string for this error
    pub fn code(&self) -> &'static str {
        match self {
            ContractError::UnknownFunction(_) => "PL_UNKNOWN_FUNCTION",
            ContractError::InvalidArgCount { .. } => "PL_INVALID_ARG_COUNT",
            ContractError::NotFound(_) => "PL_NOT_FOUND",
            ContractError::Serialization(_) => "PL_SERIALIZATION_FAILED",
            ContractError::Record(e) => e.code().code(),
            ContractError::Page(e) => e.code(),
            ContractError::Ledger(e) => e.code(),
        }
    }
}
