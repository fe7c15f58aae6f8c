//! # Ledger Errors
//!
//! Failures reported by the key-value ledger and its query executor.

use thiserror::Error;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger errors
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// Reading or writing state failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Advancing a result cursor failed
    #[error("Cursor error: {0}")]
    Cursor(String),

    /// The query executor rejected or failed the query
    #[error("Query error: {0}")]
    Query(String),
}

impl LedgerError {
    /// Stable code string for this error
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::Storage(_) => "PL_STORAGE_ERROR",
            LedgerError::Cursor(_) => "PL_CURSOR_ERROR",
            LedgerError::Query(_) => "PL_QUERY_ERROR",
        }
    }
}
