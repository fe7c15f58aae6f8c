//! # Pagination Errors

use thiserror::Error;

use crate::ledger::LedgerError;

/// Result type for pagination
pub type PageResult<T> = Result<T, PageError>;

/// Pagination errors
#[derive(Debug, Clone, Error)]
pub enum PageError {
    /// Offset or limit missing its contract (non-numeric, < 1, > maximum)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The cursor failed or produced an unusable entry
    #[error("Upstream query failed: {0}")]
    UpstreamQuery(#[source] LedgerError),

    /// Rendering the page envelope failed
    #[error("Page serialization failed: {0}")]
    Serialization(String),
}

impl PageError {
    /// Stable code string for this error
    pub fn code(&self) -> &'static str {
        match self {
            PageError::InvalidArgument(_) => "PL_INVALID_ARGUMENT",
            PageError::UpstreamQuery(_) => "PL_UPSTREAM_QUERY",
            PageError::Serialization(_) => "PL_SERIALIZATION_FAILED",
        }
    }
}

impl From<LedgerError> for PageError {
    fn from(err: LedgerError) -> Self {
        PageError::UpstreamQuery(err)
    }
}
