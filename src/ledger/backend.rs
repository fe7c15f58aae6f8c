//! # Ledger Backend Traits
//!
//! The key-value ledger and its rich-query executor are external
//! collaborators. These traits are the whole contract prodledger relies on.

use super::errors::LedgerResult;

/// One entry produced by a query cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Key-value world state
pub trait Ledger {
    /// Read the value stored at `key`, if any
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Store `value` at `key`, replacing any previous value
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> LedgerResult<()>;
}

/// Forward-only, one-shot sequence of query results.
///
/// A cursor is stateful and must be owned by a single caller. `close` must be
/// safe to call more than once.
pub trait ResultCursor {
    /// Whether another entry is available
    fn has_next(&self) -> bool;

    /// Advance and return the next entry
    fn next_result(&mut self) -> LedgerResult<KeyValue>;

    /// Release the underlying resource
    fn close(&mut self) -> LedgerResult<()>;
}

/// Executes rich queries against the ledger
pub trait QueryExecutor {
    type Cursor: ResultCursor;

    /// Run `query` and return a cursor over the matching entries
    fn execute_query(&self, query: &str) -> LedgerResult<Self::Cursor>;
}
