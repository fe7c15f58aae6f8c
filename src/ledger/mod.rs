//! Ledger collaborators for prodledger
//!
//! The world-state store and the rich-query executor are external to the
//! record core. This module defines the traits the core consumes and an
//! in-memory implementation that can persist itself to a JSON file.

mod backend;
mod errors;
mod memory;

pub use backend::{KeyValue, Ledger, QueryExecutor, ResultCursor};
pub use errors::{LedgerError, LedgerResult};
pub use memory::{MemoryCursor, MemoryLedger};
