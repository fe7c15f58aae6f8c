//! prodledger - ledger-resident product event records
//!
//! Normalizes supply-chain product event documents against a fixed schema
//! (keeping unknown fields), keys them by their natural identity and serves
//! paginated rich-query results from the ledger.

pub mod cli;
pub mod config;
pub mod contract;
pub mod ledger;
pub mod observability;
pub mod pagination;
pub mod record;
