//! Contract subsystem for prodledger
//!
//! The dispatcher layer: maps invocations by function name onto the record
//! codec, key deriver, ledger and page aggregator.

mod dispatcher;
mod errors;

pub use dispatcher::{functions, ProductContract};
pub use errors::{ContractError, ContractResult};
