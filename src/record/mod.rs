//! Record subsystem for prodledger
//!
//! Normalizes product event documents against the known schema while keeping
//! every unrecognized field, and derives the natural ledger key.
//!
//! # Invariants
//!
//! - Extension keys never overlap known field names
//! - `decode(encode(r)) == r` for every decoded record
//! - Key derivation is pure and total

mod codec;
mod errors;
mod key;
mod types;

pub use codec::{to_document, RecordCodec};
pub use errors::{RecordError, RecordErrorCode, RecordResult};
pub use key::derive_key;
pub use types::{fields, GeoLocation, Record, DEFAULT_DOC_TYPE};
