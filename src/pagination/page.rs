//! # Page Envelope
//!
//! ```text
//! {
//!   "products-data": [{"Key": "...", "Record": {...}}],
//!   "totalCount": "10", "offset": "1", "maxitems": "5",
//!   "itemsSkipped": "5", "itemsKept": "5"
//! }
//! ```
//!
//! Counters are decimal strings; existing consumers depend on it.

use serde::Serialize;
use serde_json::value::RawValue;

use super::errors::{PageError, PageResult};
use crate::ledger::{KeyValue, LedgerError};

/// One returned entry; the record is embedded verbatim as JSON
#[derive(Debug, Clone, Serialize)]
pub struct PageEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Record")]
    pub record: Box<RawValue>,
}

impl PageEntry {
    /// Wraps a cursor entry, requiring its value to be valid JSON
    pub fn from_key_value(entry: KeyValue) -> PageResult<Self> {
        let KeyValue { key, value } = entry;
        let text = String::from_utf8(value).map_err(|_| {
            LedgerError::Cursor(format!("record at key '{}' is not UTF-8", key))
        })?;
        let record = RawValue::from_string(text).map_err(|e| {
            LedgerError::Cursor(format!("record at key '{}' is not valid JSON: {}", key, e))
        })?;
        Ok(Self { key, record })
    }
}

/// A bounded page of query results
#[derive(Debug, Clone)]
pub struct Page {
    pub entries: Vec<PageEntry>,
    pub total_count: usize,
    pub offset: usize,
    pub limit: usize,
    pub items_skipped: usize,
    pub items_kept: usize,
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "products-data")]
    entries: &'a [PageEntry],
    #[serde(rename = "totalCount")]
    total_count: String,
    offset: String,
    #[serde(rename = "maxitems")]
    limit: String,
    #[serde(rename = "itemsSkipped")]
    items_skipped: String,
    #[serde(rename = "itemsKept")]
    items_kept: String,
}

impl Page {
    /// Renders the page envelope as JSON bytes
    pub fn to_json(&self) -> PageResult<Vec<u8>> {
        let envelope = Envelope {
            entries: &self.entries,
            total_count: self.total_count.to_string(),
            offset: self.offset.to_string(),
            limit: self.limit.to_string(),
            items_skipped: self.items_skipped.to_string(),
            items_kept: self.items_kept.to_string(),
        };
        serde_json::to_vec(&envelope).map_err(|e| PageError::Serialization(e.to_string()))
    }

    /// Keys of the returned entries, in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }
}
