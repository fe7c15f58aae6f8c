//! In-memory ledger with optional JSON file persistence
//!
//! Serves as the reference collaborator for the CLI and tests. Rich queries
//! are selector documents with top-level equality only:
//!
//! ```text
//! {"selector": {"docType": "product", "event": "commission"}}
//! ```
//!
//! Cursors are snapshots taken when the query runs, in key order.

use std::collections::{BTreeMap, VecDeque};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::backend::{KeyValue, Ledger, QueryExecutor, ResultCursor};
use super::errors::{LedgerError, LedgerResult};

/// Ordered in-memory world state
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: BTreeMap<String, Vec<u8>>,
    path: Option<PathBuf>,
}

impl MemoryLedger {
    /// Creates an empty ledger with no backing file
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a ledger backed by `path`. A missing file opens empty.
    pub fn open(path: &Path) -> LedgerResult<Self> {
        let mut ledger = Self {
            state: BTreeMap::new(),
            path: Some(path.to_path_buf()),
        };

        if !path.exists() {
            return Ok(ledger);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            LedgerError::Storage(format!("Failed to read ledger {}: {}", path.display(), e))
        })?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            LedgerError::Storage(format!("Invalid ledger file {}: {}", path.display(), e))
        })?;

        ledger.state = entries
            .into_iter()
            .map(|(k, v)| (k, v.into_bytes()))
            .collect();
        Ok(ledger)
    }

    /// Writes the state to the backing file, if there is one.
    ///
    /// The file is replaced atomically:
    /// 1. Write a sibling temp file
    /// 2. fsync the temp file
    /// 3. Rename it over the ledger
    /// 4. fsync the directory
    ///
    /// An error leaves the previous file intact.
    pub fn save(&self) -> LedgerResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut entries = BTreeMap::new();
        for (key, value) in &self.state {
            let text = String::from_utf8(value.clone()).map_err(|_| {
                LedgerError::Storage(format!("Value at key '{}' is not UTF-8", key))
            })?;
            entries.insert(key.as_str(), text);
        }

        let bytes = serde_json::to_vec_pretty(&entries)
            .map_err(|e| LedgerError::Storage(format!("Failed to encode ledger: {}", e)))?;
        let temp_path = temp_path_for(path);
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to create {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

        let synced = file.write_all(&bytes).and_then(|()| file.sync_all());
        drop(file);
        let written = synced.and_then(|()| fs::rename(&temp_path, path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(LedgerError::Storage(format!(
                "Failed to write ledger {}: {}",
                path.display(),
                e
            )));
        }

        // fsync the directory so the rename is durable
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    /// Returns the backing file path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

/// `<path>.tmp`, next to the ledger so the rename stays on one filesystem
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

impl Ledger for MemoryLedger {
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> LedgerResult<()> {
        if key.is_empty() {
            return Err(LedgerError::Storage("key must not be empty".to_string()));
        }
        self.state.insert(key.to_string(), value);
        Ok(())
    }
}

impl QueryExecutor for MemoryLedger {
    type Cursor = MemoryCursor;

    fn execute_query(&self, query: &str) -> LedgerResult<MemoryCursor> {
        let selector = parse_selector(query)?;

        let entries = self
            .state
            .iter()
            .filter(|(_, value)| matches_selector(&selector, value))
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
            .collect();

        Ok(MemoryCursor::new(entries))
    }
}

fn parse_selector(query: &str) -> LedgerResult<Map<String, Value>> {
    let value: Value = serde_json::from_str(query)
        .map_err(|e| LedgerError::Query(format!("Query is not valid JSON: {}", e)))?;

    match value.get("selector") {
        Some(Value::Object(selector)) => Ok(selector.clone()),
        Some(_) => Err(LedgerError::Query("selector must be an object".to_string())),
        None => Err(LedgerError::Query("query has no selector".to_string())),
    }
}

fn matches_selector(selector: &Map<String, Value>, value: &[u8]) -> bool {
    let Ok(Value::Object(document)) = serde_json::from_slice::<Value>(value) else {
        return false;
    };
    selector
        .iter()
        .all(|(field, expected)| document.get(field) == Some(expected))
}

/// Cursor over a snapshot of matching entries
#[derive(Debug)]
pub struct MemoryCursor {
    entries: VecDeque<KeyValue>,
    closed: bool,
}

impl MemoryCursor {
    /// Creates a cursor yielding `entries` in order
    pub fn new(entries: Vec<KeyValue>) -> Self {
        Self {
            entries: entries.into(),
            closed: false,
        }
    }

    /// Whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl ResultCursor for MemoryCursor {
    fn has_next(&self) -> bool {
        !self.closed && !self.entries.is_empty()
    }

    fn next_result(&mut self) -> LedgerResult<KeyValue> {
        if self.closed {
            return Err(LedgerError::Cursor("cursor is closed".to_string()));
        }
        self.entries
            .pop_front()
            .ok_or_else(|| LedgerError::Cursor("no more results".to_string()))
    }

    fn close(&mut self) -> LedgerResult<()> {
        self.closed = true;
        self.entries.clear();
        Ok(())
    }
}
