//! Contract configuration
//!
//! Loaded from an optional JSON file; every field has a default:
//!
//! ```json
//! {
//!   "doc_type": "product",
//!   "max_page_size": 100,
//!   "default_page_size": 100,
//!   "create_response": "record"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pagination::{PageConfig, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::record::DEFAULT_DOC_TYPE;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// What `createProduct` hands back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateResponse {
    /// The bytes written to the ledger
    #[default]
    Record,
    /// A generated transaction identifier
    TxId,
}

/// Dispatcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractConfig {
    /// Document-type tag stamped on every record
    #[serde(default = "default_doc_type")]
    pub doc_type: String,

    /// Largest accepted page limit
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Limit used when a query gives none
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    #[serde(default)]
    pub create_response: CreateResponse,
}

fn default_doc_type() -> String {
    DEFAULT_DOC_TYPE.to_string()
}
fn default_max_page_size() -> usize {
    MAX_PAGE_SIZE
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            doc_type: default_doc_type(),
            max_page_size: default_max_page_size(),
            default_page_size: default_page_size(),
            create_response: CreateResponse::default(),
        }
    }
}

impl ContractConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: ContractConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.doc_type.is_empty() {
            return Err(ConfigError::Invalid("doc_type must not be empty".to_string()));
        }
        if self.max_page_size == 0 {
            return Err(ConfigError::Invalid("max_page_size must be > 0".to_string()));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(ConfigError::Invalid(format!(
                "default_page_size must be between 1 and max_page_size ({}), got {}",
                self.max_page_size, self.default_page_size
            )));
        }
        Ok(())
    }

    /// Page size bounds for the aggregator
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            max_page_size: self.max_page_size,
            default_page_size: self.default_page_size,
        }
    }
}
