//! Product contract dispatcher
//!
//! Routes a function name and string arguments to the record pipeline:
//! - write path: decode → derive key → encode → put
//! - read path: get by key
//! - query path: execute selector → paginate
//!
//! Nothing is written unless decode and encode both succeed.

use serde_json::json;
use uuid::Uuid;

use super::errors::{ContractError, ContractResult};
use crate::config::{ContractConfig, CreateResponse};
use crate::ledger::{Ledger, QueryExecutor};
use crate::observability::{log_event_with_fields, Event};
use crate::pagination::PageAggregator;
use crate::record::{derive_key, RecordCodec};

/// Invocable function names
pub mod functions {
    pub const CREATE_PRODUCT: &str = "createProduct";
    pub const READ_PRODUCT: &str = "readProduct";
    pub const QUERY_PRODUCTS: &str = "queryProducts";
    pub const QUERY_PRODUCTS_BY_EVENT: &str = "queryProductsByEvent";

    /// True for functions that write to the ledger
    pub fn is_write(function: &str) -> bool {
        function == CREATE_PRODUCT
    }
}

/// Transaction entry point for product event records
#[derive(Debug, Clone)]
pub struct ProductContract {
    config: ContractConfig,
    codec: RecordCodec,
    aggregator: PageAggregator,
}

impl Default for ProductContract {
    fn default() -> Self {
        Self::new(ContractConfig::default())
    }
}

impl ProductContract {
    /// Creates a contract from validated configuration
    pub fn new(config: ContractConfig) -> Self {
        let codec = RecordCodec::new(config.doc_type.clone());
        let aggregator = PageAggregator::new(config.page_config());
        Self {
            config,
            codec,
            aggregator,
        }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Returns the record codec
    pub fn codec(&self) -> &RecordCodec {
        &self.codec
    }

    /// Instantiation hook; there is no state to prepare
    pub fn init(&self) -> ContractResult<Vec<u8>> {
        Ok(Vec::new())
    }

    /// Dispatches `function` with `args` against `ledger`
    pub fn invoke<L>(&self, ledger: &mut L, function: &str, args: &[String]) -> ContractResult<Vec<u8>>
    where
        L: Ledger + QueryExecutor,
    {
        let arg_count = args.len().to_string();
        log_event_with_fields(
            Event::InvocationReceived,
            &[("args", arg_count.as_str()), ("function", function)],
        );

        let result = self.dispatch(ledger, function, args);

        if let Err(e) = &result {
            let error = e.to_string();
            log_event_with_fields(
                Event::InvocationRejected,
                &[("code", e.code()), ("error", error.as_str()), ("function", function)],
            );
        }
        result
    }

    fn dispatch<L>(&self, ledger: &mut L, function: &str, args: &[String]) -> ContractResult<Vec<u8>>
    where
        L: Ledger + QueryExecutor,
    {
        match function {
            functions::CREATE_PRODUCT => {
                expect_args(function, args, 1, 1, "exactly 1")?;
                self.create_product(ledger, &args[0])
            }
            functions::READ_PRODUCT => {
                expect_args(function, args, 1, 1, "exactly 1")?;
                self.read_product(&*ledger, &args[0])
            }
            functions::QUERY_PRODUCTS => {
                expect_args(function, args, 1, 3, "1 to 3")?;
                self.query_products(&*ledger, &args[0], arg(args, 1), arg(args, 2))
            }
            functions::QUERY_PRODUCTS_BY_EVENT => {
                expect_args(function, args, 1, 3, "1 to 3")?;
                self.query_products_by_event(&*ledger, &args[0], arg(args, 1), arg(args, 2))
            }
            _ => Err(ContractError::UnknownFunction(function.to_string())),
        }
    }

    /// Normalizes `payload` and stores it under its natural key.
    ///
    /// Returns the stored bytes or a transaction id, per `create_response`.
    pub fn create_product<L: Ledger>(&self, ledger: &mut L, payload: &str) -> ContractResult<Vec<u8>> {
        let record = self.codec.decode(payload.as_bytes())?;
        let key = derive_key(&record);
        log_event_with_fields(Event::RecordDecoded, &[("key", key.as_str())]);

        let bytes = self.codec.encode(&record)?;
        ledger.put_state(&key, bytes.clone())?;

        let size = bytes.len().to_string();
        log_event_with_fields(
            Event::RecordStored,
            &[("bytes", size.as_str()), ("key", key.as_str())],
        );

        match self.config.create_response {
            CreateResponse::Record => Ok(bytes),
            CreateResponse::TxId => {
                let tx_id = Uuid::new_v4().to_string();
                serde_json::to_vec(&json!({ "txId": tx_id }))
                    .map_err(|e| ContractError::Serialization(e.to_string()))
            }
        }
    }

    /// Returns the bytes stored at `key`
    pub fn read_product<L: Ledger>(&self, ledger: &L, key: &str) -> ContractResult<Vec<u8>> {
        let bytes = ledger
            .get_state(key)?
            .ok_or_else(|| ContractError::NotFound(key.to_string()))?;
        log_event_with_fields(Event::RecordRead, &[("key", key)]);
        Ok(bytes)
    }

    /// Runs a rich query and returns one page of results as JSON
    pub fn query_products<Q: QueryExecutor>(
        &self,
        executor: &Q,
        query: &str,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> ContractResult<Vec<u8>> {
        log_event_with_fields(Event::QueryExecuted, &[("query", query)]);
        let cursor = executor.execute_query(query)?;
        let page = self.aggregator.paginate_args(cursor, offset, limit)?;
        Ok(page.to_json()?)
    }

    /// Pages through records of this contract's document type with the given event
    pub fn query_products_by_event<Q: QueryExecutor>(
        &self,
        executor: &Q,
        event: &str,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> ContractResult<Vec<u8>> {
        let query = json!({
            "selector": {
                "docType": self.codec.doc_type(),
                "event": event,
            }
        })
        .to_string();
        self.query_products(executor, &query, offset, limit)
    }
}

fn expect_args(
    function: &str,
    args: &[String],
    min: usize,
    max: usize,
    expected: &'static str,
) -> ContractResult<()> {
    if args.len() < min || args.len() > max {
        return Err(ContractError::InvalidArgCount {
            function: function.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn arg(args: &[String], index: usize) -> Option<&str> {
    args.get(index).map(String::as_str)
}
