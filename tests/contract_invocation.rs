//! Contract Invocation Tests
//!
//! End-to-end dispatch against an in-memory ledger:
//! - createProduct stores the normalized record under its natural key
//! - last write wins at a key
//! - queries page through stored records

use prodledger::config::{ContractConfig, CreateResponse};
use prodledger::contract::{ContractError, ProductContract};
use prodledger::ledger::{Ledger, MemoryLedger};
use prodledger::record::RecordCodec;
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn create(contract: &ProductContract, ledger: &mut MemoryLedger, doc: Value) -> Vec<u8> {
    contract
        .invoke(ledger, "createProduct", &[doc.to_string()])
        .unwrap()
}

fn query(contract: &ProductContract, ledger: &mut MemoryLedger, args: &[&str]) -> Value {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let bytes = contract
        .invoke(ledger, "queryProductsByEvent", &args)
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn product(serial: u64, event: &str) -> Value {
    json!({
        "gtin": "08806555018611",
        "lot": "M036191",
        "serialNo": serial,
        "expirationDate": "10/10/2026",
        "event": event,
        "shipmentRef": format!("S-{}", serial)
    })
}

// =============================================================================
// Write Path Tests
// =============================================================================

/// The stored value is the normalized record, under the derived key.
#[test]
fn test_create_stores_normalized_record() {
    let contract = ProductContract::default();
    let mut ledger = MemoryLedger::new();

    let response = create(&contract, &mut ledger, product(1, "commission"));

    let stored = ledger
        .get_state("088065550186111.000000m03619110/10/2026")
        .unwrap()
        .unwrap();
    assert_eq!(stored, response);

    let record = RecordCodec::default().decode(&stored).unwrap();
    assert_eq!(record.event, "commission");
    assert_eq!(record.extension("shipmentRef"), Some(&json!("S-1")));
}

/// A second record with the same natural key replaces the first.
#[test]
fn test_last_write_wins() {
    let contract = ProductContract::default();
    let mut ledger = MemoryLedger::new();

    create(&contract, &mut ledger, product(1, "commission"));
    let mut update = product(1, "shipping");
    update["gtin"] = json!("08806555018611");
    update["lot"] = json!("m036191");
    create(&contract, &mut ledger, update);

    assert_eq!(ledger.len(), 1);
    let page = query(&contract, &mut ledger, &["shipping"]);
    assert_eq!(page["totalCount"], "1");
}

/// With the tx id policy the caller gets an id, the ledger still gets the record.
#[test]
fn test_tx_id_policy() {
    let contract = ProductContract::new(ContractConfig {
        create_response: CreateResponse::TxId,
        ..ContractConfig::default()
    });
    let mut ledger = MemoryLedger::new();

    let response: Value =
        serde_json::from_slice(&create(&contract, &mut ledger, product(2, "commission"))).unwrap();

    assert!(response["txId"].is_string());
    assert_eq!(ledger.len(), 1);
}

// =============================================================================
// Query Path Tests
// =============================================================================

/// Paging through one event's records with explicit offset and limit.
#[test]
fn test_query_by_event_pages() {
    let contract = ProductContract::default();
    let mut ledger = MemoryLedger::new();

    for serial in 1..=7 {
        create(&contract, &mut ledger, product(serial, "commission"));
    }
    create(&contract, &mut ledger, product(100, "shipping"));

    let page = query(&contract, &mut ledger, &["commission", "6", "5"]);

    assert_eq!(page["totalCount"], "7");
    assert_eq!(page["itemsKept"], "2");
    assert_eq!(page["itemsSkipped"], "5");
    assert_eq!(page["offset"], "6");
    assert_eq!(page["maxitems"], "5");
    for entry in page["products-data"].as_array().unwrap() {
        assert_eq!(entry["Record"]["event"], "commission");
    }
}

/// Queries only see records of the contract's document type.
#[test]
fn test_query_scoped_to_doc_type() {
    let products = ProductContract::default();
    let shipments = ProductContract::new(ContractConfig {
        doc_type: "shipment".to_string(),
        ..ContractConfig::default()
    });
    let mut ledger = MemoryLedger::new();

    create(&products, &mut ledger, product(1, "commission"));
    create(&shipments, &mut ledger, product(2, "commission"));

    let page = query(&products, &mut ledger, &["commission"]);
    assert_eq!(page["totalCount"], "1");
}

/// Raw selector queries go straight to the executor.
#[test]
fn test_raw_selector_query() {
    let contract = ProductContract::default();
    let mut ledger = MemoryLedger::new();
    create(&contract, &mut ledger, product(3, "commission"));

    let bytes = contract
        .invoke(
            &mut ledger,
            "queryProducts",
            &[r#"{"selector":{"shipmentRef":"S-3"}}"#.to_string()],
        )
        .unwrap();
    let page: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(page["itemsKept"], "1");
}

/// Invalid paging arguments are rejected.
#[test]
fn test_invalid_paging_rejected() {
    let contract = ProductContract::default();
    let mut ledger = MemoryLedger::new();

    for args in [["commission", "0", "5"], ["commission", "1", "101"], ["commission", "x", "5"]] {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let err = contract
            .invoke(&mut ledger, "queryProductsByEvent", &args)
            .unwrap_err();
        assert_eq!(err.code(), "PL_INVALID_ARGUMENT");
        assert!(matches!(err, ContractError::Page(_)));
    }
}
