//! Record Invariant Tests
//!
//! Tests for the record pipeline:
//! - decode(encode(r)) == r
//! - Extension keys never overlap known field names
//! - Key derivation is deterministic and case-folds gtin/lot only

use prodledger::record::{derive_key, fields, Record, RecordCodec};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

/// Full document in the wire format used by existing clients
fn fixture() -> Value {
    json!({
        "id": 1,
        "gtin": "08806555018611",
        "lot": "M036191",
        "serialNo": 1936800,
        "expirationDate": "10/10/2026",
        "event": "commission",
        "gln": "0300060000037",
        "status": "active",
        "tradeItemDesc": "gardasil9 10 pack ",
        "product": "gardasil9",
        "tradename": "Gardasil 9",
        "manufactureDate": "10/10/2019",
        "location": "Wilson, NC",
        "toGln": "0300060000037",
        "toLocation": "Wilson, NC",
        "loc_cd": {"lat": 35.721268, "lon": -77.915543},
        "sender": "manufacturer",
        "receiver": "manufacturer",
        "event_dt": "2019-10-12T04:00:00.000Z"
    })
}

fn decode(value: &Value) -> Record {
    RecordCodec::default()
        .decode(value.to_string().as_bytes())
        .unwrap()
}

fn round_trip(record: &Record) -> Record {
    let codec = RecordCodec::default();
    codec.decode(&codec.encode(record).unwrap()).unwrap()
}

// =============================================================================
// Round Trip Tests
// =============================================================================

/// Every known field of the fixture is recognized.
#[test]
fn test_fixture_has_no_extensions() {
    let record = decode(&fixture());
    assert!(!record.has_extensions());
    assert_eq!(record.to_location, "Wilson, NC");
    assert_eq!(record.event_date, "2019-10-12T04:00:00.000Z");
}

/// Known fields survive encode/decode unchanged.
#[test]
fn test_round_trip_known_fields() {
    let record = decode(&fixture());
    assert_eq!(round_trip(&record), record);
}

/// Extension fields survive encode/decode key-for-key, value-for-value.
#[test]
fn test_round_trip_with_extensions() {
    let mut doc = fixture();
    doc["batchOwner"] = json!({"name": "ACME", "tags": ["cold", "fragile"]});
    doc["temperature"] = json!(-18.5);
    doc["flag"] = json!(true);
    doc["nothing"] = Value::Null;
    doc["GTIN"] = json!("case differs from gtin");

    let record = decode(&doc);
    assert_eq!(record.extensions.len(), 5);
    assert_eq!(round_trip(&record), record);
}

/// Encoding the empty record and decoding it gives the empty record back.
#[test]
fn test_round_trip_of_minimal_document() {
    let record = decode(&json!({}));
    assert_eq!(round_trip(&record), record);
    assert_eq!(record, Record {
        doc_type: "product".to_string(),
        ..Record::default()
    });
}

/// Unknown fields appear next to known ones in the encoded document.
#[test]
fn test_unknown_field_kept_on_encode() {
    let codec = RecordCodec::default();
    let record = codec.decode(br#"{"gtin":"X","unknownField":"keepme"}"#).unwrap();

    let encoded: Value = serde_json::from_slice(&codec.encode(&record).unwrap()).unwrap();
    assert_eq!(encoded["gtin"], "X");
    assert_eq!(encoded["unknownField"], "keepme");
}

/// The encoded document is the flat union of known and extension fields.
#[test]
fn test_encoded_document_is_flat_union() {
    let codec = RecordCodec::default();
    let mut doc = fixture();
    doc["extra"] = json!(1);

    let encoded: Value =
        serde_json::from_slice(&codec.encode(&decode(&doc)).unwrap()).unwrap();
    let obj = encoded.as_object().unwrap();

    assert_eq!(obj.len(), fields::ALL.len() + 1);
    assert_eq!(obj["docType"], "product");
    assert_eq!(obj["extra"], 1);
}

// =============================================================================
// Disjointness Tests
// =============================================================================

/// No known field name is ever left in the extension map.
#[test]
fn test_extensions_disjoint_from_known_fields() {
    let mut doc = fixture();
    doc["docType"] = json!("caller supplied");
    doc["custom"] = json!("x");

    let record = decode(&doc);
    for key in record.extensions.keys() {
        assert!(!fields::is_known(key), "{} leaked into extensions", key);
    }
    assert_eq!(record.doc_type, "product");
}

// =============================================================================
// Key Derivation Tests
// =============================================================================

/// Key for the documented example.
#[test]
fn test_example_key() {
    let record = decode(&json!({
        "gtin": "123",
        "lot": "A1",
        "serialNo": 5,
        "expirationDate": "2030-01-01"
    }));
    assert_eq!(derive_key(&record), "1235.000000a12030-01-01");
}

/// Key derivation is pure.
#[test]
fn test_key_is_deterministic() {
    let record = decode(&fixture());
    let first = derive_key(&record);
    for _ in 0..100 {
        assert_eq!(derive_key(&record), first);
    }
    assert_eq!(first, "088065550186111936800.000000m03619110/10/2026");
}

/// Records that differ only in case of gtin/lot share a key.
#[test]
fn test_natural_key_collision() {
    let mut upper = fixture();
    upper["gtin"] = json!("ABC");
    upper["lot"] = json!("LOT-9");
    upper["event"] = json!("shipping");

    let mut lower = fixture();
    lower["gtin"] = json!("abc");
    lower["lot"] = json!("lot-9");

    assert_eq!(derive_key(&decode(&upper)), derive_key(&decode(&lower)));
}

// =============================================================================
// Rejection Tests
// =============================================================================

/// Mistyped known fields are rejected, never coerced.
#[test]
fn test_mistyped_fields_rejected() {
    let codec = RecordCodec::default();
    for (field, value) in [
        ("gtin", json!(8806555018611u64)),
        ("serialNo", json!("1936800")),
        ("id", json!("1")),
        ("event_dt", json!(20191012)),
        ("loc_cd", json!([35.7, -77.9])),
    ] {
        let mut doc = fixture();
        doc[field] = value;

        let err = codec.decode(doc.to_string().as_bytes()).unwrap_err();
        assert!(err.is_malformed_input());
        assert_eq!(err.field(), Some(field));
    }
}

/// Serials that f64 cannot hold exactly are rejected instead of merged.
#[test]
fn test_imprecise_serial_never_shares_a_key() {
    let codec = RecordCodec::default();
    let mut exact = fixture();
    exact["serialNo"] = json!(9007199254740992u64);
    let mut next = fixture();
    next["serialNo"] = json!(9007199254740993u64);

    let record = decode(&exact);
    assert_eq!(
        derive_key(&record),
        "088065550186119007199254740992.000000m03619110/10/2026"
    );

    let err = codec.decode(next.to_string().as_bytes()).unwrap_err();
    assert!(err.is_malformed_input());
    assert_eq!(err.field(), Some("serialNo"));
}
