//! JSON codec for product event records
//!
//! Decode is a single typed pass over a generic JSON object:
//! 1. Parse the input into a key/value map
//! 2. Drop any caller-supplied document type and stamp the configured tag
//! 3. Extract the geo sub-record, requiring `{"lat": number, "lon": number}`
//! 4. Extract every other known field, type-checking and removing it
//! 5. Keep whatever is left as the extension map
//!
//! Encode serializes the known fields and unions the extension map into the
//! same object. Known keys win on collision, which decode never produces.

use serde_json::{Map, Value};

use super::errors::{RecordError, RecordResult};
use super::types::{fields, GeoLocation, Record, DEFAULT_DOC_TYPE};

/// Converts between JSON documents and `Record`s.
///
/// Holds no mutable state; one codec can serve any number of callers.
#[derive(Debug, Clone)]
pub struct RecordCodec {
    doc_type: String,
}

impl Default for RecordCodec {
    fn default() -> Self {
        Self::new(DEFAULT_DOC_TYPE)
    }
}

impl RecordCodec {
    /// Creates a codec that stamps `doc_type` on every decoded record
    pub fn new(doc_type: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
        }
    }

    /// Returns the document-type tag this codec writes
    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    /// Decodes a JSON document into a record.
    ///
    /// Missing known fields take their zero value. A known field present with
    /// the wrong JSON type fails with `PL_MALFORMED_INPUT`.
    pub fn decode(&self, bytes: &[u8]) -> RecordResult<Record> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| RecordError::malformed(format!("invalid JSON: {}", e)))?;

        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(RecordError::malformed(format!(
                    "expected a JSON object, found {}",
                    json_type_name(&other)
                )))
            }
        };

        map.remove(fields::DOC_TYPE);

        let geo_location = take_geo_location(&mut map)?;

        let record = Record {
            doc_type: self.doc_type.clone(),
            id: take_integer(&mut map, fields::ID)?,
            gtin: take_string(&mut map, fields::GTIN)?,
            lot: take_string(&mut map, fields::LOT)?,
            serial_number: take_number(&mut map, fields::SERIAL_NUMBER)?,
            expiry_date: take_string(&mut map, fields::EXPIRY_DATE)?,
            event: take_string(&mut map, fields::EVENT)?,
            gln: take_string(&mut map, fields::GLN)?,
            status: take_string(&mut map, fields::STATUS)?,
            trade_item_desc: take_string(&mut map, fields::TRADE_ITEM_DESC)?,
            product: take_string(&mut map, fields::PRODUCT)?,
            trade_name: take_string(&mut map, fields::TRADE_NAME)?,
            manufacture_date: take_string(&mut map, fields::MANUFACTURE_DATE)?,
            location: take_string(&mut map, fields::LOCATION)?,
            to_gln: take_string(&mut map, fields::TO_GLN)?,
            to_location: take_string(&mut map, fields::TO_LOCATION)?,
            sender: take_string(&mut map, fields::SENDER)?,
            receiver: take_string(&mut map, fields::RECEIVER)?,
            event_date: take_string(&mut map, fields::EVENT_DATE)?,
            geo_location,
            extensions: map,
        };

        Ok(record)
    }

    /// Encodes a record as one flat JSON object.
    pub fn encode(&self, record: &Record) -> RecordResult<Vec<u8>> {
        let document = to_document(record)?;
        serde_json::to_vec(&document).map_err(|e| RecordError::serialization(e.to_string()))
    }
}

/// Builds the merged JSON object for a record without rendering it
pub fn to_document(record: &Record) -> RecordResult<Value> {
    let mut known = match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err(RecordError::serialization(format!(
                "known fields encoded as {}",
                json_type_name(&other)
            )))
        }
        Err(e) => return Err(RecordError::serialization(e.to_string())),
    };

    for (key, value) in &record.extensions {
        if !known.contains_key(key) {
            known.insert(key.clone(), value.clone());
        }
    }

    Ok(Value::Object(known))
}

fn take_string(map: &mut Map<String, Value>, name: &str) -> RecordResult<String> {
    match map.remove(name) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(RecordError::type_mismatch(
            name,
            "a string",
            json_type_name(&other),
        )),
    }
}

fn take_number(map: &mut Map<String, Value>, name: &str) -> RecordResult<f64> {
    match map.remove(name) {
        None => Ok(0.0),
        Some(Value::Number(n)) => exact_f64(&n).ok_or_else(|| {
            RecordError::type_mismatch(name, "a number", "an integer with no exact f64 form")
        }),
        Some(other) => Err(RecordError::type_mismatch(
            name,
            "a number",
            json_type_name(&other),
        )),
    }
}

fn take_integer(map: &mut Map<String, Value>, name: &str) -> RecordResult<i64> {
    match map.remove(name) {
        None => Ok(0),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
            let actual = if n.is_u64() {
                "an integer above the i64 range"
            } else {
                "a non-integral number"
            };
            RecordError::type_mismatch(name, "an integer", actual)
        }),
        Some(other) => Err(RecordError::type_mismatch(
            name,
            "an integer",
            json_type_name(&other),
        )),
    }
}

/// `n` as f64, or None when an integer would be rounded on the way
fn exact_f64(n: &serde_json::Number) -> Option<f64> {
    let value = n.as_f64()?;
    let integer = match (n.as_i64(), n.as_u64()) {
        (Some(i), _) => i128::from(i),
        (None, Some(u)) => i128::from(u),
        (None, None) => return Some(value),
    };
    (value as i128 == integer).then_some(value)
}

fn take_geo_location(map: &mut Map<String, Value>) -> RecordResult<GeoLocation> {
    match map.remove(fields::GEO_LOCATION) {
        None => Ok(GeoLocation::default()),
        Some(value @ Value::Object(_)) => serde_json::from_value(value)
            .map_err(|e| RecordError::invalid_shape(fields::GEO_LOCATION, e)),
        Some(other) => Err(RecordError::type_mismatch(
            fields::GEO_LOCATION,
            "an object",
            json_type_name(&other),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
