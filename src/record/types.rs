//! Product event record definitions
//!
//! A `Record` is a fixed set of known attributes plus an open extension map
//! holding every other field of the incoming document. The JSON names below
//! are the wire format; the extension map never contains any of them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Document-type tag written on every record unless configured otherwise
pub const DEFAULT_DOC_TYPE: &str = "product";

/// JSON names of the known attributes
pub mod fields {
    pub const DOC_TYPE: &str = "docType";
    pub const ID: &str = "id";
    pub const GTIN: &str = "gtin";
    pub const LOT: &str = "lot";
    pub const SERIAL_NUMBER: &str = "serialNo";
    pub const EXPIRY_DATE: &str = "expirationDate";
    pub const EVENT: &str = "event";
    pub const GLN: &str = "gln";
    pub const STATUS: &str = "status";
    pub const TRADE_ITEM_DESC: &str = "tradeItemDesc";
    pub const PRODUCT: &str = "product";
    pub const TRADE_NAME: &str = "tradename";
    pub const MANUFACTURE_DATE: &str = "manufactureDate";
    pub const LOCATION: &str = "location";
    pub const TO_GLN: &str = "toGln";
    pub const TO_LOCATION: &str = "toLocation";
    pub const SENDER: &str = "sender";
    pub const RECEIVER: &str = "receiver";
    pub const EVENT_DATE: &str = "event_dt";
    pub const GEO_LOCATION: &str = "loc_cd";

    /// Every known JSON name, in declaration order
    pub const ALL: [&str; 20] = [
        DOC_TYPE,
        ID,
        GTIN,
        LOT,
        SERIAL_NUMBER,
        EXPIRY_DATE,
        EVENT,
        GLN,
        STATUS,
        TRADE_ITEM_DESC,
        PRODUCT,
        TRADE_NAME,
        MANUFACTURE_DATE,
        LOCATION,
        TO_GLN,
        TO_LOCATION,
        SENDER,
        RECEIVER,
        EVENT_DATE,
        GEO_LOCATION,
    ];

    /// Returns true if `name` is a known attribute
    pub fn is_known(name: &str) -> bool {
        ALL.contains(&name)
    }
}

/// Coordinates of the location an event happened at
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoLocation {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

/// A normalized product event record.
///
/// Known attributes serialize under their wire names. `extensions` is not
/// serialized with the struct; the codec merges it into the same object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "docType")]
    pub doc_type: String,
    pub id: i64,
    pub gtin: String,
    pub lot: String,
    #[serde(rename = "serialNo")]
    pub serial_number: f64,
    #[serde(rename = "expirationDate")]
    pub expiry_date: String,
    pub event: String,
    pub gln: String,
    pub status: String,
    #[serde(rename = "tradeItemDesc")]
    pub trade_item_desc: String,
    pub product: String,
    #[serde(rename = "tradename")]
    pub trade_name: String,
    #[serde(rename = "manufactureDate")]
    pub manufacture_date: String,
    pub location: String,
    #[serde(rename = "toGln")]
    pub to_gln: String,
    #[serde(rename = "toLocation")]
    pub to_location: String,
    pub sender: String,
    pub receiver: String,
    #[serde(rename = "event_dt")]
    pub event_date: String,
    #[serde(rename = "loc_cd")]
    pub geo_location: GeoLocation,

    /// Fields of the source document outside the known schema
    #[serde(skip)]
    pub extensions: Map<String, Value>,
}

impl Record {
    /// Returns an extension field by name
    pub fn extension(&self, name: &str) -> Option<&Value> {
        self.extensions.get(name)
    }

    /// Returns true if the record carries fields outside the known schema
    pub fn has_extensions(&self) -> bool {
        !self.extensions.is_empty()
    }
}
