//! Natural storage key for records
//!
//! `lowercase(gtin) + serialNo + lowercase(lot) + expirationDate`, no
//! separators. The serial number renders with six fractional digits.
//! Records sharing this tuple share a key; the later write replaces the
//! earlier one.

use super::types::Record;

/// Derives the ledger key for a record
pub fn derive_key(record: &Record) -> String {
    format!(
        "{}{:.6}{}{}",
        record.gtin.to_lowercase(),
        record.serial_number,
        record.lot.to_lowercase(),
        record.expiry_date
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gtin: &str, serial: f64, lot: &str, expiry: &str) -> Record {
        Record {
            gtin: gtin.to_string(),
            serial_number: serial,
            lot: lot.to_string(),
            expiry_date: expiry.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn test_key_layout() {
        let key = derive_key(&record("123", 5.0, "A1", "2030-01-01"));
        assert_eq!(key, "1235.000000a12030-01-01");
    }

    #[test]
    fn test_zero_record_key() {
        assert_eq!(derive_key(&Record::default()), "0.000000");
    }

    #[test]
    fn test_gtin_and_lot_fold_case_expiry_does_not() {
        let a = derive_key(&record("ABC", 1.0, "LoT", "Jan-2030"));
        let b = derive_key(&record("abc", 1.0, "lot", "Jan-2030"));
        let c = derive_key(&record("abc", 1.0, "lot", "JAN-2030"));

        assert_eq!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_other_fields_do_not_affect_key() {
        let a = record("g", 2.0, "l", "e");
        let mut b = a.clone();
        b.event = "shipping".to_string();
        b.id = 99;

        assert_eq!(derive_key(&a), derive_key(&b));
    }
}
