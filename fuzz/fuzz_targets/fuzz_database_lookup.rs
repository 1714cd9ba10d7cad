#![no_main]
use georange::{Database, FieldMask};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a database: lookups may fail with Truncated or
    // return garbage records, but must never panic or read out of bounds.
    if let Ok(db) = Database::from_bytes(data.to_vec()) {
        let _ = db.lookup("1.2.3.4", FieldMask::ALL);
        let _ = db.lookup("255.255.255.255", FieldMask::ALL);
        let _ = db.lookup("2001:db8::1", FieldMask::COUNTRY_SHORT | FieldMask::CITY);
        let _ = db.lookup_compat("::", FieldMask::ALL);
    }
});
