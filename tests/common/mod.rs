//! Shared test fixtures: an in-memory writer for range-indexed database
//! files.
//!
//! The library is strictly a reader, so tests fabricate their own files:
//! 17-byte header, (entries + 1) fixed-width rows sorted by range start
//! (the extra row carries the final upper bound), then a deduplicated
//! region of length-prefixed string blobs.

// not every test binary uses every helper
#![allow(dead_code)]

use georange::binformat::layout::column_count;
use georange::Field;
use std::collections::HashMap;

/// 0-based file offset where rows begin (base offset 33 goes in the header)
const ROWS_START: usize = 32;

/// One data interval: `[from, next entry's from)`
#[derive(Clone)]
pub struct Entry {
    pub from: u128,
    /// (2-letter code, long name) stored back to back in one blob
    pub country: (&'static str, &'static str),
    pub region: &'static str,
    pub city: &'static str,
    pub isp: &'static str,
    pub latitude: f32,
    pub longitude: f32,
    pub domain: &'static str,
    pub zip_code: &'static str,
    pub time_zone: &'static str,
    pub net_speed: &'static str,
}

impl Default for Entry {
    fn default() -> Self {
        Entry {
            from: 0,
            country: ("--", "-"),
            region: "-",
            city: "-",
            isp: "-",
            latitude: 0.0,
            longitude: 0.0,
            domain: "-",
            zip_code: "-",
            time_zone: "-",
            net_speed: "-",
        }
    }
}

/// One 4-byte row slot: a blob pointer or inline float bits
enum Slot {
    Pointer(u32),
    Float(f32),
}

/// Blob region under construction; identical blobs are stored once
struct BlobArena {
    data: Vec<u8>,
    base: u32,
    seen: HashMap<Vec<u8>, u32>,
}

impl BlobArena {
    fn new(base: usize) -> Self {
        BlobArena {
            data: Vec::new(),
            base: base as u32,
            seen: HashMap::new(),
        }
    }

    fn intern(&mut self, encoded: Vec<u8>) -> u32 {
        if let Some(&offset) = self.seen.get(&encoded) {
            return offset;
        }
        let offset = self.base + self.data.len() as u32;
        self.data.extend_from_slice(&encoded);
        self.seen.insert(encoded, offset);
        offset
    }

    fn string(&mut self, s: &str) -> u32 {
        let mut encoded = vec![s.len() as u8];
        encoded.extend_from_slice(s.as_bytes());
        self.intern(encoded)
    }

    /// Country blob: len-prefixed short code immediately followed by the
    /// len-prefixed long name (the long name is read at pointer + 3)
    fn country(&mut self, short: &str, long: &str) -> u32 {
        assert_eq!(short.len(), 2, "country codes are two characters");
        let mut encoded = vec![short.len() as u8];
        encoded.extend_from_slice(short.as_bytes());
        encoded.push(long.len() as u8);
        encoded.extend_from_slice(long.as_bytes());
        self.intern(encoded)
    }
}

/// Build a complete database file image.
///
/// `entries` must be sorted by `from`; `sentinel` is the final upper bound
/// written as the extra row's range start. IPv4 databases take their range
/// starts from the low 32 bits of `Entry::from`.
pub fn build_db(db_type: u8, v6: bool, entries: &[Entry], sentinel: u128) -> Vec<u8> {
    let columns = column_count(db_type) as usize;
    let stride = if v6 { 16 + (columns - 1) * 4 } else { columns * 4 };
    let row_count = entries.len() + 1;
    let blobs_start = ROWS_START + row_count * stride;

    let mut arena = BlobArena::new(blobs_start);

    // resolve every row's column slots before laying out bytes
    let mut sentinel_row = Entry::default();
    sentinel_row.from = sentinel;
    let mut rows: Vec<(u128, Vec<Slot>)> = Vec::with_capacity(row_count);
    for entry in entries.iter().chain(std::iter::once(&sentinel_row)) {
        let mut slots = Vec::with_capacity(columns - 1);
        for position in 2..=columns as u8 {
            let field = Field::ALL
                .iter()
                .copied()
                .find(|f| f.column(db_type) == Some(position));
            let slot = match field {
                Some(Field::Country) => {
                    Slot::Pointer(arena.country(entry.country.0, entry.country.1))
                }
                Some(Field::Region) => Slot::Pointer(arena.string(entry.region)),
                Some(Field::City) => Slot::Pointer(arena.string(entry.city)),
                Some(Field::Isp) => Slot::Pointer(arena.string(entry.isp)),
                Some(Field::Latitude) => Slot::Float(entry.latitude),
                Some(Field::Longitude) => Slot::Float(entry.longitude),
                Some(Field::Domain) => Slot::Pointer(arena.string(entry.domain)),
                Some(Field::ZipCode) => Slot::Pointer(arena.string(entry.zip_code)),
                Some(Field::TimeZone) => Slot::Pointer(arena.string(entry.time_zone)),
                Some(Field::NetSpeed) => Slot::Pointer(arena.string(entry.net_speed)),
                None => Slot::Pointer(0),
            };
            slots.push(slot);
        }
        rows.push((entry.from, slots));
    }

    // header
    let mut data = vec![0u8; ROWS_START];
    data[0] = db_type;
    data[1] = columns as u8;
    data[2] = 24; // build date 2024-05-01
    data[3] = 5;
    data[4] = 1;
    data[5..9].copy_from_slice(&(entries.len() as u32).to_le_bytes());
    data[9..13].copy_from_slice(&((ROWS_START + 1) as u32).to_le_bytes());
    data[13..17].copy_from_slice(&(v6 as u32).to_le_bytes());

    // rows
    for (from, slots) in &rows {
        if v6 {
            data.extend_from_slice(&from.to_le_bytes());
        } else {
            data.extend_from_slice(&(*from as u32).to_le_bytes());
        }
        for slot in slots {
            match slot {
                Slot::Pointer(p) => data.extend_from_slice(&p.to_le_bytes()),
                Slot::Float(f) => data.extend_from_slice(&f.to_le_bytes()),
            }
        }
    }
    assert_eq!(data.len(), blobs_start);

    // blobs
    data.extend_from_slice(&arena.data);
    data
}

/// Shorthand for an entry that only carries country data
pub fn entry(from: u128, country: (&'static str, &'static str)) -> Entry {
    Entry {
        from,
        country,
        ..Entry::default()
    }
}
