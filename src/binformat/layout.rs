//! Per-schema-type field position tables
//!
//! Each database edition (schema type 1..=14) stores a different subset of
//! the ten logical fields. These constant tables map a field to its 1-based
//! column index for every type; 0 means the edition does not carry the
//! field. Column 1 is always the range start, so real positions begin at 2.
//!
//! The country column is shared by two selectors: the stored blob holds the
//! 2-letter code and the full name back to back, and the full name is read
//! from the same pointer plus a fixed 3-byte offset (length byte + 2 code
//! characters). That arithmetic lives with the extraction code in `search`.

const COUNTRY_POSITION: [u8; 15] = [0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2];
const REGION_POSITION: [u8; 15] = [0, 0, 0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3];
const CITY_POSITION: [u8; 15] = [0, 0, 0, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4];
const ISP_POSITION: [u8; 15] = [0, 0, 3, 0, 5, 0, 7, 5, 7, 0, 8, 0, 9, 0, 9];
const LATITUDE_POSITION: [u8; 15] = [0, 0, 0, 0, 0, 5, 5, 0, 5, 5, 5, 5, 5, 5, 5];
const LONGITUDE_POSITION: [u8; 15] = [0, 0, 0, 0, 0, 6, 6, 0, 6, 6, 6, 6, 6, 6, 6];
const DOMAIN_POSITION: [u8; 15] = [0, 0, 0, 0, 0, 0, 0, 6, 8, 0, 9, 0, 10, 0, 10];
const ZIPCODE_POSITION: [u8; 15] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 7, 7, 7, 0, 7];
const TIMEZONE_POSITION: [u8; 15] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 8, 7, 8];
const NETSPEED_POSITION: [u8; 15] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 11];

/// The ten logical fields a database edition can carry
///
/// Country covers both the short and long selectors; they resolve through
/// the same column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Country (short and long names share one column)
    Country,
    /// Region / state
    Region,
    /// City
    City,
    /// Internet service provider
    Isp,
    /// Latitude (inline float column)
    Latitude,
    /// Longitude (inline float column)
    Longitude,
    /// Domain name
    Domain,
    /// Postal / zip code
    ZipCode,
    /// Time zone offset
    TimeZone,
    /// Connection speed class
    NetSpeed,
}

impl Field {
    /// Resolve this field's 1-based column index for a schema type
    ///
    /// Returns `None` when the edition does not carry the field, and also
    /// for out-of-range schema types (the reference indexes its tables
    /// unchecked; here an unknown type simply resolves every field as
    /// absent).
    pub fn column(self, db_type: u8) -> Option<u8> {
        let table = match self {
            Field::Country => &COUNTRY_POSITION,
            Field::Region => &REGION_POSITION,
            Field::City => &CITY_POSITION,
            Field::Isp => &ISP_POSITION,
            Field::Latitude => &LATITUDE_POSITION,
            Field::Longitude => &LONGITUDE_POSITION,
            Field::Domain => &DOMAIN_POSITION,
            Field::ZipCode => &ZIPCODE_POSITION,
            Field::TimeZone => &TIMEZONE_POSITION,
            Field::NetSpeed => &NETSPEED_POSITION,
        };
        match table.get(db_type as usize) {
            Some(&position) if position != 0 => Some(position),
            _ => None,
        }
    }

    /// All ten fields, in table order
    pub const ALL: [Field; 10] = [
        Field::Country,
        Field::Region,
        Field::City,
        Field::Isp,
        Field::Latitude,
        Field::Longitude,
        Field::Domain,
        Field::ZipCode,
        Field::TimeZone,
        Field::NetSpeed,
    ];
}

/// Number of 4-byte column slots a schema type uses per row, range start
/// included. Derived from the position tables rather than stored.
pub fn column_count(db_type: u8) -> u8 {
    Field::ALL
        .iter()
        .filter_map(|f| f.column(db_type))
        .max()
        .unwrap_or(1)
}
