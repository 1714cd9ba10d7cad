//! Lookup results
//!
//! A [`LocationRecord`] is built fresh for every matching lookup and owns
//! all of its strings; nothing in it aliases database storage. Records are
//! never partially built: every slot starts at its sentinel and only
//! requested-and-supported fields are overwritten.

use crate::binformat::types::{IpVersion, NOT_SUPPORTED};
use serde::Serialize;

/// Geolocation attributes for one IP range
///
/// String slots that the database edition does not carry, or that the
/// caller did not request, hold the fixed not-supported sentinel; the float
/// slots hold 0.0 in that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    /// 2-letter country code
    pub country_short: String,
    /// Full country name
    pub country_long: String,
    /// Region / state name
    pub region: String,
    /// City name
    pub city: String,
    /// Internet service provider
    pub isp: String,
    /// Latitude
    pub latitude: f32,
    /// Longitude
    pub longitude: f32,
    /// Domain name
    pub domain: String,
    /// Postal / zip code
    pub zip_code: String,
    /// Time zone offset
    pub time_zone: String,
    /// Connection speed class
    pub net_speed: String,
}

impl LocationRecord {
    /// A record with every slot at its sentinel value; the starting point
    /// for field extraction
    pub fn not_supported() -> Self {
        Self::filled(NOT_SUPPORTED)
    }

    /// The reference look-alike record for a syntactically invalid address:
    /// every string slot carries the version's invalid sentinel, floats 0.0
    pub fn invalid(version: IpVersion) -> Self {
        Self::filled(version.invalid_sentinel())
    }

    fn filled(text: &str) -> Self {
        LocationRecord {
            country_short: text.to_string(),
            country_long: text.to_string(),
            region: text.to_string(),
            city: text.to_string(),
            isp: text.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            domain: text.to_string(),
            zip_code: text.to_string(),
            time_zone: text.to_string(),
            net_speed: text.to_string(),
        }
    }
}

/// Outcome of a lookup
///
/// The three cases are deliberately distinct: a syntactically invalid
/// address is never reported as "not found", and vice versa. Callers that
/// depend on the reference's sentinel-record behavior can flatten an
/// outcome with [`Lookup::into_compat`].
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// The key fell inside a database interval
    Found(LocationRecord),
    /// Valid address, but no interval contains it
    NotFound,
    /// The address failed syntactic validation
    InvalidAddress,
}

impl Lookup {
    /// Borrow the record if this outcome found one
    pub fn record(&self) -> Option<&LocationRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            _ => None,
        }
    }

    /// Flatten into the reference behavior: an invalid address becomes a
    /// fully populated sentinel record, not-found becomes `None`
    pub fn into_compat(self, version: IpVersion) -> Option<LocationRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound => None,
            Lookup::InvalidAddress => Some(LocationRecord::invalid(version)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binformat::types::{INVALID_IPV4_ADDRESS, INVALID_IPV6_ADDRESS};

    #[test]
    fn test_not_supported_baseline() {
        let record = LocationRecord::not_supported();
        assert_eq!(record.country_short, NOT_SUPPORTED);
        assert_eq!(record.net_speed, NOT_SUPPORTED);
        assert_eq!(record.latitude, 0.0);
        assert_eq!(record.longitude, 0.0);
    }

    #[test]
    fn test_invalid_sentinels_per_version() {
        let v4 = LocationRecord::invalid(IpVersion::V4);
        assert_eq!(v4.city, INVALID_IPV4_ADDRESS);
        let v6 = LocationRecord::invalid(IpVersion::V6);
        assert_eq!(v6.city, INVALID_IPV6_ADDRESS);
    }

    #[test]
    fn test_compat_flattening() {
        assert_eq!(Lookup::NotFound.into_compat(IpVersion::V4), None);
        let compat = Lookup::InvalidAddress.into_compat(IpVersion::V4).unwrap();
        assert_eq!(compat.isp, INVALID_IPV4_ADDRESS);
        assert_eq!(compat.latitude, 0.0);

        let record = LocationRecord::not_supported();
        assert_eq!(
            Lookup::Found(record.clone()).into_compat(IpVersion::V6),
            Some(record)
        );
    }
}
