//! Database header decoding
//!
//! The header lives in the first 17 bytes of the file at fixed positions.
//! On-disk documentation numbers those positions from 1; everything beyond
//! this module works with the decoded copy and 0-based offsets.
//!
//! Per the format's contract, no field is validated: a malformed header is
//! decoded as-is and simply produces empty lookup results downstream. The
//! only failure mode here is a file too short to hold the header region.

use super::types::IpVersion;
use crate::error::{GeorangeError, Result};
use zerocopy::byteorder::little_endian::U32;
use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned};

/// On-disk header region, byte-for-byte
///
/// `U32` fields are little-endian regardless of host byte order.
#[derive(FromBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
struct RawHeader {
    db_type: u8,
    column_count: u8,
    year: u8,
    month: u8,
    day: u8,
    record_count: U32,
    base_offset: U32,
    ip_version: U32,
}

/// Decoded database header
///
/// Holds the handful of values every lookup needs; the file itself stays in
/// storage untouched.
#[derive(Debug, Clone, Copy)]
pub struct BinHeader {
    /// Schema type selecting one of the fixed field layouts (1..=14 are
    /// meaningful, 0 is reserved)
    pub db_type: u8,
    /// Number of 4-byte column slots per row, range start included
    pub column_count: u8,
    /// Build year (two digits, offset from 2000)
    pub year: u8,
    /// Build month
    pub month: u8,
    /// Build day
    pub day: u8,
    /// Number of data intervals; the file holds one extra sentinel row
    pub record_count: u32,
    /// 1-based file position of the first range row
    pub base_offset: u32,
    /// Whether rows are keyed by 32-bit or 128-bit addresses
    pub ip_version: IpVersion,
}

impl BinHeader {
    /// Size of the on-disk header region in bytes
    pub const SIZE: usize = 17;

    /// Decode the header from the start of the file
    pub fn from_file(data: &[u8]) -> Result<Self> {
        let (raw, _) =
            RawHeader::ref_from_prefix(data).map_err(|_| GeorangeError::HeaderTooShort {
                size: data.len(),
                required: Self::SIZE,
            })?;

        Ok(BinHeader {
            db_type: raw.db_type,
            column_count: raw.column_count,
            year: raw.year,
            month: raw.month,
            day: raw.day,
            record_count: raw.record_count.get(),
            base_offset: raw.base_offset.get(),
            ip_version: IpVersion::from_raw(raw.ip_version.get()),
        })
    }

    /// Row stride in bytes: one 4-byte slot per column, plus 12 extra for
    /// the widened 16-byte range start of IPv6 rows
    pub fn row_stride(&self) -> usize {
        let columns = self.column_count as usize;
        match self.ip_version {
            IpVersion::V4 => columns * 4,
            IpVersion::V6 => columns * 4 + 12,
        }
    }

    /// 0-based file offset of the first range row
    pub fn rows_start(&self) -> usize {
        // stored base offset is a 1-based file position
        (self.base_offset as usize).saturating_sub(1)
    }

    /// Database build date as `(year, month, day)` with the century applied
    pub fn build_date(&self) -> (u16, u8, u8) {
        (2000 + self.year as u16, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> Vec<u8> {
        let mut data = vec![0u8; 64];
        data[0] = 5; // db_type
        data[1] = 6; // column_count
        data[2] = 24; // year
        data[3] = 5; // month
        data[4] = 1; // day
        data[5..9].copy_from_slice(&1000u32.to_le_bytes()); // record_count
        data[9..13].copy_from_slice(&65u32.to_le_bytes()); // base_offset (1-based)
        data[13..17].copy_from_slice(&0u32.to_le_bytes()); // ip_version
        data
    }

    #[test]
    fn test_decode_fixed_positions() {
        let header = BinHeader::from_file(&sample_header()).unwrap();
        assert_eq!(header.db_type, 5);
        assert_eq!(header.column_count, 6);
        assert_eq!(header.build_date(), (2024, 5, 1));
        assert_eq!(header.record_count, 1000);
        assert_eq!(header.base_offset, 65);
        assert_eq!(header.rows_start(), 64);
        assert_eq!(header.ip_version, IpVersion::V4);
    }

    #[test]
    fn test_row_stride() {
        let mut data = sample_header();
        let v4 = BinHeader::from_file(&data).unwrap();
        assert_eq!(v4.row_stride(), 24);

        data[13] = 1; // flip to IPv6
        let v6 = BinHeader::from_file(&data).unwrap();
        assert_eq!(v6.ip_version, IpVersion::V6);
        assert_eq!(v6.row_stride(), 36);
    }

    #[test]
    fn test_header_too_short() {
        let result = BinHeader::from_file(&[0u8; 10]);
        assert!(matches!(
            result,
            Err(GeorangeError::HeaderTooShort { size: 10, .. })
        ));
    }

    #[test]
    fn test_malformed_header_accepted() {
        // garbage values decode without validation
        let mut data = vec![0xFF; 32];
        data[13..17].copy_from_slice(&9u32.to_le_bytes());
        let header = BinHeader::from_file(&data).unwrap();
        assert_eq!(header.db_type, 0xFF);
        assert_eq!(header.ip_version, IpVersion::V4);
    }
}
