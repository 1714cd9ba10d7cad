//! Range-row binary search
//!
//! Implements the interval lookup over the sorted range rows. Rows cover
//! half-open intervals: row `mid` matches a key K when
//! `range_from(mid) <= K < range_from(mid + 1)`, so a key equal to an
//! interval's upper bound belongs to the next interval. The extra sentinel
//! row past the last data row makes `mid + 1` always addressable.
//!
//! IPv4 and IPv6 rows differ only in the width of the range start (4 vs 16
//! bytes) and the resulting stride; field extraction is shared. Which
//! variant runs is decided by the database's declared IP version.

use super::header::BinHeader;
use super::layout::Field;
use super::types::{FieldMask, IpVersion};
use crate::addr;
use crate::error::Result;
use crate::reader::Reader;
use crate::record::{LocationRecord, Lookup};

/// Byte distance from a row start to its data columns. IPv6 range starts
/// occupy 16 bytes where column 1 would hold 4, shifting every data column
/// by 12.
const V6_DATA_SHIFT: usize = 12;

/// Search index over the range rows of one database
pub struct RangeIndex<'a> {
    reader: Reader<'a>,
    header: &'a BinHeader,
}

impl<'a> RangeIndex<'a> {
    /// Create a search index over database storage
    pub fn new(reader: Reader<'a>, header: &'a BinHeader) -> Self {
        Self { reader, header }
    }

    /// Look up an address string, extracting the fields selected by `mask`
    pub fn lookup(&self, address: &str, mask: FieldMask) -> Result<Lookup> {
        match self.header.ip_version {
            IpVersion::V4 => self.lookup_v4(address, mask),
            IpVersion::V6 => self.lookup_v6(address, mask),
        }
    }

    /// Look up an IPv4 literal against 32-bit keyed rows
    pub fn lookup_v4(&self, address: &str, mask: FieldMask) -> Result<Lookup> {
        let Some(mut key) = addr::ipv4_to_key(address) else {
            return Ok(Lookup::InvalidAddress);
        };
        // the top address would sit on the final sentinel bound; pulling it
        // back one keeps it inside the last interval
        if key == u32::MAX {
            key -= 1;
        }

        let base = self.header.rows_start();
        let stride = self.header.row_stride();

        let mut low: i64 = 0;
        let mut high: i64 = self.header.record_count as i64;
        while low <= high {
            let mid = (low + high) / 2;
            let row = base + mid as usize * stride;
            let range_from = self.reader.read_u32(row)?;
            let range_to = self.reader.read_u32(row + stride)?;

            if range_from <= key && key < range_to {
                return Ok(Lookup::Found(self.read_record(row, 0, mask)?));
            }
            if key < range_from {
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        }
        Ok(Lookup::NotFound)
    }

    /// Look up an IPv6 literal against 128-bit keyed rows
    pub fn lookup_v6(&self, address: &str, mask: FieldMask) -> Result<Lookup> {
        let Some(key) = addr::ipv6_to_key(address) else {
            return Ok(Lookup::InvalidAddress);
        };

        let base = self.header.rows_start();
        let stride = self.header.row_stride();

        let mut low: i64 = 0;
        let mut high: i64 = self.header.record_count as i64;
        while low <= high {
            let mid = (low + high) / 2;
            let row = base + mid as usize * stride;
            let range_from = self.reader.read_u128(row)?;
            let range_to = self.reader.read_u128(row + stride)?;

            if range_from <= key && key < range_to {
                return Ok(Lookup::Found(self.read_record(row, V6_DATA_SHIFT, mask)?));
            }
            if key < range_from {
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        }
        Ok(Lookup::NotFound)
    }

    /// Assemble a record from the row at `row`, filling exactly the fields
    /// that are both requested and present in this schema type. Everything
    /// else keeps its sentinel.
    fn read_record(&self, row: usize, data_shift: usize, mask: FieldMask) -> Result<LocationRecord> {
        let mut record = LocationRecord::not_supported();
        let db_type = self.header.db_type;
        // 1-based column index -> 0-based byte offset within the row
        let column_offset = |position: u8| row + data_shift + 4 * (position as usize - 1);

        if let Some(position) = Field::Country.column(db_type) {
            if mask.contains(FieldMask::COUNTRY_SHORT) {
                let pointer = self.reader.read_u32(column_offset(position))?;
                record.country_short = self.string_at(pointer as usize)?;
            }
            if mask.contains(FieldMask::COUNTRY_LONG) {
                // the long name sits in the same blob as the short code:
                // one length byte plus the 2-letter code, hence +3
                let pointer = self.reader.read_u32(column_offset(position))?;
                record.country_long = self.string_at(pointer as usize + 3)?;
            }
        }
        if mask.contains(FieldMask::REGION) {
            if let Some(position) = Field::Region.column(db_type) {
                let pointer = self.reader.read_u32(column_offset(position))?;
                record.region = self.string_at(pointer as usize)?;
            }
        }
        if mask.contains(FieldMask::CITY) {
            if let Some(position) = Field::City.column(db_type) {
                let pointer = self.reader.read_u32(column_offset(position))?;
                record.city = self.string_at(pointer as usize)?;
            }
        }
        if mask.contains(FieldMask::ISP) {
            if let Some(position) = Field::Isp.column(db_type) {
                let pointer = self.reader.read_u32(column_offset(position))?;
                record.isp = self.string_at(pointer as usize)?;
            }
        }
        if mask.contains(FieldMask::LATITUDE) {
            if let Some(position) = Field::Latitude.column(db_type) {
                record.latitude = self.reader.read_f32(column_offset(position))?;
            }
        }
        if mask.contains(FieldMask::LONGITUDE) {
            if let Some(position) = Field::Longitude.column(db_type) {
                record.longitude = self.reader.read_f32(column_offset(position))?;
            }
        }
        if mask.contains(FieldMask::DOMAIN) {
            if let Some(position) = Field::Domain.column(db_type) {
                let pointer = self.reader.read_u32(column_offset(position))?;
                record.domain = self.string_at(pointer as usize)?;
            }
        }
        if mask.contains(FieldMask::ZIP_CODE) {
            if let Some(position) = Field::ZipCode.column(db_type) {
                let pointer = self.reader.read_u32(column_offset(position))?;
                record.zip_code = self.string_at(pointer as usize)?;
            }
        }
        if mask.contains(FieldMask::TIME_ZONE) {
            if let Some(position) = Field::TimeZone.column(db_type) {
                let pointer = self.reader.read_u32(column_offset(position))?;
                record.time_zone = self.string_at(pointer as usize)?;
            }
        }
        if mask.contains(FieldMask::NET_SPEED) {
            if let Some(position) = Field::NetSpeed.column(db_type) {
                let pointer = self.reader.read_u32(column_offset(position))?;
                record.net_speed = self.string_at(pointer as usize)?;
            }
        }

        Ok(record)
    }

    /// Read the length-prefixed blob at a stored pointer into an owned
    /// String. Stored pointers are 0-based absolute file offsets.
    fn string_at(&self, pointer: usize) -> Result<String> {
        let bytes = self.reader.read_str(pointer)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
