//! Database API
//!
//! Provides the single public interface for opening a range-indexed
//! geolocation database and looking up addresses against it. The file is
//! memory-mapped on open; a lookup touches only the header copy plus the
//! handful of rows the binary search probes.
//!
//! A [`Database`] is immutable after open. Lookups take `&self` and share
//! no cursor, so independent call sites need no external coordination
//! beyond keeping the value alive; the mapping is released on drop.

use crate::binformat::{BinHeader, FieldMask, RangeIndex};
use crate::error::{GeorangeError, Result};
use crate::reader::{Reader, Storage};
use crate::record::{LocationRecord, Lookup};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Read-only geolocation database
///
/// # Examples
///
/// ```no_run
/// use georange::{Database, FieldMask, Lookup};
///
/// let db = Database::open("IP-COUNTRY.BIN")?;
///
/// match db.lookup("8.8.8.8", FieldMask::ALL)? {
///     Lookup::Found(record) => println!("{} ({})", record.country_long, record.country_short),
///     Lookup::NotFound => println!("no range covers this address"),
///     Lookup::InvalidAddress => println!("not a valid address"),
/// }
/// # Ok::<(), georange::GeorangeError>(())
/// ```
#[derive(Debug)]
pub struct Database {
    storage: Storage,
    header: BinHeader,
}

impl Database {
    /// Open a database file using memory mapping
    ///
    /// Fails with an I/O error naming the path if the file cannot be
    /// opened or mapped, or if it is too short to hold the header region.
    /// Header contents themselves are not validated.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| GeorangeError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

        let mmap = unsafe { Mmap::map(&file) }
            .map_err(|e| GeorangeError::Io(format!("Failed to mmap {}: {}", path.display(), e)))?;

        Self::from_storage(Storage::Mmap(mmap))
    }

    /// Create a database from raw bytes (for tests and benchmarks)
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_storage(Storage::Owned(data))
    }

    fn from_storage(storage: Storage) -> Result<Self> {
        let header = BinHeader::from_file(storage.as_slice())?;
        Ok(Self { storage, header })
    }

    /// Look up an address string
    ///
    /// The database's own IP version picks the parse path: an IPv4 literal
    /// against an IPv6 database is an invalid IPv6 address, matching the
    /// reference reader. Fields outside `mask` stay at their sentinel.
    pub fn lookup(&self, address: &str, mask: FieldMask) -> Result<Lookup> {
        let index = RangeIndex::new(Reader::new(self.storage.as_slice()), &self.header);
        index.lookup(address, mask)
    }

    /// Look up with the reference's record-or-nothing surface
    ///
    /// An invalid address yields a fully populated sentinel record instead
    /// of a distinct outcome; not-found yields `None`. Kept for callers
    /// that inspect record contents to detect invalid input.
    pub fn lookup_compat(&self, address: &str, mask: FieldMask) -> Result<Option<LocationRecord>> {
        Ok(self
            .lookup(address, mask)?
            .into_compat(self.header.ip_version))
    }

    /// The decoded header
    pub fn header(&self) -> &BinHeader {
        &self.header
    }

    /// Number of data intervals in the database
    pub fn record_count(&self) -> u32 {
        self.header.record_count
    }
}
