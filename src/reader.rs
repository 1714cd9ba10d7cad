//! Positional reads over database storage
//!
//! The database file is either memory-mapped or held as an owned buffer;
//! both are exposed as one immutable byte slice. All multi-byte values are
//! stored little-endian and byte order is corrected on read, so lookups
//! behave identically on big-endian hosts.
//!
//! Every primitive read is bounds-checked against the storage slice. A read
//! that would run past the end returns [`GeorangeError::Truncated`] instead
//! of silently yielding zero-filled data.
//!
//! All offsets taken here are 0-based byte positions. The on-disk format's
//! 1-based positions (header fields, row base address) are converted before
//! they reach this module.

use crate::error::{GeorangeError, Result};
use memmap2::Mmap;

/// Storage for database data - either owned or memory-mapped
#[derive(Debug)]
pub enum Storage {
    /// Heap-owned copy of the file contents
    Owned(Vec<u8>),
    /// Memory-mapped file
    Mmap(Mmap),
}

impl Storage {
    /// View the storage as one contiguous byte slice
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Owned(v) => v.as_slice(),
            Storage::Mmap(m) => &m[..],
        }
    }
}

/// Bounds-checked positional reader over a database byte slice
///
/// Cheap to construct and copy; it is just a view. One is created per
/// lookup, so no seek cursor is shared between lookups and concurrent
/// readers over the same storage cannot interfere.
#[derive(Clone, Copy)]
pub struct Reader<'a> {
    data: &'a [u8],
}

impl<'a> Reader<'a> {
    /// Create a reader over a database byte slice
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Total storage size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the storage is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fetch `N` bytes starting at `offset`, or a truncation error
    fn bytes<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        let slice = offset
            .checked_add(N)
            .and_then(|end| self.data.get(offset..end));
        match slice {
            Some(slice) => {
                let mut buf = [0u8; N];
                buf.copy_from_slice(slice);
                Ok(buf)
            }
            None => Err(GeorangeError::Truncated {
                offset,
                needed: N,
                size: self.data.len(),
            }),
        }
    }

    /// Read a single byte
    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        self.bytes::<1>(offset).map(|b| b[0])
    }

    /// Read a little-endian u32
    pub fn read_u32(&self, offset: usize) -> Result<u32> {
        self.bytes::<4>(offset).map(u32::from_le_bytes)
    }

    /// Read a little-endian u128 (16 bytes, least-significant limb first)
    pub fn read_u128(&self, offset: usize) -> Result<u128> {
        self.bytes::<16>(offset).map(u128::from_le_bytes)
    }

    /// Read a little-endian IEEE-754 single-precision float
    pub fn read_f32(&self, offset: usize) -> Result<f32> {
        self.bytes::<4>(offset).map(f32::from_le_bytes)
    }

    /// Read a length-prefixed string blob: 1 length byte, then exactly that
    /// many raw bytes, no terminator.
    ///
    /// The bytes are returned verbatim as an owned buffer; embedded NUL
    /// bytes are preserved and no encoding is assumed.
    pub fn read_str(&self, offset: usize) -> Result<Vec<u8>> {
        let len = self.read_u8(offset)? as usize;
        let start = offset + 1;
        let slice = start
            .checked_add(len)
            .and_then(|end| self.data.get(start..end));
        match slice {
            Some(slice) => Ok(slice.to_vec()),
            None => Err(GeorangeError::Truncated {
                offset: start,
                needed: len,
                size: self.data.len(),
            }),
        }
    }
}
