//! Georange - Fast Read-Only IP Geolocation Lookups
//!
//! Georange answers "where is this IP?" from a local range-indexed binary
//! database file: no network round trip, no service dependency. Given an
//! IPv4 or IPv6 address it returns geographic and network attributes
//! (country, region, city, ISP, coordinates, domain, zip code, time zone,
//! connection speed) for the range containing that address.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use georange::{Database, FieldMask, Lookup};
//!
//! // Memory-maps the file; ready for lookups immediately
//! let db = Database::open("IP-COUNTRY-REGION-CITY.BIN")?;
//!
//! // Request only the fields you need
//! let outcome = db.lookup("8.8.8.8", FieldMask::COUNTRY_SHORT | FieldMask::CITY)?;
//! if let Lookup::Found(record) = outcome {
//!     println!("{} / {}", record.country_short, record.city);
//! }
//!
//! // IPv6 works against IPv6-keyed databases, "::" compression included
//! let outcome = db.lookup("2001:db8::1", FieldMask::ALL)?;
//! # Ok::<(), georange::GeorangeError>(())
//! ```
//!
//! # Key Features
//!
//! - **Zero-Copy Loading**: memory-mapped files, no load step
//! - **Range Search**: O(log n) binary search over sorted IP intervals
//! - **15 Schema Editions**: field layout resolved per database type
//! - **Field Selection**: pay only for the fields you request
//! - **Exact IPv6 Math**: 128-bit integer keys, no floating point
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  Database File Format                │
//! ├──────────────────────────────────────┤
//! │  1. Header (schema type, counts)     │
//! │  2. Range rows (sorted, fixed width) │
//! │  3. String blobs (length-prefixed)   │
//! └──────────────────────────────────────┘
//!          ↓ mmap() syscall
//! ┌──────────────────────────────────────┐
//! │  address → key → binary search       │
//! │  → field extraction → LocationRecord │
//! └──────────────────────────────────────┘
//! ```
//!
//! Lookups are synchronous and touch only the probed rows. A `Database` is
//! immutable after open; share it behind your own synchronization if you
//! need cross-thread access, or open one handle per thread.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
/// Address parsing and canonicalization
pub mod addr;
/// Range-database binary format (internal layout, header, search)
pub mod binformat;
/// Database open/lookup API
pub mod database;
/// Error types for georange operations
pub mod error;
/// Positional reads over database storage
pub mod reader;
/// Lookup result types
pub mod record;

// Re-exports for consumers

/// Read-only geolocation database
pub use crate::database::Database;

/// Field selection mask and format-level types
pub use crate::binformat::{BinHeader, Field, FieldMask, IpVersion};

pub use crate::error::{GeorangeError, Result};
pub use crate::record::{LocationRecord, Lookup};

// Version information
/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
