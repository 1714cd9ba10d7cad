/// Error types for the georange library
use std::fmt;

/// Result type alias for georange operations
pub type Result<T> = std::result::Result<T, GeorangeError>;

/// Main error type for georange operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeorangeError {
    /// I/O errors (open/mmap failures)
    Io(String),

    /// File is too small to contain the fixed header region
    HeaderTooShort {
        /// Actual file size in bytes
        size: usize,
        /// Minimum required size in bytes
        required: usize,
    },

    /// A positional read ran past the end of the database storage
    Truncated {
        /// Byte offset the read started at
        offset: usize,
        /// Number of bytes the read needed
        needed: usize,
        /// Total storage size in bytes
        size: usize,
    },
}

impl fmt::Display for GeorangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeorangeError::Io(msg) => write!(f, "I/O error: {}", msg),
            GeorangeError::HeaderTooShort { size, required } => {
                write!(
                    f,
                    "File too small: {} bytes (need at least {})",
                    size, required
                )
            }
            GeorangeError::Truncated {
                offset,
                needed,
                size,
            } => {
                write!(
                    f,
                    "Truncated read: {} bytes at offset {} exceeds storage size {}",
                    needed, offset, size
                )
            }
        }
    }
}

impl std::error::Error for GeorangeError {}

impl From<std::io::Error> for GeorangeError {
    fn from(err: std::io::Error) -> Self {
        GeorangeError::Io(err.to_string())
    }
}
