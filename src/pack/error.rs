//! Packer error types

use thiserror::Error;

/// Packer errors
#[derive(Error, Debug)]
pub enum Error {
    /// Insufficient remaining capacity for the format and payload about to
    /// be written. The buffer cursor is left unchanged; the caller may retry
    /// against a larger buffer.
    #[error("buffer overflow: need {needed} bytes, {remaining} remaining")]
    Overflow {
        /// Bytes the rejected encode would have written
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// Array element count exceeds the widest supported header format
    #[error("array too long: {len} elements (max 65535)")]
    ArrayTooLong {
        /// Element count
        len: usize,
    },

    /// Map pair count exceeds the widest supported header format
    #[error("map too long: {len} pairs (max 4294967295)")]
    MapTooLong {
        /// Key-value pair count
        len: usize,
    },

    /// String byte length exceeds the widest supported header format
    #[error("string too long: {len} bytes (max 65535)")]
    StrTooLong {
        /// Byte length
        len: usize,
    },

    /// Buffer storage allocation failed
    #[error("failed to allocate {capacity}-byte buffer")]
    Alloc {
        /// Requested capacity
        capacity: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
