// Author: Lukas Bower
// Purpose: Define wire-level error conditions and layout constants for Brokkr buffers.

//! Brokkr wire data model: error taxonomy and layout constants.

/// Number of bytes in the wire form of a record identifier.
pub const IDENT_WIRE_LEN: usize = 16;

/// Maximum number of 7-bit groups in a 32-bit varint.
pub const MAX_VARINT_GROUPS: usize = 5;

/// Possible errors produced while encoding or decoding Brokkr wire buffers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    /// Requested byte range falls outside the buffer bounds.
    #[error("range {start}..{end} out of bounds for buffer of {len} bytes")]
    OutOfRange {
        /// First byte index of the requested range.
        start: usize,
        /// One past the last byte index of the requested range.
        end: usize,
        /// Length of the underlying buffer.
        len: usize,
    },
    /// Varint decoding ran out of bytes or exceeded the group limit with the
    /// continuation bit still set.
    #[error("unexpected end of buffer while decoding varint")]
    UnexpectedEndOfBuffer,
    /// Encountered malformed UTF-8 data in a string field.
    #[error("invalid utf8 in string field")]
    InvalidEncoding,
}
