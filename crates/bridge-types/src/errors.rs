//! # Error Types
//!
//! Decoding errors shared by every wire codec in the workspace.

use thiserror::Error;

/// A payload or VAA could not be decoded.
///
/// Every variant is a caller error: structurally malformed input must not be
/// resubmitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input ended before a fixed-width field could be read.
    #[error("Truncated input: needed {needed} bytes at offset {offset}, {remaining} remaining")]
    Truncated {
        /// Offset of the field being read.
        offset: usize,
        /// Width of the field.
        needed: usize,
        /// Bytes left in the input.
        remaining: usize,
    },

    /// Fixed-width input carried extra bytes.
    #[error("Trailing bytes: {0} unexpected bytes after payload")]
    TrailingBytes(usize),

    /// VAA version other than 1.
    #[error("Unsupported VAA version: {0}")]
    UnsupportedVersion(u8),

    /// Leading discriminant byte is not a known payload id.
    #[error("Unknown payload id: {0}")]
    UnknownPayloadId(u8),

    /// A field holds a value outside its domain.
    #[error("Invalid field {field}: {reason}")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// A value cannot be represented in its wire encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The signature count is a single byte on the wire.
    #[error("Too many signatures: {0} (at most 255)")]
    TooManySignatures(usize),
}
