//! Error types for lzpack operations.
//!
//! Compression is total, so the only failure a codec can report is a
//! malformed compressed stream. Every variant below is fatal to the call
//! that produced it: no partial output is ever returned.

use std::fmt;
use thiserror::Error;

/// The kind of value a decoder was about to read when its input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The length header at the start of the stream.
    Header,
    /// A block's control byte.
    ControlByte,
    /// A literal token's raw byte.
    Literal,
    /// A match token's 16-bit pair.
    Pair,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Header => "length header",
            Field::ControlByte => "control byte",
            Field::Literal => "literal byte",
            Field::Pair => "match pair",
        };
        f.write_str(name)
    }
}

/// A malformed or truncated compressed stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The buffer is too short to hold the 4-byte length header.
    #[error("Truncated header: need 4 bytes, have {available}")]
    TruncatedHeader {
        /// Number of bytes present in the buffer.
        available: usize,
    },

    /// The buffer ended where another token or control byte was expected.
    #[error("Unexpected end of stream at offset {offset}: expected {field}")]
    UnexpectedEof {
        /// What was being read.
        field: Field,
        /// Input offset at which the read was attempted.
        offset: usize,
    },

    /// A match would read outside the window or write past the declared length.
    #[error(
        "Invalid back-reference at output position {position}: offset {offset} length {length} \
         (window holds {window_len} bytes, output is {output_len} bytes)"
    )]
    InvalidReference {
        /// Number of bytes produced when the match was decoded.
        position: usize,
        /// Window-relative offset carried by the pair.
        offset: usize,
        /// Decoded match length.
        length: usize,
        /// Bytes currently addressable through the window.
        window_len: usize,
        /// Declared output length from the header.
        output_len: usize,
    },
}

/// Result type alias for lzpack operations.
pub type Result<T> = std::result::Result<T, FormatError>;

impl FormatError {
    /// Create a truncated header error.
    pub fn truncated_header(available: usize) -> Self {
        Self::TruncatedHeader { available }
    }

    /// Create an unexpected end-of-stream error.
    pub fn unexpected_eof(field: Field, offset: usize) -> Self {
        Self::UnexpectedEof { field, offset }
    }

    /// Create an invalid back-reference error.
    pub fn invalid_reference(
        position: usize,
        offset: usize,
        length: usize,
        window_len: usize,
        output_len: usize,
    ) -> Self {
        Self::InvalidReference {
            position,
            offset,
            length,
            window_len,
            output_len,
        }
    }

    /// Returns true if the error was caused by running out of input.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            Self::TruncatedHeader { .. } | Self::UnexpectedEof { .. }
        )
    }
}
