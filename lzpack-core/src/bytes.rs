//! Bounds-checked little-endian reads over an in-memory buffer.
//!
//! Compressed asset blobs are always fully materialized, so the decoders
//! in this workspace read from a slice rather than an `io::Read`. Each read
//! names the [`Field`] it expects; running off the end of the slice turns
//! into a [`FormatError`] carrying that field and the input offset.
//!
//! # Example
//!
//! ```
//! use lzpack_core::bytes::ByteReader;
//! use lzpack_core::error::Field;
//!
//! let data = [0x0C, 0x00, 0x00, 0x00, 0x18, 0x61];
//! let mut reader = ByteReader::new(&data);
//! assert_eq!(reader.read_u32_le(Field::Header).unwrap(), 12);
//! assert_eq!(reader.read_u8(Field::ControlByte).unwrap(), 0x18);
//! assert_eq!(reader.remaining(), 1);
//! ```

use crate::error::{Field, FormatError, Result};

/// A forward-only reader over a byte slice.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    /// Underlying data.
    data: &'a [u8],
    /// Offset of the next unread byte.
    position: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Returns true when every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread tail of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    #[inline]
    fn take<const N: usize>(&mut self, field: Field) -> Result<[u8; N]> {
        let end = self.position + N;
        let Some(bytes) = self.data.get(self.position..end) else {
            return Err(self.eof(field));
        };
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.position = end;
        Ok(out)
    }

    fn eof(&self, field: Field) -> FormatError {
        match field {
            Field::Header => FormatError::truncated_header(self.data.len()),
            _ => FormatError::unexpected_eof(field, self.position),
        }
    }

    /// Read one byte.
    #[inline]
    pub fn read_u8(&mut self, field: Field) -> Result<u8> {
        let [byte] = self.take::<1>(field)?;
        Ok(byte)
    }

    /// Read a little-endian `u16`.
    #[inline]
    pub fn read_u16_le(&mut self, field: Field) -> Result<u16> {
        Ok(u16::from_le_bytes(self.take::<2>(field)?))
    }

    /// Read a little-endian `u32`.
    pub fn read_u32_le(&mut self, field: Field) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take::<4>(field)?))
    }
}
