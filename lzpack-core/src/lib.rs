//! # lzpack Core
//!
//! Core components shared by the lzpack codecs and tools.
//!
//! - [`bytes`]: Bounds-checked little-endian reads over a buffer
//! - [`crc`]: CRC-32 checksum
//! - [`traits`]: The whole-buffer [`Codec`] trait
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Tools                                                   │
//! │     lzpack CLI, asset converters                        │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec                                                   │
//! │     LZSS (11-bit window, 5-bit length, 8-token blocks)  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     ByteReader, Codec trait, FormatError, CRC-32        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lzpack_core::bytes::ByteReader;
//! use lzpack_core::crc::Crc32;
//! use lzpack_core::error::Field;
//!
//! let mut reader = ByteReader::new(&[0x2A, 0x00, 0x00, 0x00]);
//! assert_eq!(reader.read_u32_le(Field::Header).unwrap(), 42);
//!
//! assert_eq!(Crc32::compute(b"Hello, World!"), 0xEC4AC3D0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bytes;
pub mod crc;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bytes::ByteReader;
pub use crc::Crc32;
pub use error::{Field, FormatError, Result};
pub use traits::Codec;
