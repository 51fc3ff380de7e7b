//! # lzpack LZSS
//!
//! Windowed LZSS compression for packed game assets (tile-id arrays,
//! collision bitmasks and similar small, redundant blobs). Blobs are
//! compressed offline by the asset tools and decompressed at load time.
//!
//! ## Features
//!
//! - **Fixed wire format**: 2 KB window, 3..=34 byte matches, 8 tokens per
//!   control byte, 4-byte length header ([`format`])
//! - **Compatible output**: the default [`MatchStrategy::Leftmost`] policy is
//!   byte-identical to the asset tool that defined the format
//! - **Safe decoding**: truncated or corrupt streams fail with a
//!   [`FormatError`] instead of reading or writing out of bounds
//!
//! ## Example
//!
//! ```rust
//! use lzpack_lzss::{compress, decompress};
//!
//! let original = b"linksminkimos, linksminkimos, kol dar jauni esmi";
//!
//! let compressed = compress(original);
//! assert!(compressed.len() < original.len());
//!
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Choosing a match strategy
//!
//! ```rust
//! use lzpack_lzss::{LzssConfig, MatchStrategy, compress_with, decompress};
//!
//! let tiles = [7u8; 4096];
//! let compressed = compress_with(&tiles, &LzssConfig::new(MatchStrategy::Longest));
//! assert_eq!(decompress(&compressed).unwrap(), tiles);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod format;
pub mod matcher;

pub use config::{LzssConfig, MatchStrategy};
pub use decoder::{LzssDecoder, StreamInfo};
pub use encoder::{LzssEncoder, Tokens, encode_tokens};
pub use format::Token;
pub use lzpack_core::error::{FormatError, Result};
pub use matcher::{Match, MatchFinder};

use lzpack_core::traits::Codec;

/// Compress `data` with the default, reference-compatible configuration.
///
/// # Panics
///
/// Panics if `data` is longer than `u32::MAX` bytes.
///
/// # Example
///
/// ```rust
/// use lzpack_lzss::compress;
///
/// assert_eq!(compress(b""), [0, 0, 0, 0]);
/// assert_eq!(compress(b"a").len(), 6);
/// ```
pub fn compress(data: &[u8]) -> Vec<u8> {
    compress_with(data, &LzssConfig::default())
}

/// Compress `data` with the given configuration.
///
/// # Panics
///
/// Panics if `data` is longer than `u32::MAX` bytes.
pub fn compress_with(data: &[u8], config: &LzssConfig) -> Vec<u8> {
    LzssEncoder::new(*config).encode(data)
}

/// Decompress a stream produced by any conforming encoder.
///
/// # Errors
///
/// Returns a [`FormatError`] if the stream is truncated or references data
/// outside the window or past the declared length.
///
/// # Example
///
/// ```rust
/// use lzpack_lzss::{FormatError, decompress};
///
/// assert_eq!(decompress(&[1, 0, 0, 0, 0x00, b'a']).unwrap(), b"a");
/// assert!(matches!(
///     decompress(&[1, 0, 0, 0, 0x00]),
///     Err(FormatError::UnexpectedEof { .. })
/// ));
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    LzssDecoder::new().decode(data)
}

/// Decode a stream and report its token statistics.
pub fn inspect(data: &[u8]) -> Result<StreamInfo> {
    LzssDecoder::new().inspect(data)
}

/// The tokens the encoder emits for `data` under `config`.
pub fn tokenize(data: &[u8], config: &LzssConfig) -> Vec<Token> {
    LzssEncoder::new(*config).tokenize(data)
}

/// The LZSS codec as a [`Codec`] value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lzss {
    config: LzssConfig,
}

impl Lzss {
    /// Create a codec that compresses with `config`.
    pub fn new(config: LzssConfig) -> Self {
        Self { config }
    }

    /// The codec's encoder configuration.
    pub fn config(&self) -> &LzssConfig {
        &self.config
    }
}

impl Codec for Lzss {
    fn name(&self) -> &'static str {
        "lzss"
    }

    fn compress(&self, input: &[u8]) -> Vec<u8> {
        compress_with(input, &self.config)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_simple() {
        let original = b"linksminkimos, linksminkimos, kol dar jauni esmi";
        let compressed = compress(original);
        assert!(compressed.len() < original.len());
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress(b"");
        assert_eq!(compressed.len(), 4);
        assert_eq!(decompress(&compressed).unwrap(), b"");
    }

    #[test]
    fn test_single_byte() {
        let compressed = compress(b"a");
        assert_eq!(compressed.len(), 6);
        assert_eq!(decompress(&compressed).unwrap(), b"a");
    }

    #[test]
    fn test_codec_trait() {
        for strategy in MatchStrategy::ALL {
            let codec = Lzss::new(strategy.into());
            assert_eq!(codec.name(), "lzss");
            assert!(codec.verify_roundtrip(b"ABABABABABABABABAB").unwrap());
        }
    }

    #[test]
    fn test_boxed_codec() {
        let codec: Box<dyn Codec> = Box::new(Lzss::default());
        let data = vec![0u8; 1000];
        let compressed = codec.compress(&data);
        assert!(compressed.len() < data.len() / 4);
        assert_eq!(codec.decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_inspect_and_tokenize_agree() {
        let data = b"The quick brown fox jumps over the lazy dog. ".repeat(20);
        let tokens = tokenize(&data, &LzssConfig::default());
        let info = inspect(&compress(&data)).unwrap();
        assert_eq!(info.tokens(), tokens.len());
        assert_eq!(info.matches, tokens.iter().filter(|t| t.is_match()).count());
        assert_eq!(info.blocks, tokens.len().div_ceil(8));
    }
}
