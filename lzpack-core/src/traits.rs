//! Core traits for compression codecs.
//!
//! Asset tooling works on whole, fully buffered blobs. A codec is therefore
//! a pair of pure transforms rather than a streaming state machine: no state
//! survives a call, so a single codec value can be shared across threads.

use crate::error::Result;

/// A whole-buffer compression codec.
pub trait Codec: Send + Sync {
    /// Short, stable name for diagnostics (e.g. `"lzss"`).
    fn name(&self) -> &'static str;

    /// Compress `input`. Compression is total: every byte sequence,
    /// including the empty one, has a compressed form.
    fn compress(&self, input: &[u8]) -> Vec<u8>;

    /// Decompress a buffer produced by [`Codec::compress`] (or any
    /// conforming encoder).
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`](crate::error::FormatError) if the buffer is
    /// truncated or malformed. No partial output is returned.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Compress `input` and check that it decodes back to the same bytes.
    fn verify_roundtrip(&self, input: &[u8]) -> Result<bool> {
        let compressed = self.compress(input);
        Ok(self.decompress(&compressed)? == input)
    }
}
