//! LZSS decoder (decompression).
//!
//! The decoder reads the length header, then alternates between a control
//! byte and up to eight tokens until exactly the declared number of bytes
//! has been produced. Decoding stops the moment the output is complete,
//! even in the middle of a block: unused control bits and any bytes after
//! that point are never consulted.
//!
//! Match sources are taken from the output produced so far. Copies run one
//! byte at a time in increasing order, so a match whose source overlaps its
//! destination repeats the bytes it has just written.

use crate::format::{MAX_MATCH, TOKENS_PER_BLOCK, Token, unpack_pair, window_start};
use lzpack_core::bytes::ByteReader;
use lzpack_core::error::{Field, FormatError, Result};

/// Statistics gathered while decoding a stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamInfo {
    /// Length declared by the header.
    pub original_len: usize,
    /// Size of the compressed buffer, header included.
    pub compressed_len: usize,
    /// Control bytes read.
    pub blocks: usize,
    /// Literal tokens decoded.
    pub literals: usize,
    /// Match tokens decoded.
    pub matches: usize,
    /// Output bytes produced by matches.
    pub matched_bytes: usize,
    /// Longest match decoded.
    pub longest_match: usize,
    /// Bytes left in the buffer after the output was complete.
    pub trailing_bytes: usize,
}

impl StreamInfo {
    /// Total tokens decoded.
    pub fn tokens(&self) -> usize {
        self.literals + self.matches
    }

    /// Compressed size as a fraction of the original size (`0.0` for empty
    /// output).
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }
        self.compressed_len as f64 / self.original_len as f64
    }
}

/// Copy `length` bytes starting `offset` bytes into the current window onto
/// the end of `out`.
fn copy_match(out: &mut Vec<u8>, offset: usize, length: usize, output_len: usize) -> Result<()> {
    let position = out.len();
    let start = window_start(position);
    let window_len = position - start;

    // The first source byte must already exist, and the copy must not run
    // past the declared length.
    if offset >= window_len || position + length > output_len {
        return Err(FormatError::invalid_reference(
            position, offset, length, window_len, output_len,
        ));
    }

    let from = start + offset;
    for i in 0..length {
        let byte = out[from + i];
        out.push(byte);
    }
    Ok(())
}

/// LZSS decoder for decompression.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzssDecoder;

impl LzssDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decode a complete stream.
    ///
    /// # Errors
    ///
    /// - [`FormatError::TruncatedHeader`] if the buffer is shorter than the header
    /// - [`FormatError::UnexpectedEof`] if a control byte, literal or pair is
    ///   missing before the output is complete
    /// - [`FormatError::InvalidReference`] if a match reads outside the
    ///   window or writes past the declared length
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decode_with_info(input).map(|(output, _)| output)
    }

    /// Decode a stream and report what it contained.
    pub fn inspect(&self, input: &[u8]) -> Result<StreamInfo> {
        self.decode_with_info(input).map(|(_, info)| info)
    }

    /// Decode a stream and return the tokens it was built from.
    pub fn decode_tokens(&self, input: &[u8]) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        self.run(input, |token| tokens.push(token))?;
        Ok(tokens)
    }

    /// Decode a stream, returning both the output and its statistics.
    pub fn decode_with_info(&self, input: &[u8]) -> Result<(Vec<u8>, StreamInfo)> {
        let mut info = StreamInfo {
            compressed_len: input.len(),
            ..StreamInfo::default()
        };

        let progress = self.run(input, |token| match token {
            Token::Literal(_) => info.literals += 1,
            Token::Match { length, .. } => {
                info.matches += 1;
                info.matched_bytes += length as usize;
                info.longest_match = info.longest_match.max(length as usize);
            }
        })?;

        info.original_len = progress.output.len();
        info.blocks = progress.blocks;
        info.trailing_bytes = progress.trailing_bytes;
        Ok((progress.output, info))
    }

    /// The decode loop. `visit` sees every token after it has been applied.
    fn run(&self, input: &[u8], mut visit: impl FnMut(Token)) -> Result<Decoded> {
        let mut reader = ByteReader::new(input);
        let output_len = reader.read_u32_le(Field::Header)? as usize;

        // A pair expands to at most MAX_MATCH bytes, so the header alone
        // can't force a huge allocation.
        let mut output = Vec::with_capacity(output_len.min(input.len().saturating_mul(MAX_MATCH)));
        let mut blocks = 0;

        while output.len() < output_len {
            let control = reader.read_u8(Field::ControlByte)?;
            blocks += 1;

            for bit in 0..TOKENS_PER_BLOCK {
                if output.len() >= output_len {
                    break;
                }

                if control & (1 << bit) == 0 {
                    let byte = reader.read_u8(Field::Literal)?;
                    output.push(byte);
                    visit(Token::Literal(byte));
                    continue;
                }

                let (offset, length) = unpack_pair(reader.read_u16_le(Field::Pair)?);
                copy_match(&mut output, offset, length, output_len)?;
                visit(Token::Match {
                    offset: offset as u16,
                    length: length as u8,
                });
            }
        }

        Ok(Decoded {
            output,
            blocks,
            trailing_bytes: reader.remaining(),
        })
    }
}

/// Result of the decode loop.
struct Decoded {
    output: Vec<u8>,
    blocks: usize,
    trailing_bytes: usize,
}
