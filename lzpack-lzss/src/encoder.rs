//! LZSS encoder (compression).
//!
//! The source is consumed left to right. At each cursor the configured
//! [`MatchFinder`] is asked for a back-reference; a hit becomes a match
//! token and advances the cursor by its length, a miss becomes a literal.
//! Tokens are framed eight to a block behind a control byte whose bit `i`
//! marks token `i` as a match.

use crate::config::LzssConfig;
use crate::format::{
    HEADER_LEN, TOKENS_PER_BLOCK, Token, max_compressed_len, pack_pair,
};
use crate::matcher::{MatchFinder, matcher_for};

/// Iterator over the tokens the encoder emits for a source buffer.
pub struct Tokens<'a> {
    /// Source being tokenized.
    src: &'a [u8],
    /// Next unencoded source position.
    cursor: usize,
    /// Match search policy.
    matcher: Box<dyn MatchFinder>,
}

impl<'a> Tokens<'a> {
    /// Tokenize `src` with the match policy from `config`.
    pub fn new(src: &'a [u8], config: &LzssConfig) -> Self {
        Self {
            src,
            cursor: 0,
            matcher: matcher_for(config),
        }
    }

    /// Number of source bytes covered by the tokens yielded so far.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let byte = *self.src.get(self.cursor)?;
        let token = match self.matcher.find(self.src, self.cursor) {
            Some(m) => Token::Match {
                offset: m.offset as u16,
                length: m.length as u8,
            },
            None => Token::Literal(byte),
        };
        self.cursor += token.output_len();
        Some(token)
    }
}

/// One block under construction: the control byte and up to eight payloads.
///
/// The control byte is only known once the block is complete, but it
/// precedes the payload on the wire, so both are buffered here and written
/// together.
#[derive(Debug, Default)]
struct Block {
    control: u8,
    tokens: usize,
    payload: [u8; TOKENS_PER_BLOCK * 2],
    len: usize,
}

impl Block {
    fn push(&mut self, token: Token) {
        debug_assert!(self.tokens < TOKENS_PER_BLOCK);
        match token {
            Token::Literal(byte) => {
                self.payload[self.len] = byte;
                self.len += 1;
            }
            Token::Match { offset, length } => {
                self.control |= 1 << self.tokens;
                let pair = pack_pair(offset as usize, length as usize).to_le_bytes();
                self.payload[self.len..self.len + 2].copy_from_slice(&pair);
                self.len += 2;
            }
        }
        self.tokens += 1;
    }

    fn is_full(&self) -> bool {
        self.tokens == TOKENS_PER_BLOCK
    }

    /// Append the block to `out` and start a new one. Empty blocks are
    /// never written.
    fn flush_into(&mut self, out: &mut Vec<u8>) {
        if self.tokens == 0 {
            return;
        }
        out.push(self.control);
        out.extend_from_slice(&self.payload[..self.len]);
        *self = Block::default();
    }
}

/// Write the 4-byte little-endian original length.
///
/// # Panics
///
/// Panics if `len` does not fit the header (more than `u32::MAX` bytes).
fn write_header(out: &mut Vec<u8>, len: usize) {
    assert!(
        len <= u32::MAX as usize,
        "input of {len} bytes exceeds the 4-byte length header"
    );
    out.extend_from_slice(&(len as u32).to_le_bytes());
}

/// Frame `tokens` into a stream whose header declares `original_len`.
fn write_stream<I>(original_len: usize, tokens: I, capacity: usize) -> Vec<u8>
where
    I: IntoIterator<Item = Token>,
{
    let mut out = Vec::with_capacity(capacity);
    write_header(&mut out, original_len);

    let mut block = Block::default();
    for token in tokens {
        block.push(token);
        if block.is_full() {
            block.flush_into(&mut out);
        }
    }
    block.flush_into(&mut out);

    out
}

/// LZSS encoder for compression.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzssEncoder {
    config: LzssConfig,
}

impl LzssEncoder {
    /// Create an encoder with the given configuration.
    pub fn new(config: LzssConfig) -> Self {
        Self { config }
    }

    /// The encoder's configuration.
    pub fn config(&self) -> &LzssConfig {
        &self.config
    }

    /// Compress `input` into a complete stream (header and blocks).
    ///
    /// Empty input yields just the zero-length header.
    ///
    /// # Panics
    ///
    /// Panics if `input` is longer than `u32::MAX` bytes.
    pub fn encode(&self, input: &[u8]) -> Vec<u8> {
        write_stream(
            input.len(),
            Tokens::new(input, &self.config),
            max_compressed_len(input.len()),
        )
    }

    /// The token sequence [`encode`](Self::encode) would frame for `input`.
    pub fn tokenize(&self, input: &[u8]) -> Vec<Token> {
        Tokens::new(input, &self.config).collect()
    }
}

/// Frame an explicit token list into a stream.
///
/// The header carries `original_len` as given; it is not checked against the
/// tokens, which makes this suitable for building deliberately malformed
/// streams as well as valid ones.
///
/// # Panics
///
/// Panics if a token cannot be represented on the wire (offset outside the
/// window or length outside `MIN_MATCH..=MAX_MATCH`), or if `original_len`
/// exceeds `u32::MAX`.
pub fn encode_tokens(original_len: usize, tokens: &[Token]) -> Vec<u8> {
    for token in tokens {
        assert!(token.is_encodable(), "token {token:?} is not encodable");
    }
    let payload: usize = tokens.iter().map(Token::encoded_len).sum();
    let capacity = HEADER_LEN + payload + tokens.len().div_ceil(TOKENS_PER_BLOCK);
    write_stream(original_len, tokens.iter().copied(), capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchStrategy;

    #[test]
    fn test_encode_empty() {
        let encoder = LzssEncoder::default();
        assert_eq!(encoder.encode(b""), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_single_byte() {
        let encoder = LzssEncoder::default();
        assert_eq!(encoder.encode(b"a"), vec![1, 0, 0, 0, 0x00, b'a']);
    }

    #[test]
    fn test_encode_repeats() {
        let encoder = LzssEncoder::default();
        let compressed = encoder.encode(b"abcabcabcabc");
        assert_eq!(
            compressed,
            vec![
                12, 0, 0, 0, // header
                0b0001_1000, // tokens 3 and 4 are matches
                b'a', b'b', b'c', //
                0x00, 0x00, // offset 0, length 3
                0x00, 0x18, // offset 0, length 6
            ]
        );
    }

    #[test]
    fn test_block_boundaries() {
        let encoder = LzssEncoder::default();

        // Eight tokens fill exactly one block.
        let compressed = encoder.encode(b"abcdefgh");
        assert_eq!(compressed.len(), 4 + 1 + 8);
        assert_eq!(compressed[4], 0);

        // A ninth token opens a second block.
        let compressed = encoder.encode(b"abcdefghi");
        assert_eq!(compressed.len(), 4 + 1 + 8 + 1 + 1);
        assert_eq!(&compressed[13..], &[0x00, b'i']);
    }

    #[test]
    fn test_tokens_cover_input() {
        let data = b"linksminkimos, linksminkimos, kol dar jauni esmi";
        for strategy in MatchStrategy::ALL {
            let mut tokens = Tokens::new(data, &LzssConfig::new(strategy));
            let covered: usize = tokens.by_ref().map(|t| t.output_len()).sum();
            assert_eq!(covered, data.len());
            assert_eq!(tokens.position(), data.len());
        }
    }

    #[test]
    fn test_tokenize_finds_repeat() {
        let tokens = LzssEncoder::default().tokenize(b"linksminkimos, linksminkimos");
        assert!(tokens.contains(&Token::Match {
            offset: 0,
            length: 13
        }));
    }

    #[test]
    fn test_longest_strategy_uses_overlap() {
        let encoder = LzssEncoder::new(LzssConfig::BEST);
        let tokens = encoder.tokenize(&[b'z'; 11]);
        assert_eq!(
            tokens,
            vec![
                Token::Literal(b'z'),
                Token::Match {
                    offset: 0,
                    length: 10
                }
            ]
        );
        assert_eq!(encoder.encode(&[b'z'; 11]).len(), 4 + 1 + 1 + 2);
    }

    #[test]
    fn test_encode_tokens_layout() {
        let stream = encode_tokens(
            11,
            &[
                Token::Literal(b'z'),
                Token::Match {
                    offset: 0,
                    length: 10,
                },
            ],
        );
        assert_eq!(stream, vec![11, 0, 0, 0, 0b10, b'z', 0x00, 0x38]);
    }

    #[test]
    #[should_panic(expected = "not encodable")]
    fn test_encode_tokens_rejects_long_match() {
        encode_tokens(
            40,
            &[
                Token::Literal(0),
                Token::Match {
                    offset: 0,
                    length: 35,
                },
            ],
        );
    }
}
