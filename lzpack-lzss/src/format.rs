//! Wire format of an lzpack LZSS stream.
//!
//! ```text
//! offset 0:  u32 little-endian       original length N
//! offset 4:  blocks until N output bytes have been produced
//!   block   := control byte, up to 8 token payloads
//!   control : bit i set => token i is a match, else a literal
//!   literal : 1 raw byte
//!   match   : u16 little-endian pair
//!               low 11 bits  = offset into the window (0..=2047)
//!               high 5 bits  = length - 3 (length 3..=34)
//! ```
//!
//! A match offset is relative to the *start* of the window, not a distance
//! back from the cursor. The window is the last [`WINDOW_SIZE`] bytes before
//! the cursor, so it starts at `cursor.saturating_sub(WINDOW_SIZE)`.
//!
//! These parameters are the format. Changing any of them breaks every
//! decoder already shipped with packed maps.

/// Bits of a pair holding the window offset.
pub const WINDOW_BITS: u32 = 11;

/// Bits of a pair holding `length - MIN_MATCH`.
pub const LENGTH_BITS: u32 = 5;

/// Shortest back-reference worth encoding.
pub const MIN_MATCH: usize = 3;

/// Number of bytes addressable by a match offset.
pub const WINDOW_SIZE: usize = 1 << WINDOW_BITS;

/// Longest back-reference a pair can carry.
pub const MAX_MATCH: usize = MIN_MATCH + (1 << LENGTH_BITS) - 1;

/// Tokens described by one control byte.
pub const TOKENS_PER_BLOCK: usize = 8;

/// Size of the original-length header.
pub const HEADER_LEN: usize = 4;

const _: () = assert!(WINDOW_BITS + LENGTH_BITS == 16);
const _: () = assert!(MIN_MATCH < MAX_MATCH);
const _: () = assert!(MAX_MATCH - MIN_MATCH == (1 << LENGTH_BITS) - 1);
const _: () = assert!(WINDOW_SIZE < (1 << 16));

/// One literal/match decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Copy one raw byte.
    Literal(u8),
    /// Copy `length` bytes starting `offset` bytes into the current window.
    Match {
        /// Window-relative offset (0..WINDOW_SIZE).
        offset: u16,
        /// Number of bytes to copy (MIN_MATCH..=MAX_MATCH).
        length: u8,
    },
}

impl Token {
    /// Number of output bytes this token produces.
    pub fn output_len(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { length, .. } => *length as usize,
        }
    }

    /// Number of payload bytes this token occupies in a block.
    pub fn encoded_len(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { .. } => 2,
        }
    }

    /// Returns true for a match token.
    pub fn is_match(&self) -> bool {
        matches!(self, Token::Match { .. })
    }

    /// Returns true if the token can be represented on the wire.
    pub fn is_encodable(&self) -> bool {
        match *self {
            Token::Literal(_) => true,
            Token::Match { offset, length } => {
                (offset as usize) < WINDOW_SIZE
                    && (MIN_MATCH..=MAX_MATCH).contains(&(length as usize))
            }
        }
    }
}

/// Pack a match into its 16-bit pair.
///
/// The caller guarantees `offset < WINDOW_SIZE` and
/// `MIN_MATCH <= length <= MAX_MATCH`.
#[inline]
pub fn pack_pair(offset: usize, length: usize) -> u16 {
    debug_assert!(offset < WINDOW_SIZE, "offset {offset} outside window");
    debug_assert!(
        (MIN_MATCH..=MAX_MATCH).contains(&length),
        "length {length} not encodable"
    );
    (offset | ((length - MIN_MATCH) << WINDOW_BITS)) as u16
}

/// Split a 16-bit pair into `(offset, length)`.
#[inline]
pub fn unpack_pair(pair: u16) -> (usize, usize) {
    let offset = pair as usize & (WINDOW_SIZE - 1);
    let length = (pair as usize >> WINDOW_BITS) + MIN_MATCH;
    (offset, length)
}

/// First source/output index addressable from `cursor`.
#[inline]
pub fn window_start(cursor: usize) -> usize {
    cursor.saturating_sub(WINDOW_SIZE)
}

/// Worst-case compressed size for `len` input bytes: the header, one raw
/// byte per input byte, and one control byte per 8 tokens.
pub fn max_compressed_len(len: usize) -> usize {
    HEADER_LEN + len + len.div_ceil(TOKENS_PER_BLOCK)
}
