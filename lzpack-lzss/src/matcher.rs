//! Back-reference search.
//!
//! Given the whole source buffer and a cursor, a [`MatchFinder`] looks for a
//! run of at least [`MIN_MATCH`] bytes inside the window that ends at the
//! cursor. Every finder upholds the same output contract, which is all the
//! decoder relies on:
//!
//! - `MIN_MATCH <= length <= MAX_MATCH` and `cursor + length <= src.len()`
//! - `offset < cursor - window_start(cursor)` (the first copied byte is
//!   already in the window)
//! - copying byte-at-a-time from `window_start + offset` reproduces
//!   `src[cursor..cursor + length]`
//!
//! Which match is picked is policy. [`LeftmostMatcher`] reproduces the
//! reference asset tool bit for bit; the others trade that for ratio or
//! speed.

use crate::config::{LzssConfig, MatchStrategy};
use crate::format::{MAX_MATCH, MIN_MATCH, WINDOW_SIZE, window_start};
use memchr::memmem;

/// A back-reference found by a [`MatchFinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Offset from the start of the window.
    pub offset: usize,
    /// Number of bytes covered.
    pub length: usize,
}

/// Strategy for finding a back-reference at a cursor position.
///
/// Finders may keep state between calls (e.g. hash chains) but are always
/// driven with a non-decreasing cursor over a single source buffer.
pub trait MatchFinder {
    /// Find a match for `src[cursor..]`, or `None` if no run of at least
    /// `MIN_MATCH` bytes qualifies.
    fn find(&mut self, src: &[u8], cursor: usize) -> Option<Match>;
}

/// Build the finder selected by `config`.
pub fn matcher_for(config: &LzssConfig) -> Box<dyn MatchFinder> {
    match config.strategy {
        MatchStrategy::Leftmost => Box::new(LeftmostMatcher),
        MatchStrategy::Longest => Box::new(LongestMatcher),
        MatchStrategy::HashChain => Box::new(HashChainMatcher::new(config.max_chain)),
    }
}

/// Length of the common prefix of `src[candidate..]` and `lookahead`.
///
/// `candidate` lies before the cursor, so the comparison may run into the
/// lookahead itself; that is exactly what a byte-at-a-time copy produces.
#[inline]
fn common_prefix(src: &[u8], candidate: usize, lookahead: &[u8]) -> usize {
    src[candidate..]
        .iter()
        .zip(lookahead)
        .take_while(|(a, b)| a == b)
        .count()
}

/// Incremental leftmost-occurrence matcher.
///
/// Starting from the 3 bytes at the cursor, search the window for the
/// leftmost occurrence of the pattern; on success remember it and grow the
/// pattern by one byte, until a search fails, `MAX_MATCH` is reached or the
/// input runs out. Occurrences never extend past the cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftmostMatcher;

impl MatchFinder for LeftmostMatcher {
    fn find(&mut self, src: &[u8], cursor: usize) -> Option<Match> {
        if src.len().saturating_sub(cursor) < MIN_MATCH {
            return None;
        }

        let window = &src[window_start(cursor)..cursor];
        let mut best = None;
        // The leftmost occurrence of a longer pattern can't start before
        // the leftmost occurrence of its prefix.
        let mut from = 0;
        let mut length = MIN_MATCH;

        while let Some(pos) = memmem::find(&window[from..], &src[cursor..cursor + length]) {
            let offset = from + pos;
            best = Some(Match { offset, length });

            if length == MAX_MATCH || cursor + length == src.len() {
                break;
            }
            from = offset;
            length += 1;
        }

        best
    }
}

/// Exhaustive longest-match search.
///
/// Every window position is tried; the longest match wins and the lowest
/// offset breaks ties. Matches may overlap the cursor, so runs compress
/// from their second byte on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestMatcher;

impl MatchFinder for LongestMatcher {
    fn find(&mut self, src: &[u8], cursor: usize) -> Option<Match> {
        let limit = src.len().saturating_sub(cursor).min(MAX_MATCH);
        if limit < MIN_MATCH {
            return None;
        }

        let start = window_start(cursor);
        let lookahead = &src[cursor..cursor + limit];
        let mut best = Match {
            offset: 0,
            length: 0,
        };

        for candidate in start..cursor {
            let length = common_prefix(src, candidate, lookahead);
            if length > best.length {
                best = Match {
                    offset: candidate - start,
                    length,
                };
                if length == limit {
                    break;
                }
            }
        }

        (best.length >= MIN_MATCH).then_some(best)
    }
}

/// Bits of the hash-chain head table index.
const HASH_BITS: u32 = 12;

/// Size of the head table.
const HASH_SIZE: usize = 1 << HASH_BITS;

/// Empty slot marker.
const NIL: usize = usize::MAX;

/// Hash-chain matcher.
///
/// Positions are indexed by a hash of their first 3 bytes. The chain for
/// the cursor's hash is walked from the most recent position backwards and
/// the longest of the first `max_chain` candidates inside the window wins.
#[derive(Debug, Clone)]
pub struct HashChainMatcher {
    /// Most recent position for each hash.
    head: Vec<usize>,
    /// Previous position with the same hash, indexed by `pos % WINDOW_SIZE`.
    prev: Vec<usize>,
    /// Next source position to insert.
    inserted: usize,
    /// Maximum candidates examined per search.
    max_chain: usize,
}

impl HashChainMatcher {
    /// Create a matcher examining at most `max_chain` candidates per search.
    pub fn new(max_chain: usize) -> Self {
        Self {
            head: vec![NIL; HASH_SIZE],
            prev: vec![NIL; WINDOW_SIZE],
            inserted: 0,
            max_chain: max_chain.max(1),
        }
    }

    /// Reset to an empty history.
    pub fn reset(&mut self) {
        self.head.fill(NIL);
        self.prev.fill(NIL);
        self.inserted = 0;
    }

    #[inline(always)]
    fn hash(bytes: &[u8]) -> usize {
        let key = (bytes[0] as u32) << 16 | (bytes[1] as u32) << 8 | bytes[2] as u32;
        (key.wrapping_mul(0x9E37_79B1) >> (32 - HASH_BITS)) as usize
    }

    /// Index every position before `cursor` that has 3 bytes to hash.
    fn insert_until(&mut self, src: &[u8], cursor: usize) {
        let last = cursor.min(src.len().saturating_sub(MIN_MATCH - 1));
        while self.inserted < last {
            let pos = self.inserted;
            let h = Self::hash(&src[pos..]);
            self.prev[pos & (WINDOW_SIZE - 1)] = self.head[h];
            self.head[h] = pos;
            self.inserted += 1;
        }
        self.inserted = self.inserted.max(cursor);
    }
}

impl Default for HashChainMatcher {
    fn default() -> Self {
        Self::new(LzssConfig::FAST.max_chain)
    }
}

impl MatchFinder for HashChainMatcher {
    fn find(&mut self, src: &[u8], cursor: usize) -> Option<Match> {
        if cursor < self.inserted {
            // Driven with a new buffer; start over.
            self.reset();
        }
        self.insert_until(src, cursor);

        let limit = src.len().saturating_sub(cursor).min(MAX_MATCH);
        if limit < MIN_MATCH {
            return None;
        }

        let start = window_start(cursor);
        let lookahead = &src[cursor..cursor + limit];
        let mut best = Match {
            offset: 0,
            length: 0,
        };

        let mut candidate = self.head[Self::hash(lookahead)];
        let mut steps = 0;
        while candidate != NIL && candidate >= start && steps < self.max_chain {
            let length = common_prefix(src, candidate, lookahead);
            if length > best.length {
                best = Match {
                    offset: candidate - start,
                    length,
                };
                if length == limit {
                    break;
                }
            }
            candidate = self.prev[candidate & (WINDOW_SIZE - 1)];
            steps += 1;
        }

        (best.length >= MIN_MATCH).then_some(best)
    }
}
