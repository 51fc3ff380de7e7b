//! Encoder configuration.
//!
//! Only the match-selection policy is configurable. The wire format is
//! fixed (see [`crate::format`]), so every strategy produces streams the
//! same decoder reads; they differ in speed, ratio, and whether the output
//! is byte-identical to the asset tool that defined the format.

use std::fmt;
use std::str::FromStr;

/// How the encoder chooses a back-reference at each cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Grow a 3-byte pattern one byte at a time, keeping the leftmost
    /// occurrence inside the window at each step. Byte-identical to the
    /// reference asset tool.
    #[default]
    Leftmost,
    /// Check every window position and keep the longest match, which may
    /// run past the cursor. Ties go to the lowest offset.
    Longest,
    /// Walk a 3-byte hash chain and keep the longest of the first
    /// `max_chain` candidates.
    HashChain,
}

impl MatchStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [MatchStrategy; 3] = [
        MatchStrategy::Leftmost,
        MatchStrategy::Longest,
        MatchStrategy::HashChain,
    ];

    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            MatchStrategy::Leftmost => "leftmost",
            MatchStrategy::Longest => "longest",
            MatchStrategy::HashChain => "hash-chain",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leftmost" => Ok(MatchStrategy::Leftmost),
            "longest" => Ok(MatchStrategy::Longest),
            "hash-chain" | "hashchain" | "hash_chain" => Ok(MatchStrategy::HashChain),
            other => Err(format!("unknown match strategy: {other}")),
        }
    }
}

/// LZSS encoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzssConfig {
    /// Match selection policy.
    pub strategy: MatchStrategy,
    /// Maximum hash-chain candidates examined per position
    /// (only used by [`MatchStrategy::HashChain`]).
    pub max_chain: usize,
}

impl LzssConfig {
    /// Output identical to the reference asset tool.
    pub const COMPATIBLE: Self = Self {
        strategy: MatchStrategy::Leftmost,
        max_chain: 0,
    };

    /// Exhaustive longest-match search.
    pub const BEST: Self = Self {
        strategy: MatchStrategy::Longest,
        max_chain: 0,
    };

    /// Hash-chain search with a shallow chain.
    pub const FAST: Self = Self {
        strategy: MatchStrategy::HashChain,
        max_chain: 32,
    };

    /// Create a configuration for `strategy` with its default tuning.
    pub fn new(strategy: MatchStrategy) -> Self {
        match strategy {
            MatchStrategy::Leftmost => Self::COMPATIBLE,
            MatchStrategy::Longest => Self::BEST,
            MatchStrategy::HashChain => Self::FAST,
        }
    }

    /// Override the hash-chain depth. Zero is treated as one.
    pub fn with_max_chain(mut self, max_chain: usize) -> Self {
        self.max_chain = max_chain.max(1);
        self
    }
}

impl Default for LzssConfig {
    fn default() -> Self {
        Self::COMPATIBLE
    }
}

impl From<MatchStrategy> for LzssConfig {
    fn from(strategy: MatchStrategy) -> Self {
        Self::new(strategy)
    }
}
