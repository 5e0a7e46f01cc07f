//! Compression level for the LZ4 block codec.
//!
//! LZ4 does not vary its format with level — only the encoder's search
//! effort changes. A level selects an `(acceleration, thorough)` pair that
//! drives the match finder's skip schedule and whether it re-indexes the
//! interior of an emitted match.

/// A clamped LZ4 compression level in `0..=9`.
///
/// Negative levels are coerced to `1`; levels above `9` are clamped to `9`,
/// matching the reference encoder's parameter handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    /// Store mode: match search disabled, output is all literals.
    pub const NONE: Self = Self(0);
    /// Fastest search that still looks for matches.
    pub const FAST: Self = Self(1);
    /// Balanced default.
    pub const DEFAULT: Self = Self(1);
    /// Slowest, highest-effort search (enables re-indexing).
    pub const BEST: Self = Self(9);

    /// Build a level from a raw integer, applying the reference encoder's
    /// clamping rule: negative becomes `1`, anything above `9` becomes `9`.
    pub fn from_raw(level: i32) -> Self {
        let level = if level < 0 { 1 } else { level };
        Self(level.min(9) as u8)
    }

    /// The clamped level value, `0..=9`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The `(acceleration, thorough)` pair the encoder's main loop consumes.
    ///
    /// `acceleration == 0` disables the search entirely (store mode).
    /// `thorough` enables the post-match re-index pass.
    pub fn search_params(self) -> (u32, bool) {
        match self.0 {
            0 => (0, false),
            1 => (8, false),
            2 => (7, false),
            3 => (6, false),
            4 => (5, false),
            5 => (4, false),
            6 => (3, false),
            7 => (2, false),
            8 => (1, false),
            _ => (1, true),
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for CompressionLevel {
    fn from(level: i32) -> Self {
        Self::from_raw(level)
    }
}
