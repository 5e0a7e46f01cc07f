//! Error types for LZ4 block compression and decompression.
//!
//! The codec distinguishes two classes of failure: programmer errors caught
//! at the API boundary before any work happens, and data/space errors
//! detected while walking the block. See each variant's documentation for
//! which class it belongs to.

use thiserror::Error;

/// The error type returned by lz4block's encoder and decoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Lz4Error {
    /// Input block exceeds the format's maximum block size.
    ///
    /// A programmer error: caught before the encoder touches its input.
    #[error("input block of {size} bytes exceeds the {max} byte limit")]
    BlockTooLarge {
        /// Size of the rejected input, in bytes.
        size: usize,
        /// The format's maximum block size (`0x7E000000`).
        max: usize,
    },

    /// The output buffer is too small for the next sequence (or the final
    /// literals flush).
    ///
    /// Raised by both the encoder and the decoder; partial output written
    /// before this error is not meaningful and must be discarded.
    #[error("output buffer has {available} bytes but the operation needs {needed}")]
    InsufficientSpace {
        /// Bytes the next write actually needs.
        needed: usize,
        /// Bytes remaining in the caller's output buffer.
        available: usize,
    },

    /// The decoder encountered a sequence it cannot interpret as valid LZ4.
    #[error("corrupted block at input byte {offset}: {reason}")]
    CorruptedSequence {
        /// Byte offset into the input where the problem was detected.
        offset: usize,
        /// Which check failed (zero offset, out-of-window reference,
        /// truncated token, ...).
        reason: &'static str,
    },
}

/// Result type alias for lz4block operations.
pub type Result<T> = std::result::Result<T, Lz4Error>;

impl Lz4Error {
    /// Build a [`Lz4Error::BlockTooLarge`].
    pub fn block_too_large(size: usize, max: usize) -> Self {
        Self::BlockTooLarge { size, max }
    }

    /// Build a [`Lz4Error::InsufficientSpace`].
    pub fn insufficient_space(needed: usize, available: usize) -> Self {
        Self::InsufficientSpace { needed, available }
    }

    /// Build a [`Lz4Error::CorruptedSequence`].
    pub fn corrupted(offset: usize, reason: &'static str) -> Self {
        Self::CorruptedSequence { offset, reason }
    }
}
