//! Pure Rust LZ4 block codec.
//!
//! This crate implements LZ4's raw *block* format only — a single
//! self-contained token stream with no frame header, no checksum, and no
//! multi-block chaining. It is the format embedded by higher-level
//! protocols that already carry their own framing and length information.
//!
//! # Example
//!
//! ```
//! use lz4block::{compress, decompress_block, compress_bound};
//!
//! let data = b"Hello, World! Hello, World!";
//! let compressed = compress(data, 1).unwrap();
//!
//! let mut decompressed = vec![0u8; data.len()];
//! let n = decompress_block(&compressed, &mut decompressed).unwrap();
//! assert_eq!(&decompressed[..n], data);
//! ```

mod decode;
mod encode;
mod hash;
mod primitives;

pub use decode::decompress_block;
pub use encode::{compress_bound, CompressContext};

use lz4block_core::error::Result;

/// Compresses `input` at the given level (`0..=9`) into a freshly allocated
/// buffer sized by [`compress_bound`].
///
/// This is the convenience entry point for one-shot use; callers compressing
/// many blocks should keep a [`CompressContext`] around instead, to reuse
/// its hash table allocation across calls.
pub fn compress(input: &[u8], level: i32) -> Result<Vec<u8>> {
    let mut ctx = CompressContext::new();
    let mut output = vec![0u8; compress_bound(input.len())];
    let written = ctx.compress_block(input, &mut output, level)?;
    output.truncate(written);
    Ok(output)
}

/// Decompresses one LZ4 block into a freshly allocated buffer of exactly
/// `decompressed_len` bytes.
///
/// `decompressed_len` must be known ahead of time; the block format carries
/// no length of its own.
pub fn decompress(input: &[u8], decompressed_len: usize) -> Result<Vec<u8>> {
    let mut output = vec![0u8; decompressed_len];
    let written = decompress_block(input, &mut output)?;
    output.truncate(written);
    Ok(output)
}
