//! The LZ4 block decoder.
//!
//! Walks the token stream emitted by [`crate::encode`] and reconstructs the
//! original bytes. Every step is bounds-checked against `input` and
//! `output` directly — there is no `unsafe`, no trusted length prefix, and
//! no assumption that the stream was produced by this crate's own encoder.

use lz4block_core::error::{Lz4Error, Result};

use crate::primitives::{
    copy_within_overlap, copy_within_plain, copy_within_wild16, copy_within_wild8, read_offset,
    read_var_length_unchecked, wild_copy, wild_copy16, wild_copy8,
};

/// Decompresses one LZ4 block from `input` into `output`.
///
/// `output` must already be sized to (or larger than) the known decompressed
/// length; this is the block format's contract — it carries no length
/// prefix of its own. Returns the number of bytes written, which is always
/// `output`'s capacity being filled exactly on a well-formed block, or
/// [`Lz4Error::CorruptedSequence`]/[`Lz4Error::InsufficientSpace`] on a
/// malformed or truncated one.
pub fn decompress_block(input: &[u8], output: &mut [u8]) -> Result<usize> {
    let in_len = input.len();
    let out_len = output.len();
    let mut in_pos = 0usize;
    let mut out_pos = 0usize;

    loop {
        if in_pos >= in_len {
            return Err(Lz4Error::corrupted(in_pos, "input ended before a token"));
        }
        let token = input[in_pos];
        in_pos += 1;

        let mut literals_length = (token >> 4) as usize;
        if literals_length == 15 {
            if in_pos > in_len {
                return Err(Lz4Error::corrupted(in_pos, "truncated literal-length extension"));
            }
            let (extra, consumed) = read_var_length_checked(input, in_pos)?;
            literals_length += extra;
            in_pos += consumed;
        }

        if out_pos + literals_length > out_len {
            return Err(Lz4Error::insufficient_space(
                literals_length,
                out_len - out_pos,
            ));
        }
        if in_pos + literals_length > in_len {
            return Err(Lz4Error::corrupted(in_pos, "literal run runs past end of input"));
        }

        copy_literals(input, in_pos, output, out_pos, literals_length);
        in_pos += literals_length;
        out_pos += literals_length;

        // A block always ends right after a literals run; if the input is
        // exhausted here, this was the final (match-free) sequence.
        if in_pos >= in_len {
            return Ok(out_pos);
        }

        if in_pos + 2 > in_len {
            return Err(Lz4Error::corrupted(in_pos, "truncated match offset"));
        }
        let offset = read_offset(input, in_pos) as usize;
        in_pos += 2;
        if offset == 0 {
            return Err(Lz4Error::corrupted(in_pos, "match offset is zero"));
        }
        if offset > out_pos {
            return Err(Lz4Error::corrupted(in_pos, "match offset points before start of output"));
        }

        let mut match_length = (token & 0x0F) as usize;
        if match_length == 15 {
            let (extra, consumed) = read_var_length_checked(input, in_pos)?;
            match_length += extra;
            in_pos += consumed;
        }
        match_length += 4;

        if out_pos + match_length > out_len {
            return Err(Lz4Error::insufficient_space(match_length, out_len - out_pos));
        }

        let src_pos = out_pos - offset;
        if match_length <= offset {
            copy_match_non_overlapping(output, out_pos, src_pos, match_length);
        } else {
            copy_within_overlap(output, out_pos, offset, match_length);
        }
        out_pos += match_length;
    }
}

/// Reads a base-255 continuation-byte run, failing instead of silently
/// reading past `input` if it never terminates within bounds.
fn read_var_length_checked(input: &[u8], pos: usize) -> Result<(usize, usize)> {
    let in_len = input.len();
    if pos >= in_len {
        return Err(Lz4Error::corrupted(pos, "unterminated length extension"));
    }
    let (value, consumed) = read_var_length_unchecked(input, pos, in_len);
    // The scan stops either on a byte < 255 (terminated) or on running out
    // of input at `limit` (unterminated) - the latter always ends on a 0xFF.
    if input[pos + consumed - 1] == 255 {
        return Err(Lz4Error::corrupted(pos, "unterminated length extension"));
    }
    Ok((value, consumed))
}

/// Copies the literal run using the widest wild-copy granularity the
/// remaining input and output slack allow, falling back to an exact copy
/// for the final, tightly-bounded run (the decoder's three-case literal
/// copy: fast 16-byte wild copy, safe 8-byte wild copy, exact tail copy).
fn copy_literals(input: &[u8], in_pos: usize, output: &mut [u8], out_pos: usize, n: usize) {
    let in_slack = input.len() - in_pos;
    let out_slack = output.len() - out_pos;
    if in_slack >= n + 16 && out_slack >= n + 16 {
        wild_copy16(output, out_pos, input, in_pos, n);
    } else if in_slack >= n + 8 && out_slack >= n + 8 {
        wild_copy8(output, out_pos, input, in_pos, n);
    } else {
        wild_copy(output, out_pos, input, in_pos, n);
    }
}

/// Copies a non-overlapping match (`match_length <= offset`) using the
/// widest chunked copy the output's remaining slack allows, falling back to
/// an exact `copy_within` for the terminal case.
fn copy_match_non_overlapping(output: &mut [u8], dst_pos: usize, src_pos: usize, n: usize) {
    let slack = output.len() - dst_pos;
    if slack >= n + 16 {
        copy_within_wild16(output, dst_pos, src_pos, n);
    } else if slack >= n + 8 {
        copy_within_wild8(output, dst_pos, src_pos, n);
    } else {
        copy_within_plain(output, dst_pos, src_pos, n);
    }
}
