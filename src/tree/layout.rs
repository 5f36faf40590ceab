//! Tree shape: how a byte range is split into child ranges.
//!
//! A range of at most `chunk_size` bytes is a leaf. A longer range is split
//! into consecutive segments of `segment_size(len)` bytes (the last one
//! possibly shorter), where the segment is the smallest
//! `chunk_size * fan_out^k` that leaves at most `fan_out` pieces.

use crate::chunk::Digest;

/// Returns the segment length used to split a range of `len` bytes.
///
/// Always a positive multiple of `chunk_size`. For `len <= chunk_size` the
/// result is `chunk_size` itself and the range is a leaf.
///
/// A chunk size that holds fewer than two digests is split as if its
/// fan-out were two, and a zero chunk size is treated as one byte, so the
/// result is below `len` whenever `len > chunk_size`.
///
/// # Example
///
/// ```
/// use contentaddr::tree::segment_size;
///
/// assert_eq!(segment_size(4097, 4096), 4096);
/// assert_eq!(segment_size(4096 * 128, 4096), 4096);
/// assert_eq!(segment_size(4096 * 128 + 1, 4096), 4096 * 128);
/// ```
pub fn segment_size(len: u64, chunk_size: u64) -> u64 {
    let fan_out = fan_out(chunk_size);
    let mut segment = chunk_size.max(1);
    // An overflowing product is larger than any u64 length.
    while let Some(next) = segment.checked_mul(fan_out) {
        if next >= len {
            break;
        }
        segment = next;
    }
    segment
}

/// Returns the number of children a range of `len` bytes splits into.
///
/// Zero for leaves.
pub fn child_count(len: u64, chunk_size: u64) -> u64 {
    if len <= chunk_size {
        return 0;
    }
    len.div_ceil(segment_size(len, chunk_size))
}

/// Returns the number of levels above the leaves for a range of `len` bytes.
pub fn height(len: u64, chunk_size: u64) -> u32 {
    if len <= chunk_size {
        return 0;
    }
    let fan_out = fan_out(chunk_size);
    let mut levels = 1;
    let mut segment = segment_size(len, chunk_size);
    while segment > chunk_size {
        segment /= fan_out;
        levels += 1;
    }
    levels
}

fn fan_out(chunk_size: u64) -> u64 {
    (chunk_size / Digest::SIZE as u64).max(2)
}
