//! Unsigned LEB128 varints.
//!
//! Seven bits per byte, least-significant group first. Every byte except
//! the last carries the continuation bit `0x80`.

use bytes::BufMut;
use unsigned_varint::{decode as uvi_decode, encode as uvi_encode};

/// Maximum encoded length of a `u64`.
pub const MAX_LEN: usize = 10;

/// Encodes `n` as a varint.
///
/// # Example
///
/// ```
/// use contentaddr::codec::varint;
///
/// assert_eq!(varint::encode(0), [0x00]);
/// assert_eq!(varint::encode(300), [0xac, 0x02]);
/// ```
pub fn encode(n: u64) -> Vec<u8> {
    let mut buf = uvi_encode::u64_buffer();
    uvi_encode::u64(n, &mut buf).to_vec()
}

/// Appends the varint encoding of `n` to `buf`.
pub fn encode_into<B: BufMut>(n: u64, buf: &mut B) {
    let mut scratch = uvi_encode::u64_buffer();
    buf.put_slice(uvi_encode::u64(n, &mut scratch));
}

/// Returns the number of bytes `encode(n)` produces.
pub fn encoded_len(n: u64) -> usize {
    let bits = 64 - (n | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Decodes a varint from the front of `data`.
///
/// Returns the value and the number of bytes consumed, or `None` if the
/// input ends before the last byte, the encoding is not minimal, or the
/// value does not fit in 64 bits.
pub fn decode(data: &[u8]) -> Option<(u64, usize)> {
    let (value, rest) = uvi_decode::u64(data).ok()?;
    let len = data.len() - rest.len();
    // The tenth byte only has room for bit 63.
    if len == MAX_LEN && data[MAX_LEN - 1] > 1 {
        return None;
    }
    Some((value, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_small() {
        assert_eq!(encode(0), [0x00]);
        assert_eq!(encode(1), [0x01]);
        assert_eq!(encode(127), [0x7f]);
    }

    #[test]
    fn test_encode_multi_byte() {
        assert_eq!(encode(128), [0x80, 0x01]);
        assert_eq!(encode(300), [0xac, 0x02]);
        assert_eq!(encode(16384), [0x80, 0x80, 0x01]);
    }

    #[test]
    fn test_encode_max() {
        let bytes = encode(u64::MAX);
        assert_eq!(bytes.len(), MAX_LEN);
        assert_eq!(bytes[MAX_LEN - 1], 0x01);
        assert!(bytes[..MAX_LEN - 1].iter().all(|&b| b == 0xff));
    }

    #[test]
    fn test_encoded_len() {
        for n in [0, 1, 127, 128, 16383, 16384, u64::MAX >> 1, u64::MAX] {
            assert_eq!(encoded_len(n), encode(n).len(), "n = {}", n);
        }
    }

    #[test]
    fn test_decode_stops_at_last_byte() {
        assert_eq!(decode(&[0xac, 0x02, 0xff]), Some((300, 2)));
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(decode(&[]), None);
        assert_eq!(decode(&[0x80]), None);
        assert_eq!(decode(&[0xff, 0xff]), None);
    }

    #[test]
    fn test_decode_overflow() {
        let mut too_big = vec![0xff; 9];
        too_big.push(0x02);
        assert_eq!(decode(&too_big), None);

        let eleven = [0x80u8; 11];
        assert_eq!(decode(&eleven), None);
    }

    #[test]
    fn test_decode_rejects_padded_encoding() {
        assert_eq!(decode(&[0x80, 0x00]), None);
        assert_eq!(decode(&[0x81, 0x00]), None);
    }

    #[test]
    fn test_encode_into_appends() {
        let mut buf = vec![0xaa];
        encode_into(300, &mut buf);
        encode_into(1, &mut buf);
        assert_eq!(buf, [0xaa, 0xac, 0x02, 0x01]);
    }

    #[test]
    fn test_roundtrip_edges() {
        for n in [0, 1, 127, 128, 16384, 1 << 35, u64::MAX] {
            let bytes = encode(n);
            assert_eq!(decode(&bytes), Some((n, bytes.len())));
        }
    }
}
