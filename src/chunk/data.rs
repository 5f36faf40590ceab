//! The Chunk type - a leaf of the hash tree.

use bytes::Bytes;
use std::fmt;

use super::Digest;

/// A leaf of the hash tree together with its digest.
///
/// `data` is a zero-copy slice of the hashed input and never exceeds the
/// configured chunk size. `hash` is the leaf digest, which covers the
/// little-endian length prefix as well as the bytes.
///
/// # Example
///
/// ```
/// use contentaddr::{Chunk, Digest};
/// use bytes::Bytes;
///
/// let chunk = Chunk {
///     data: Bytes::from_static(b"hello world"),
///     offset: 4096,
///     hash: Digest::new([0u8; 32]),
/// };
///
/// assert_eq!(chunk.len(), 11);
/// assert_eq!(chunk.range(), 4096..4107);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk data.
    pub data: Bytes,

    /// The offset in the hashed input.
    pub offset: u64,

    /// The leaf digest of this chunk.
    pub hash: Digest,
}

impl Chunk {
    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    ///
    /// Only the single leaf of an empty input is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the start offset.
    pub fn start(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the chunk as a range.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.start()..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk({} bytes @ {}, hash={})",
            self.len(),
            self.offset,
            self.hash
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(data: &'static [u8], offset: u64) -> Chunk {
        Chunk {
            data: Bytes::from_static(data),
            offset,
            hash: Digest::new([0u8; 32]),
        }
    }

    #[test]
    fn test_len() {
        let c = chunk(b"hello", 0);
        assert_eq!(c.len(), 5);
        assert!(!c.is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(chunk(b"", 0).is_empty());
    }

    #[test]
    fn test_range() {
        let c = chunk(b"hello", 100);
        assert_eq!(c.start(), 100);
        assert_eq!(c.end(), 105);
        assert_eq!(c.range(), 100..105);
    }

    #[test]
    fn test_display() {
        let s = chunk(b"hello", 100).to_string();
        assert!(s.contains("5 bytes"));
        assert!(s.contains("@ 100"));
        assert!(s.contains(&"00".repeat(32)));
    }

    #[test]
    fn test_into_data() {
        assert_eq!(chunk(b"abc", 0).into_data(), Bytes::from_static(b"abc"));
    }
}
