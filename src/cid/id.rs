//! The ContentId type - a SHA-256 multihash with base-58 rendering.

use std::fmt;
use std::str::FromStr;

use crate::chunk::Digest;
use crate::codec::base58;
use crate::error::HashError;

/// Multihash code of SHA-256.
pub const MULTIHASH_SHA2_256: u8 = 0x12;

/// Multihash length byte of a 32-byte digest.
pub const MULTIHASH_DIGEST_LEN: u8 = Digest::SIZE as u8;

const ID_LEN: usize = 2 + Digest::SIZE;

/// A content identifier: `[0x12, 0x20]` followed by a 32-byte SHA-256 digest.
///
/// Displayed as base-58 text. Callers prepend a scheme such as `content://`
/// when they need a URI.
///
/// # Example
///
/// ```
/// use contentaddr::ContentId;
///
/// let id: ContentId = "QmbFMke1KXqnYyBBWxB74N4c5SBnJMVAiMNRcGu6x1AwQH".parse()?;
/// assert_eq!(id.as_bytes()[..2], [0x12, 0x20]);
/// assert_eq!(id.to_string(), "QmbFMke1KXqnYyBBWxB74N4c5SBnJMVAiMNRcGu6x1AwQH");
/// # Ok::<(), contentaddr::HashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentId([u8; ID_LEN]);

impl ContentId {
    /// The size of the identifier in bytes.
    pub const SIZE: usize = ID_LEN;

    /// Wraps a SHA-256 digest.
    pub fn from_digest(digest: Digest) -> Self {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0] = MULTIHASH_SHA2_256;
        bytes[1] = MULTIHASH_DIGEST_LEN;
        bytes[2..].copy_from_slice(digest.as_bytes());
        Self(bytes)
    }

    /// Parses the 34-byte multihash form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HashError> {
        let bytes: [u8; ID_LEN] =
            bytes.try_into().map_err(|_| HashError::InvalidContentId {
                message: "multihash must be 34 bytes",
            })?;

        if bytes[0] != MULTIHASH_SHA2_256 || bytes[1] != MULTIHASH_DIGEST_LEN {
            return Err(HashError::InvalidContentId {
                message: "multihash is not a 32-byte sha2-256 digest",
            });
        }

        Ok(Self(bytes))
    }

    /// Returns the multihash bytes.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Returns the SHA-256 digest of the block.
    pub fn digest(&self) -> Digest {
        let mut bytes = [0u8; Digest::SIZE];
        bytes.copy_from_slice(&self.0[2..]);
        Digest::new(bytes)
    }

    /// Returns the base-58 text form.
    pub fn to_base58(&self) -> String {
        base58::encode(&self.0)
    }
}

impl AsRef<[u8]> for ContentId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for ContentId {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = base58::decode(s).ok_or(HashError::InvalidContentId {
            message: "not base-58 text",
        })?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digest() {
        let id = ContentId::from_digest(Digest::new([0xAB; 32]));
        assert_eq!(id.as_bytes()[0], 0x12);
        assert_eq!(id.as_bytes()[1], 0x20);
        assert_eq!(id.digest(), Digest::new([0xAB; 32]));
    }

    #[test]
    fn test_from_bytes_rejects_bad_length() {
        assert!(ContentId::from_bytes(&[0x12, 0x20]).is_err());
        assert!(ContentId::from_bytes(&[0u8; 35]).is_err());
    }

    #[test]
    fn test_from_bytes_rejects_bad_prefix() {
        let mut bytes = [0u8; 34];
        bytes[0] = 0x13;
        bytes[1] = 0x20;
        assert!(ContentId::from_bytes(&bytes).is_err());

        bytes[0] = 0x12;
        bytes[1] = 0x40;
        assert!(ContentId::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_text_roundtrip() {
        let id = ContentId::from_digest(Digest::new([7u8; 32]));
        let text = id.to_string();
        assert!(text.starts_with("Qm"));
        assert_eq!(text.parse::<ContentId>().unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_foreign_symbols() {
        let err = "Qm0".parse::<ContentId>().unwrap_err();
        assert!(err.to_string().contains("base-58"));
    }
}
