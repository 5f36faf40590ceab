//! SHA-256 hashing for content identifier blocks.

use sha2::{Digest as _, Sha256};

use crate::chunk::Digest;

/// A hasher that computes SHA-256 digests.
#[derive(Debug, Clone, Default)]
pub struct Sha256Hasher {
    state: Sha256,
}

impl Sha256Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: Sha256::new(),
        }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes and returns the digest.
    pub fn finalize(&self) -> Digest {
        let out: [u8; 32] = self.state.clone().finalize().into();
        Digest::new(out)
    }

    /// Resets the hasher to its initial state.
    pub fn reset(&mut self) {
        self.state = Sha256::new();
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(data: &[u8]) -> Digest {
        let out: [u8; 32] = Sha256::digest(data).into();
        Digest::new(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_abc() {
        assert_eq!(
            Sha256Hasher::hash(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_incremental_hashing() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"a");
        hasher.update(b"bc");
        assert_eq!(hasher.finalize(), Sha256Hasher::hash(b"abc"));
    }

    #[test]
    fn test_reset() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"junk");
        hasher.reset();
        hasher.update(b"abc");
        assert_eq!(hasher.finalize(), Sha256Hasher::hash(b"abc"));
    }
}
