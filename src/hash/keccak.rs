//! Keccak-256 hashing for tree nodes.

use sha3::{Digest as _, Keccak256};

use crate::chunk::Digest;

/// A hasher that computes Keccak-256 digests.
///
/// This is the original Keccak padding as used by Ethereum, not the
/// standardised SHA3-256.
#[derive(Debug, Clone, Default)]
pub struct KeccakHasher {
    state: Keccak256,
}

impl KeccakHasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: Keccak256::new(),
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
        self.state = Keccak256::new();
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(data: &[u8]) -> Digest {
        let out: [u8; 32] = Keccak256::digest(data).into();
        Digest::new(out)
    }
}
