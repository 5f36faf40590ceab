//! Digest primitives.
//!
//! Thin incremental wrappers over the two hash functions the crate builds on:
//!
//! - [`KeccakHasher`] - Keccak-256, used by the tree hash (requires `tree-hash` feature)
//! - [`Sha256Hasher`] - SHA-256, used by content identifiers (requires `content-id` feature)

#[cfg(feature = "tree-hash")]
mod keccak;
#[cfg(feature = "content-id")]
mod sha256;

#[cfg(feature = "tree-hash")]
pub use keccak::KeccakHasher;
#[cfg(feature = "content-id")]
pub use sha256::Sha256Hasher;
