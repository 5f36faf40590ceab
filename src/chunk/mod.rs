//! Chunk types.
//!
//! - [`Chunk`] - Tree leaf with data, offset, digest
//! - [`Digest`] - 32-byte cryptographic hash

mod data;
mod digest;

pub use data::Chunk;
pub use digest::Digest;
