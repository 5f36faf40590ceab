//! contentaddr
//!
//! Content addressing for in-memory byte strings.
//!
//! `contentaddr` computes two identifiers for a byte string:
//!
//! - a **tree hash**: a Keccak-256 Merkle tree over 4 KiB chunks where every
//!   node also commits to the number of bytes it covers
//! - a **content identifier**: the SHA-256 multihash of a single framed
//!   block, rendered as base-58 text
//!
//! The crate intentionally:
//! - does NOT stream (the whole input is resident in memory)
//! - does NOT generate or verify membership proofs
//! - does NOT split content across multiple blocks
//!
//! # Tree hash
//!
//! ```
//! use contentaddr::tree_hash;
//!
//! let digest = tree_hash(b"");
//! assert_eq!(
//!     digest.to_hex(),
//!     "011b4d03dd8c01f1049143cf9c4c817e4b167f1d1b83e5c6f0f10d89ba1e7bce"
//! );
//! ```
//!
//! # Content identifier
//!
//! ```
//! use contentaddr::content_id;
//!
//! let id = content_id(b"")?;
//! assert_eq!(id.to_string(), "QmbFMke1KXqnYyBBWxB74N4c5SBnJMVAiMNRcGu6x1AwQH");
//! # Ok::<(), contentaddr::HashError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod error;

pub mod cid;
pub mod codec;
pub mod hash;
pub mod tree;

//
// Public surface
//

pub use chunk::{Chunk, Digest};
pub use cid::ContentId;
pub use config::{
    ContentIdConfig, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_CONTENT_SIZE, MIN_CHUNK_SIZE, TreeConfig,
};
pub use error::HashError;

#[cfg(feature = "content-id")]
pub use cid::ContentIdEncoder;
#[cfg(feature = "tree-hash")]
pub use tree::TreeHasher;

/// Computes the tree hash of `data` with the default 4 KiB chunk size.
#[cfg(feature = "tree-hash")]
pub fn tree_hash(data: &[u8]) -> Digest {
    TreeHasher::default().hash(data)
}

/// Computes the content identifier of `data` with the default block limit.
///
/// Returns [`HashError::InputTooLarge`] for content that does not fit in a
/// single block.
#[cfg(feature = "content-id")]
pub fn content_id(data: &[u8]) -> Result<ContentId, HashError> {
    ContentIdEncoder::default().encode(data)
}
