//! Content identifiers for single-block content.
//!
//! - [`ContentId`] - 34-byte SHA-256 multihash, rendered in base-58
//! - [`ContentIdEncoder`] - Frames content and computes its identifier (requires `content-id` feature)

#[cfg(feature = "content-id")]
mod encoder;
mod id;

#[cfg(feature = "content-id")]
pub use encoder::{ContentIdEncoder, FILE_TYPE};
pub use id::{ContentId, MULTIHASH_DIGEST_LEN, MULTIHASH_SHA2_256};
