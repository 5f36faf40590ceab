//! Merkle tree hashing over fixed-size chunks.
//!
//! - [`TreeHasher`] - Root digests, built trees and leaf chunks (requires `tree-hash` feature)
//! - [`TreeNode`] - A node of a built tree
//! - [`segment_size`] - The branching rule that shapes the tree

#[cfg(feature = "tree-hash")]
mod engine;
mod layout;
mod node;

#[cfg(feature = "tree-hash")]
pub use engine::TreeHasher;
pub use layout::{child_count, height, segment_size};
pub use node::TreeNode;
