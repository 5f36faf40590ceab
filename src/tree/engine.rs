//! Merkle tree hashing engine.
//!
//! Every node, leaf or internal, is hashed as
//! `keccak256(le64(len) ++ payload)`, where `len` is the number of input
//! bytes the node covers. A leaf's payload is its raw bytes; an internal
//! node's payload is the concatenation of its children's digests.
//!
//! # Example
//!
//! ```
//! use contentaddr::{TreeConfig, TreeHasher};
//!
//! let hasher = TreeHasher::new(TreeConfig::default())?;
//! let digest = hasher.hash(b"");
//!
//! assert_eq!(
//!     digest.to_hex(),
//!     "011b4d03dd8c01f1049143cf9c4c817e4b167f1d1b83e5c6f0f10d89ba1e7bce"
//! );
//! # Ok::<(), contentaddr::HashError>(())
//! ```

use std::io::Read;

use bytes::Bytes;
use tracing::trace;

use super::layout::segment_size;
use super::node::TreeNode;
use crate::chunk::{Chunk, Digest};
use crate::config::TreeConfig;
use crate::error::HashError;
use crate::hash::KeccakHasher;

/// Computes Merkle tree digests over in-memory byte strings.
///
/// `TreeHasher` holds no state between calls; the whole input must be
/// resident in memory. Recursion depth is the tree height, which grows
/// with `log_{fan_out}(len / chunk_size)`.
///
/// # Example
///
/// ```
/// use contentaddr::{TreeConfig, TreeHasher};
///
/// let data = vec![0x5au8; 10_000];
/// let hasher = TreeHasher::new(TreeConfig::default())?;
///
/// let tree = hasher.build(&data);
/// assert_eq!(tree.children.len(), 3);
/// assert_eq!(tree.digest, hasher.hash(&data));
/// # Ok::<(), contentaddr::HashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeHasher {
    config: TreeConfig,
}

impl TreeHasher {
    /// Creates a new tree hasher with the given configuration.
    ///
    /// Returns [`HashError::InvalidConfig`] for a configuration that
    /// [`TreeConfig::validate`] rejects, such as one assembled with
    /// [`TreeConfig::with_chunk_size`].
    pub fn new(config: TreeConfig) -> Result<Self, HashError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration used by this hasher.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Computes the root digest of `data`.
    pub fn hash(&self, data: &[u8]) -> Digest {
        self.hash_range(data, 0)
    }

    /// Reads `reader` to the end and computes the root digest.
    ///
    /// The whole input is buffered in memory before hashing.
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> Result<Digest, HashError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(self.hash(&data))
    }

    /// Builds the full tree of `data`, keeping every node's digest.
    pub fn build(&self, data: &[u8]) -> TreeNode {
        self.build_range(data, 0)
    }

    /// Splits `data` into the leaf chunks of its tree.
    ///
    /// Leaves are consecutive `chunk_size` slices, the last possibly
    /// shorter. An empty input has exactly one, empty, leaf.
    ///
    /// # Example
    ///
    /// ```
    /// use contentaddr::TreeHasher;
    ///
    /// let chunks = TreeHasher::default().chunk_bytes(vec![1u8; 4097]);
    /// assert_eq!(chunks.len(), 2);
    /// assert_eq!(chunks[1].offset, 4096);
    /// assert_eq!(chunks[1].len(), 1);
    /// ```
    pub fn chunk_bytes(&self, data: impl Into<Bytes>) -> Vec<Chunk> {
        let data = data.into();
        if data.is_empty() {
            return vec![Chunk {
                hash: leaf_digest(&data),
                data,
                offset: 0,
            }];
        }

        let chunk_size = self.config.chunk_size();
        (0..data.len())
            .step_by(chunk_size)
            .map(|start| {
                let end = data.len().min(start + chunk_size);
                let chunk_data = data.slice(start..end);
                Chunk {
                    hash: leaf_digest(&chunk_data),
                    data: chunk_data,
                    offset: start as u64,
                }
            })
            .collect()
    }

    fn hash_range(&self, data: &[u8], offset: u64) -> Digest {
        if data.len() <= self.config.chunk_size() {
            return leaf_digest(data);
        }

        let segment = self.segment(data.len());
        let mut hasher = node_hasher(data.len());
        for (i, piece) in data.chunks(segment).enumerate() {
            let child = self.hash_range(piece, offset + (i * segment) as u64);
            hasher.update(child.as_bytes());
        }

        trace!(
            offset,
            len = data.len(),
            segment,
            children = data.len().div_ceil(segment),
            "hashed tree node"
        );
        hasher.finalize()
    }

    fn build_range(&self, data: &[u8], offset: u64) -> TreeNode {
        if data.len() <= self.config.chunk_size() {
            return TreeNode {
                offset,
                len: data.len() as u64,
                digest: leaf_digest(data),
                children: Vec::new(),
            };
        }

        let segment = self.segment(data.len());
        let children: Vec<TreeNode> = data
            .chunks(segment)
            .enumerate()
            .map(|(i, piece)| self.build_range(piece, offset + (i * segment) as u64))
            .collect();

        let mut hasher = node_hasher(data.len());
        for child in &children {
            hasher.update(child.digest.as_bytes());
        }

        TreeNode {
            offset,
            len: data.len() as u64,
            digest: hasher.finalize(),
            children,
        }
    }

    fn segment(&self, len: usize) -> usize {
        // Only called for len > chunk_size, where the segment is below len.
        segment_size(len as u64, self.config.chunk_size() as u64) as usize
    }
}

/// Starts a node hash with the little-endian length prefix.
fn node_hasher(len: usize) -> KeccakHasher {
    let mut hasher = KeccakHasher::new();
    hasher.update(&(len as u64).to_le_bytes());
    hasher
}

fn leaf_digest(data: &[u8]) -> Digest {
    let mut hasher = node_hasher(data.len());
    hasher.update(data);
    hasher.finalize()
}
