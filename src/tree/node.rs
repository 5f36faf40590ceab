//! Materialised hash tree nodes.

use crate::chunk::Digest;

/// A node of a built hash tree.
///
/// Leaves have no children. Every node's digest covers its logical length
/// (`len`), never the length of its hashed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Start of the covered range in the input.
    pub offset: u64,

    /// Number of input bytes the node covers.
    pub len: u64,

    /// Digest of the node.
    pub digest: Digest,

    /// Child nodes in input order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Returns true if this node is a leaf chunk.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the covered range.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.offset + self.len
    }

    /// Returns the number of edges on the longest path down to a leaf.
    pub fn depth(&self) -> u32 {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns the number of leaves below (or at) this node.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children.iter().map(TreeNode::leaf_count).sum()
    }

    /// Visits the leaves left to right.
    pub fn leaves(&self) -> Vec<&TreeNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                out.push(node);
            } else {
                stack.extend(node.children.iter().rev());
            }
        }
        out
    }
}
