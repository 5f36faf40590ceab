//! Configuration for hashing and encoding.
//!
//! - [`TreeConfig`] - Leaf chunk size (and therefore fan-out) of the tree hash
//! - [`ContentIdConfig`] - Single-block size limit of content identifiers

use crate::chunk::Digest;
use crate::error::HashError;

/// Default leaf chunk size (4 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024;

/// Smallest accepted chunk size; keeps the fan-out at two or more.
pub const MIN_CHUNK_SIZE: usize = 2 * Digest::SIZE;

/// Default single-block content limit (256 KiB).
pub const DEFAULT_MAX_CONTENT_SIZE: usize = 256 * 1024;

/// Configuration for the Merkle tree hash.
///
/// The chunk size is both the largest leaf and the payload size of an
/// internal node, so the fan-out is `chunk_size / 32` child digests.
/// It must be a power of two and at least [`MIN_CHUNK_SIZE`].
///
/// # Example
///
/// ```
/// use contentaddr::TreeConfig;
///
/// let config = TreeConfig::default();
/// assert_eq!(config.chunk_size(), 4096);
/// assert_eq!(config.fan_out(), 128);
///
/// let config = TreeConfig::new(1024)?;
/// assert_eq!(config.fan_out(), 32);
/// # Ok::<(), contentaddr::HashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeConfig {
    chunk_size: usize,
}

impl TreeConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if the size is zero, not a power of 2, or below
    /// [`MIN_CHUNK_SIZE`].
    pub fn new(chunk_size: usize) -> Result<Self, HashError> {
        if chunk_size == 0 {
            return Err(HashError::InvalidConfig {
                message: "chunk size must be non-zero",
            });
        }

        if !chunk_size.is_power_of_two() {
            return Err(HashError::InvalidConfig {
                message: "chunk size must be a power of 2",
            });
        }

        if chunk_size < MIN_CHUNK_SIZE {
            return Err(HashError::InvalidConfig {
                message: "chunk size must hold at least two digests",
            });
        }

        Ok(Self { chunk_size })
    }

    /// Sets the chunk size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`TreeConfig::validate`] to check it.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Returns the leaf chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the maximum number of children of an internal node.
    pub fn fan_out(&self) -> usize {
        self.chunk_size / Digest::SIZE
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), HashError> {
        Self::new(self.chunk_size).map(|_| ())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Configuration for content identifier encoding.
///
/// Identifiers are computed over a single block; content longer than
/// `max_content_size` is rejected instead of being split across blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentIdConfig {
    max_content_size: usize,
}

impl ContentIdConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if the limit is zero.
    pub fn new(max_content_size: usize) -> Result<Self, HashError> {
        if max_content_size == 0 {
            return Err(HashError::InvalidConfig {
                message: "max content size must be non-zero",
            });
        }

        Ok(Self { max_content_size })
    }

    /// Sets the maximum content size.
    pub fn with_max_content_size(mut self, size: usize) -> Self {
        self.max_content_size = size;
        self
    }

    /// Returns the maximum content size in bytes.
    pub fn max_content_size(&self) -> usize {
        self.max_content_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), HashError> {
        Self::new(self.max_content_size).map(|_| ())
    }
}

impl Default for ContentIdConfig {
    fn default() -> Self {
        Self {
            max_content_size: DEFAULT_MAX_CONTENT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_config_default() {
        let config = TreeConfig::default();
        assert_eq!(config.chunk_size(), 4096);
        assert_eq!(config.fan_out(), 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tree_config_valid() {
        let config = TreeConfig::new(64).unwrap();
        assert_eq!(config.fan_out(), 2);
    }

    #[test]
    fn test_tree_config_invalid() {
        assert!(TreeConfig::new(0).is_err());
        assert!(TreeConfig::new(4000).is_err());
        assert!(TreeConfig::new(32).is_err());
    }

    #[test]
    fn test_tree_config_builder_validate() {
        let config = TreeConfig::default().with_chunk_size(100);
        assert!(config.validate().is_err());

        let config = TreeConfig::default().with_chunk_size(8192);
        assert!(config.validate().is_ok());
        assert_eq!(config.fan_out(), 256);
    }

    #[test]
    fn test_content_id_config_default() {
        let config = ContentIdConfig::default();
        assert_eq!(config.max_content_size(), 262_144);
    }

    #[test]
    fn test_content_id_config_invalid_zero() {
        assert!(ContentIdConfig::new(0).is_err());
        assert!(
            ContentIdConfig::default()
                .with_max_content_size(0)
                .validate()
                .is_err()
        );
    }
}
