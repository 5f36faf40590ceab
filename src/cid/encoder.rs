//! Single-block content identifier encoder.
//!
//! The content is wrapped in a file frame
//!
//! ```text
//! payload = 08 02                      type: file
//!           12 varint(len) data        data (omitted when empty)
//!           18 varint(len)             filesize
//! block   = 0a varint(|payload|) payload
//! ```
//!
//! and the identifier is the SHA-256 multihash of `block`. Content is never
//! split across blocks; inputs above the configured limit are rejected.

use bytes::Bytes;
use tracing::{debug, trace};

use super::id::ContentId;
use crate::codec::frame::FrameWriter;
use crate::codec::varint;
use crate::config::ContentIdConfig;
use crate::error::HashError;
use crate::hash::Sha256Hasher;

/// File type value of the payload's type field.
pub const FILE_TYPE: u64 = 2;

const FIELD_TYPE: u8 = 1;
const FIELD_DATA: u8 = 2;
const FIELD_FILESIZE: u8 = 3;
const FIELD_BLOCK_DATA: u8 = 1;

/// Computes content identifiers for single-block content.
///
/// # Example
///
/// ```
/// use contentaddr::ContentIdEncoder;
///
/// let encoder = ContentIdEncoder::default();
/// let id = encoder.encode(b"hello world\n")?;
/// assert_eq!(id.to_string(), "QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o");
/// # Ok::<(), contentaddr::HashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentIdEncoder {
    config: ContentIdConfig,
}

impl ContentIdEncoder {
    /// Creates a new encoder with the given configuration.
    pub fn new(config: ContentIdConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this encoder.
    pub fn config(&self) -> &ContentIdConfig {
        &self.config
    }

    /// Builds the inner file frame of `data`.
    pub fn encode_payload(&self, data: &[u8]) -> Result<Bytes, HashError> {
        self.check_size(data)?;

        let len = data.len() as u64;
        let mut payload = FrameWriter::with_capacity(data.len() + 2 * varint::MAX_LEN + 4);
        payload.varint_field(FIELD_TYPE, FILE_TYPE);
        if !data.is_empty() {
            payload.bytes_field(FIELD_DATA, data);
        }
        payload.varint_field(FIELD_FILESIZE, len);

        Ok(payload.finish())
    }

    /// Builds the block whose digest identifies `data`.
    pub fn encode_block(&self, data: &[u8]) -> Result<Bytes, HashError> {
        let payload = self.encode_payload(data)?;

        let mut block = FrameWriter::with_capacity(payload.len() + varint::MAX_LEN + 1);
        block.bytes_field(FIELD_BLOCK_DATA, &payload);
        let block = block.finish();

        trace!(
            payload_len = payload.len(),
            block_len = block.len(),
            head = %hex::encode(&block[..block.len().min(16)]),
            "built block"
        );
        Ok(block)
    }

    /// Computes the content identifier of `data`.
    ///
    /// Returns [`HashError::InputTooLarge`] when `data` exceeds the
    /// single-block limit.
    pub fn encode(&self, data: &[u8]) -> Result<ContentId, HashError> {
        let block = self.encode_block(data)?;
        let id = ContentId::from_digest(Sha256Hasher::hash(&block));

        debug!(len = data.len(), id = %id, "computed content id");
        Ok(id)
    }

    fn check_size(&self, data: &[u8]) -> Result<(), HashError> {
        let max = self.config.max_content_size();
        if data.len() > max {
            return Err(HashError::InputTooLarge {
                actual: data.len(),
                max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_abc() {
        let payload = ContentIdEncoder::default().encode_payload(b"abc").unwrap();
        assert_eq!(
            &payload[..],
            &[0x08, 0x02, 0x12, 0x03, b'a', b'b', b'c', 0x18, 0x03]
        );
    }

    #[test]
    fn test_block_abc() {
        let block = ContentIdEncoder::default().encode_block(b"abc").unwrap();
        assert_eq!(&block[..2], &[0x0a, 0x09]);
        assert_eq!(block.len(), 11);
    }

    #[test]
    fn test_empty_payload_omits_data_field() {
        let encoder = ContentIdEncoder::default();
        let payload = encoder.encode_payload(b"").unwrap();
        assert_eq!(&payload[..], &[0x08, 0x02, 0x18, 0x00]);

        let block = encoder.encode_block(b"").unwrap();
        assert_eq!(&block[..], &[0x0a, 0x04, 0x08, 0x02, 0x18, 0x00]);
    }

    #[test]
    fn test_digest_is_sha256_of_block() {
        let encoder = ContentIdEncoder::default();
        let block = encoder.encode_block(b"abc").unwrap();
        let id = encoder.encode(b"abc").unwrap();
        assert_eq!(id.digest(), Sha256Hasher::hash(&block));
        assert_eq!(&id.as_bytes()[..2], &[0x12, 0x20]);
    }

    #[test]
    fn test_multi_byte_lengths() {
        let data = vec![0x61u8; 300];
        let payload = ContentIdEncoder::default().encode_payload(&data).unwrap();
        assert_eq!(&payload[..5], &[0x08, 0x02, 0x12, 0xac, 0x02]);
        assert_eq!(&payload[payload.len() - 3..], &[0x18, 0xac, 0x02]);

        let block = ContentIdEncoder::default().encode_block(&data).unwrap();
        assert_eq!(&block[..3], &[0x0a, 0xb4, 0x02]);
    }

    #[test]
    fn test_rejects_content_over_block_limit() {
        let encoder = ContentIdEncoder::new(ContentIdConfig::new(8).unwrap());
        assert!(encoder.encode(&[0u8; 8]).is_ok());

        match encoder.encode(&[0u8; 9]) {
            Err(HashError::InputTooLarge { actual, max }) => {
                assert_eq!(actual, 9);
                assert_eq!(max, 8);
            }
            other => panic!("expected InputTooLarge, got {:?}", other),
        }
    }
}
