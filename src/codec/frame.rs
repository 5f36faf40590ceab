//! Length-delimited protobuf-style frames.
//!
//! A field is a key byte `(field << 3) | wire_type` followed by either a
//! varint value or a varint length and the raw bytes. Only the two wire
//! types needed for single-block content identifiers are supported.

use bytes::{BufMut, Bytes, BytesMut};

use super::varint;

/// Wire type of a varint field.
pub const WIRE_VARINT: u8 = 0;

/// Wire type of a length-delimited field.
pub const WIRE_LEN: u8 = 2;

/// Returns the key byte for a field number and wire type.
///
/// Field numbers are limited to 1..=15 so the key fits in one byte.
pub const fn field_key(field: u8, wire_type: u8) -> u8 {
    (field << 3) | wire_type
}

/// Builds a frame field by field.
///
/// # Example
///
/// ```
/// use contentaddr::codec::frame::FrameWriter;
///
/// let mut frame = FrameWriter::new();
/// frame.varint_field(1, 2);
/// frame.bytes_field(2, b"abc");
/// assert_eq!(&frame.finish()[..], &[0x08, 0x02, 0x12, 0x03, b'a', b'b', b'c']);
/// ```
#[derive(Debug, Default)]
pub struct FrameWriter {
    buf: BytesMut,
}

impl FrameWriter {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
        }
    }

    /// Creates an empty frame with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Appends a varint field.
    pub fn varint_field(&mut self, field: u8, value: u64) -> &mut Self {
        debug_assert!((1..16).contains(&field));
        self.buf.put_u8(field_key(field, WIRE_VARINT));
        varint::encode_into(value, &mut self.buf);
        self
    }

    /// Appends a length-delimited field.
    pub fn bytes_field(&mut self, field: u8, data: &[u8]) -> &mut Self {
        debug_assert!((1..16).contains(&field));
        self.buf.put_u8(field_key(field, WIRE_LEN));
        varint::encode_into(data.len() as u64, &mut self.buf);
        self.buf.put_slice(data);
        self
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no field has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finishes the frame.
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys() {
        assert_eq!(field_key(1, WIRE_VARINT), 0x08);
        assert_eq!(field_key(2, WIRE_LEN), 0x12);
        assert_eq!(field_key(3, WIRE_VARINT), 0x18);
        assert_eq!(field_key(1, WIRE_LEN), 0x0a);
    }

    #[test]
    fn test_empty_frame() {
        let frame = FrameWriter::new();
        assert!(frame.is_empty());
        assert!(frame.finish().is_empty());
    }

    #[test]
    fn test_varint_field() {
        let mut frame = FrameWriter::new();
        frame.varint_field(3, 300);
        assert_eq!(&frame.finish()[..], &[0x18, 0xac, 0x02]);
    }

    #[test]
    fn test_bytes_field_empty_payload() {
        let mut frame = FrameWriter::new();
        frame.bytes_field(1, &[]);
        assert_eq!(&frame.finish()[..], &[0x0a, 0x00]);
    }

    #[test]
    fn test_chained_fields() {
        let mut frame = FrameWriter::with_capacity(16);
        frame.varint_field(1, 2).bytes_field(2, b"xy").varint_field(3, 2);
        assert_eq!(frame.len(), 8);
        assert_eq!(
            &frame.finish()[..],
            &[0x08, 0x02, 0x12, 0x02, b'x', b'y', 0x18, 0x02]
        );
    }

    #[test]
    fn test_long_payload_length_prefix() {
        let payload = vec![0u8; 200];
        let mut frame = FrameWriter::new();
        frame.bytes_field(2, &payload);
        let bytes = frame.finish();
        assert_eq!(&bytes[..3], &[0x12, 0xc8, 0x01]);
        assert_eq!(bytes.len(), 3 + 200);
    }
}
