//! Byte and text encodings used by content identifiers.
//!
//! - [`varint`] - Unsigned LEB128 integers
//! - [`base58`] - Base-58 text rendering
//! - [`frame`] - Protobuf-style length-delimited frames

pub mod base58;
pub mod frame;
pub mod varint;
