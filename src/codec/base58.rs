//! Base-58 text encoding.
//!
//! The input is read as one big-endian unsigned integer and rendered in
//! the 58-symbol alphabet without `0`, `O`, `I` and `l`. Each leading zero
//! byte becomes a leading `'1'`, since a zero byte does not change the
//! integer's magnitude.

/// The base-58 alphabet, in digit order.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encodes bytes as base-58 text.
///
/// # Example
///
/// ```
/// use contentaddr::codec::base58;
///
/// assert_eq!(base58::encode(b"hello world"), "StV1DL6CwTryKyV");
/// assert_eq!(base58::encode(&[0x00, 0x01]), "12");
/// ```
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decodes base-58 text back into bytes.
///
/// Returns `None` if the text contains a symbol outside [`ALPHABET`].
pub fn decode(text: &str) -> Option<Vec<u8>> {
    bs58::decode(text)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .ok()
}
