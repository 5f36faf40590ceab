#![no_main]

use contentaddr::codec::{base58, varint};
use contentaddr::{ContentId, ContentIdEncoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let encoder = ContentIdEncoder::default();

    match encoder.encode(&data) {
        Ok(id) => {
            // Verify: text form parses back
            let parsed: ContentId = id.to_string().parse().unwrap();
            assert_eq!(parsed, id);

            // Verify: payload ends with the filesize field
            let payload = encoder.encode_payload(&data).unwrap();
            let tail = varint::encode(data.len() as u64);
            assert_eq!(payload[payload.len() - tail.len() - 1], 0x18);
        }
        Err(_) => assert!(data.len() > encoder.config().max_content_size()),
    }

    // Verify: base58 and varint decoders never panic on arbitrary input
    if let Ok(text) = std::str::from_utf8(&data) {
        if let Some(bytes) = base58::decode(text) {
            assert_eq!(base58::encode(&bytes), text);
        }
    }
    let _ = varint::decode(&data);
});
