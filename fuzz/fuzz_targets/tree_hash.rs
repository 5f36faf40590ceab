#![no_main]

use contentaddr::{TreeConfig, TreeHasher};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // Small chunk sizes give deep trees from short inputs
    for chunk_size in [64, 256, 4096] {
        let config = TreeConfig::new(chunk_size).unwrap();
        let hasher = TreeHasher::new(config).unwrap();
        let digest = hasher.hash(&data);

        // Verify: determinism
        assert_eq!(digest, hasher.hash(&data));

        // Verify: built tree agrees and respects the fan-out
        let tree = hasher.build(&data);
        assert_eq!(tree.digest, digest);
        let mut stack = vec![&tree];
        while let Some(node) = stack.pop() {
            assert!(node.children.len() <= config.fan_out());
            if node.is_leaf() {
                assert!(node.len as usize <= config.chunk_size());
            }
            stack.extend(node.children.iter());
        }

        // Verify: leaves cover the input in order
        let chunks = hasher.chunk_bytes(data.clone());
        let mut expected_offset = 0u64;
        for chunk in &chunks {
            assert_eq!(chunk.offset, expected_offset);
            expected_offset += chunk.len() as u64;
        }
        assert_eq!(expected_offset, data.len() as u64);
    }
});
