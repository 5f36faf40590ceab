//! Hashes a few in-memory inputs both ways.
//!
//! Run with:
//!     RUST_LOG=contentaddr=trace cargo run --example hash_bytes

use contentaddr::{TreeHasher, content_id, tree_hash};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs: [&[u8]; 3] = [b"", b"abc", b"hello world\n"];
    for input in inputs {
        println!("input {:?}", String::from_utf8_lossy(input));
        println!("  tree hash:  {}", tree_hash(input));
        println!("  content id: content://{}", content_id(input)?);
    }

    // A multi-level tree: 1 MiB splits into two 512 KiB subtrees
    let data = vec![0u8; 1024 * 1024];
    let tree = TreeHasher::default().build(&data);
    println!(
        "\n{} bytes: {} leaves, depth {}, root {}",
        data.len(),
        tree.leaf_count(),
        tree.depth(),
        tree.digest
    );
    for child in &tree.children {
        println!(
            "  [{}..{}) {} children, {}",
            child.offset,
            child.offset + child.len,
            child.children.len(),
            &child.digest.to_hex()[..16]
        );
    }

    Ok(())
}
