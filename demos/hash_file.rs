//! Prints the tree hash and content identifier of a file.
//!
//! Run with:
//!     cargo run --example hash_file -- <path>

use contentaddr::{HashError, TreeHasher, content_id};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: hash_file <path>")?;

    let data = std::fs::read(&path)?;
    println!("{}: {} bytes", path, data.len());

    let digest = TreeHasher::default().hash(&data);
    println!("tree hash:  {}", digest);

    match content_id(&data) {
        Ok(id) => println!("content id: content://{}", id),
        Err(HashError::InputTooLarge { actual, max }) => {
            println!("content id: unavailable ({} bytes exceeds one block of {})", actual, max)
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
