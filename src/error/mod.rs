//! Error type shared by the tree hasher and the content identifier encoder.

use std::fmt;
use std::io;

/// Errors that can occur while hashing or encoding content.
///
/// Tree hashing over an in-memory slice never fails. Errors come from
/// reading input, oversized single-block content, rejected configuration
/// and malformed content identifiers.
#[derive(Debug)]
pub enum HashError {
    /// Reading the input failed.
    Io(io::Error),

    /// The content does not fit in a single block.
    InputTooLarge {
        /// Content length in bytes.
        actual: usize,
        /// Configured block limit in bytes.
        max: usize,
    },

    /// A configuration value was rejected.
    InvalidConfig {
        /// The rule the value broke.
        message: &'static str,
    },

    /// A textual or binary content identifier could not be parsed.
    InvalidContentId {
        /// What was wrong with it.
        message: &'static str,
    },
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::Io(e) => write!(f, "failed to read input: {}", e),
            HashError::InputTooLarge { actual, max } => write!(
                f,
                "{} bytes of content exceed the {} byte block limit",
                actual, max
            ),
            HashError::InvalidConfig { message } => write!(f, "rejected config: {}", message),
            HashError::InvalidContentId { message } => {
                write!(f, "malformed content id: {}", message)
            }
        }
    }
}

impl std::error::Error for HashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HashError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HashError {
    fn from(e: io::Error) -> Self {
        HashError::Io(e)
    }
}
