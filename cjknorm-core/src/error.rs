//! Error types for splitting and width conversion

use thiserror::Error;

/// Errors raised while building delimiter sets, validating maps or converting text
#[derive(Error, Debug)]
pub enum CjkNormError {
    /// A caller-supplied argument has the wrong shape
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },

    /// A character map contains an unusable pair
    #[error("malformed map '{map}' at pair {index}: {reason}")]
    MalformedMap {
        /// Name of the offending map
        map: String,
        /// Position of the offending pair within the map
        index: usize,
        /// Why the pair was rejected
        reason: String,
    },

    /// A delimiter set cannot be turned into a pattern
    #[error("malformed delimiter pattern: {reason}")]
    MalformedPattern {
        /// Why the delimiter set was rejected
        reason: String,
    },

    /// Regex compilation failed
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    /// TOML configuration could not be parsed
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cjknorm operations
pub type Result<T> = std::result::Result<T, CjkNormError>;
