//! Error types for devident-core

/// Result type alias for devident-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Database construction errors
///
/// Lookups never fail; these only arise while building a table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Key is not a valid lookup key
    #[error("Invalid lookup key: {0:?}")]
    InvalidKey(String),

    /// Key already present in the table
    #[error("Duplicate lookup key: {0}")]
    DuplicateKey(String),

    /// Table line is not a `key = record` entry
    #[error("Malformed entry on line {line}: {content:?}")]
    MalformedEntry {
        line: usize,
        content: String,
    },
}
