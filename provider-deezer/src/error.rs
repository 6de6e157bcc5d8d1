//! Error types for Deezer provider

use thiserror::Error;

/// Deezer provider errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeezerError {
    /// Master key is empty or only whitespace
    #[error("Master decryption key is blank")]
    BlankKey,

    /// Master key does not have the size Blowfish is keyed with
    #[error("Master decryption key must be {expected} bytes, got {actual}")]
    KeyLength { expected: usize, actual: usize },
}

/// Result type for Deezer operations
pub type Result<T> = std::result::Result<T, DeezerError>;
