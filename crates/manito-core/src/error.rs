//! Error types for manito core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-facing messages and always returns to the menu loop.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for manito operations.
pub type Result<T> = std::result::Result<T, ManitoError>;

/// Core error type for manito operations.
#[derive(Debug, Error)]
pub enum ManitoError {
    /// Roster too small or malformed
    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    /// Saved draw file is missing
    #[error("No saved draw found at {}", .0.display())]
    NotFound(PathBuf),

    /// File read/write failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Wrong password or tampered ciphertext.
    ///
    /// The two causes are deliberately indistinguishable: the integrity tag
    /// fails identically for both, and the message never says which.
    #[error("wrong password or corrupted file")]
    Authentication,

    /// Key derivation or cipher setup error unrelated to authentication
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Invalid password, salt, or iteration parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Assignment encoding/decoding error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ManitoError {
    fn from(err: std::io::Error) -> Self {
        ManitoError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ManitoError {
    fn from(err: serde_json::Error) -> Self {
        ManitoError::Serialization(err.to_string())
    }
}
