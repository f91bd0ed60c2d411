//! # Manito Core
//!
//! Core library for manito - a secret-gift pair assignment tool with
//! password-encrypted storage.
//!
//! This crate provides the draw algorithm, the crypto, and the on-disk blob
//! handling independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **roster**: validated, ordered participant list
//! - **draw**: random derangement generation (no one gifts themselves)
//! - **assignment**: draw results and their canonical JSON encoding
//! - **crypto**: PBKDF2 key derivation and password validation
//! - **store**: AES-256-GCM encryption of assignments and blob file I/O

pub mod assignment;
pub mod crypto;
pub mod draw;
pub mod error;
pub mod roster;
pub mod store;

pub use assignment::{Assignment, Pair};
pub use error::{ManitoError, Result};
pub use roster::Roster;
pub use store::SecureStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
