//! Cryptographic primitives: key derivation and password validation.

pub mod key;
pub mod password;

pub use key::{derive_key, DerivedKey, DEFAULT_ITERATIONS};
pub use password::validate_password;
