//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! The draw file format fixes the KDF: 32-byte keys from PBKDF2 over the
//! UTF-8 password and a configured salt, with a configurable iteration
//! count. Deterministic by design so the same password always reopens the
//! same blob.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{ManitoError, Result};

/// Iteration floor from the file format; lower counts are a config error.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Minimum salt length in bytes.
const MIN_SALT_LENGTH: usize = 8;

/// Length of derived key in bytes (256 bits for AES-256-GCM).
const KEY_LENGTH: usize = 32;

/// A symmetric key derived from a password.
///
/// Key material is zeroized from memory on drop and never persisted; it is
/// recomputed from the password for every encrypt/decrypt operation.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Raw key bytes. Use only for an immediate cipher operation; never
    /// store or log this value.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a password.
///
/// Same password + salt + iterations always yields the same key. The salt is
/// a deployment-wide constant from configuration, not per-blob: deployments
/// sharing the default salt share precomputation exposure, which is an
/// accepted trade-off here.
///
/// # Errors
///
/// Returns `ManitoError::InvalidInput` if the password is empty, the salt is
/// shorter than 8 bytes, or the iteration count is zero.
pub fn derive_key(password: &str, salt: &[u8], iterations: u32) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(ManitoError::InvalidInput(
            "password cannot be empty".to_string(),
        ));
    }

    if salt.len() < MIN_SALT_LENGTH {
        return Err(ManitoError::InvalidInput(format!(
            "salt must be at least {} bytes (got {})",
            MIN_SALT_LENGTH,
            salt.len()
        )));
    }

    if iterations == 0 {
        return Err(ManitoError::InvalidInput(
            "iteration count must be positive".to_string(),
        ));
    }

    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key_bytes);

    Ok(DerivedKey::from_bytes(key_bytes))
}
