//! Encrypted persistence of draw results.
//!
//! A saved draw is a single opaque file: a random 12-byte AES-GCM nonce
//! followed by the ciphertext (integrity tag included) of the assignment's
//! canonical JSON. The fresh nonce makes repeated encryptions of the same
//! draw produce different bytes; the GCM tag makes a wrong password and a
//! tampered file fail identically.

use std::fs;
use std::path::Path;

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::assignment::Assignment;
use crate::crypto::derive_key;
use crate::error::{ManitoError, Result};

/// AES-GCM nonce length in bytes.
const NONCE_LENGTH: usize = 12;

/// Encrypts and decrypts assignments under a password.
///
/// Holds the key-derivation parameters (salt and PBKDF2 iteration count)
/// from configuration. Keys themselves are derived per operation and never
/// stored.
#[derive(Debug, Clone)]
pub struct SecureStore {
    salt: Vec<u8>,
    iterations: u32,
}

impl SecureStore {
    pub fn new(salt: impl Into<Vec<u8>>, iterations: u32) -> Self {
        Self {
            salt: salt.into(),
            iterations,
        }
    }

    /// Encrypt an assignment under `password`.
    ///
    /// Each call draws a fresh random nonce, so two encryptions of the same
    /// assignment yield different blobs that both decrypt to it.
    pub fn encrypt(&self, assignment: &Assignment, password: &str) -> Result<Vec<u8>> {
        let plaintext = assignment.to_json()?;
        let key = derive_key(password, &self.salt, self.iterations)?;

        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| ManitoError::Crypto(format!("failed to initialize cipher: {}", e)))?;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let ciphertext = cipher
            .encrypt(&nonce, plaintext.as_slice())
            .map_err(|e| ManitoError::Crypto(format!("encryption failed: {}", e)))?;

        let mut blob = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        blob.extend_from_slice(nonce.as_slice());
        blob.extend_from_slice(&ciphertext);
        Ok(blob)
    }

    /// Decrypt a blob back into an assignment.
    ///
    /// # Errors
    ///
    /// Returns `ManitoError::Authentication` when the integrity check fails,
    /// covering both a wrong password and a corrupted or truncated blob. The
    /// two causes are indistinguishable and are never reported separately.
    pub fn decrypt(&self, blob: &[u8], password: &str) -> Result<Assignment> {
        if blob.len() < NONCE_LENGTH {
            return Err(ManitoError::Authentication);
        }

        let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LENGTH);
        let key = derive_key(password, &self.salt, self.iterations)?;

        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| ManitoError::Crypto(format!("failed to initialize cipher: {}", e)))?;

        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| ManitoError::Authentication)?;

        Assignment::from_json(&plaintext)
    }
}

/// Write a blob to `path`, replacing any previous file.
///
/// The write is a plain whole-file overwrite, not an atomic replace: a
/// failed save may leave the previous file or a partial one behind. Single
/// local user, no locking.
pub fn save(blob: &[u8], path: &Path) -> Result<()> {
    fs::write(path, blob)
        .map_err(|e| ManitoError::Io(format!("failed to write {}: {}", path.display(), e)))
}

/// Read a saved blob from `path`.
///
/// # Errors
///
/// Returns `ManitoError::NotFound` if no file exists at `path`, and
/// `ManitoError::Io` for any other read failure.
pub fn load(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ManitoError::NotFound(path.to_path_buf()))
        }
        Err(e) => Err(ManitoError::Io(format!(
            "failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}
