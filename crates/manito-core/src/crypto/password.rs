//! Password validation.
//!
//! Applied when a new password is chosen on draw, not when an existing blob
//! is opened (a weak legacy password must still be able to decrypt its file).

use crate::error::{ManitoError, Result};

/// Minimum password length in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a new password meets minimum requirements.
///
/// # Requirements
///
/// - At least 8 characters long
/// - Not empty or only whitespace
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(ManitoError::InvalidInput(
            "password cannot be empty".to_string(),
        ));
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ManitoError::InvalidInput(format!(
            "password must be at least {} characters (got {})",
            MIN_PASSWORD_LENGTH,
            password.len()
        )));
    }

    Ok(())
}
