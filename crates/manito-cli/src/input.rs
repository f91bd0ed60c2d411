//! Password and name input helpers.
//!
//! Passwords are read without echo via dialoguer, which owns the terminal
//! raw-mode toggling and restores it on every exit path. The MANITO_PASSWORD
//! environment variable bypasses the prompt for scripting and tests.

use std::io::IsTerminal;

use dialoguer::{Password, Select};

use manito_core::crypto::validate_password;
use manito_core::Roster;

/// Prompt for the password of an existing draw, or read MANITO_PASSWORD.
///
/// No strength validation here: whatever password sealed the blob must be
/// able to open it.
pub fn prompt_password() -> anyhow::Result<String> {
    if let Ok(value) = std::env::var("MANITO_PASSWORD") {
        if !value.trim().is_empty() {
            return Ok(value);
        }
    }
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "No password provided and no TTY available. Set MANITO_PASSWORD."
        ));
    }
    Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Prompt for a new password with confirmation (for a fresh draw), or read
/// MANITO_PASSWORD. Either way the password must meet minimum strength.
pub fn prompt_new_password() -> anyhow::Result<String> {
    if let Ok(value) = std::env::var("MANITO_PASSWORD") {
        if !value.trim().is_empty() {
            validate_password(&value)
                .map_err(|e| anyhow::anyhow!("Password does not meet requirements: {}", e))?;
            return Ok(value);
        }
    }
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "No password provided and no TTY available. Set MANITO_PASSWORD."
        ));
    }
    loop {
        let password = Password::new()
            .with_prompt("Set a password for this draw")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
        if let Err(err) = validate_password(&password) {
            eprintln!("Password does not meet requirements: {}", err);
            continue;
        }
        return Ok(password);
    }
}

/// Select the caller's own name from the roster.
///
/// The selection list doubles as the roster display, and membership holds by
/// construction.
pub fn prompt_own_name(roster: &Roster) -> anyhow::Result<String> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive name selection requires a TTY. Pass the name as an argument."
        ));
    }
    let names = roster.names();
    let index = Select::new()
        .with_prompt("Select your name")
        .items(names)
        .default(0)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read selection: {}", e))?;
    Ok(names[index].clone())
}
