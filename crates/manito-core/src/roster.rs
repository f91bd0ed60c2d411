//! Participant roster.
//!
//! The roster is an ordered list of unique names supplied by configuration
//! at startup. Order is stable and defines the indices the draw shuffles
//! over, so two runs against the same config see the same positions.

use std::collections::HashSet;

use crate::error::{ManitoError, Result};

/// Minimum number of participants for a draw to make sense.
const MIN_PARTICIPANTS: usize = 2;

/// An ordered roster of unique participant names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Build a roster from a list of names.
    ///
    /// # Errors
    ///
    /// Returns `ManitoError::InvalidRoster` if:
    /// - Fewer than 2 names are given
    /// - Any name is empty or only whitespace
    /// - Any name appears more than once
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.len() < MIN_PARTICIPANTS {
            return Err(ManitoError::InvalidRoster(format!(
                "need at least {} participants (got {})",
                MIN_PARTICIPANTS,
                names.len()
            )));
        }

        let mut seen = HashSet::new();
        for name in &names {
            if name.trim().is_empty() {
                return Err(ManitoError::InvalidRoster(
                    "names cannot be empty".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(ManitoError::InvalidRoster(format!(
                    "duplicate name: {}",
                    name
                )));
            }
        }

        Ok(Self { names })
    }

    /// Names in roster order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated roster.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is a participant (exact match, case-sensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}
