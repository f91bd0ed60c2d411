//! Draw results.
//!
//! An [`Assignment`] is the outcome of one draw: an ordered list of
//! giver/recipient pairs, one per roster member, in roster order. The JSON
//! form of that list is the canonical plaintext that gets encrypted at rest.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One giver -> recipient pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub giver: String,
    pub recipient: String,
}

/// A complete draw: every roster member gives to exactly one other member.
///
/// Invariants (established by the draw, preserved by serialization):
/// - Bijection: every name appears exactly once as giver and once as recipient
/// - No fixed points: `giver != recipient` for every pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    pairs: Vec<Pair>,
}

impl Assignment {
    pub(crate) fn from_pairs(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    /// Pairs in roster order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Number of pairs (equals the roster size).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up the recipient assigned to `giver`.
    pub fn recipient_for(&self, giver: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.giver == giver)
            .map(|pair| pair.recipient.as_str())
    }

    /// Canonical JSON encoding (ordered list of giver/recipient records).
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode the canonical JSON encoding.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
