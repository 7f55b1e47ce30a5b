//! Card instances - identity-bearing copies of a definition.
//!
//! The shared deck contains two copies of every definition. Hands need
//! to remove a *specific* copy after a play or discard, so each copy
//! carries an `InstanceId` unique for the lifetime of a match (the
//! counter is never reset by deck rebuilds).

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Unique identity of one copy of a card within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One copy of a card in the deck or a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Identity of this copy.
    pub instance: InstanceId,

    /// The definition this copy is of.
    pub card: CardId,
}

impl CardInstance {
    /// Create a card instance.
    #[must_use]
    pub const fn new(instance: InstanceId, card: CardId) -> Self {
        Self { instance, card }
    }
}
