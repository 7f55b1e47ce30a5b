//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type: its
//! color (which resource pays for it), its cost, and the effect text
//! the interpreter compiles. Display-only fields like localized names
//! and artwork live with the presentation layer, not here.
//!
//! Per-match identity (which copy of a card sits in which hand) is
//! tracked separately by `CardInstance`.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerState, Resource};

/// Unique identifier for a card definition.
///
/// Identifies the card *type* ("Unicorn"), not a specific copy in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card color, gating which resource pays its cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    /// Paid with bricks (quarry economy).
    Red,
    /// Paid with gems (magic economy).
    Blue,
    /// Paid with beasts (dungeon economy).
    Green,
}

impl CardColor {
    /// The resource that pays for cards of this color.
    #[must_use]
    pub const fn currency(self) -> Resource {
        match self {
            CardColor::Red => Resource::Bricks,
            CardColor::Blue => Resource::Gems,
            CardColor::Green => Resource::Beasts,
        }
    }
}

/// Static card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for logs and reports).
    pub name: String,

    /// Which resource pays the cost.
    pub color: CardColor,

    /// Cost in the color-matched resource. Non-negative.
    pub cost: i64,

    /// Free-text effect description, compiled by the interpreter.
    pub effect: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        color: CardColor,
        cost: i64,
        effect: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            cost,
            effect: effect.into(),
        }
    }

    /// Whether `state` holds enough of the color-matched resource.
    #[must_use]
    pub fn affordable(&self, state: &PlayerState) -> bool {
        state.get(self.color.currency()) >= self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId::new(42)), "Card(42)");
    }

    #[test]
    fn test_color_currency() {
        assert_eq!(CardColor::Red.currency(), Resource::Bricks);
        assert_eq!(CardColor::Blue.currency(), Resource::Gems);
        assert_eq!(CardColor::Green.currency(), Resource::Beasts);
    }

    #[test]
    fn test_affordable() {
        let card = CardDefinition::new(CardId::new(1), "Orc", CardColor::Green, 6, "5 damage");
        let mut state = PlayerState::starting(); // 5 beasts

        assert!(!card.affordable(&state));
        state.beasts = 6;
        assert!(card.affordable(&state));
    }

    #[test]
    fn test_definition_serialization() {
        let card = CardDefinition::new(CardId::new(3), "Wall", CardColor::Red, 2, "+3 wall");
        let json = serde_json::to_string(&card).unwrap();
        let back: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, back);
    }
}
