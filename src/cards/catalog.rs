//! Card catalogue: the read-only definition set a match is built from.
//!
//! The catalogue is supplied once at process start - either the
//! built-in `standard()` set or an external JSON file - and shared
//! read-only by every match in a batch. Iteration order is the
//! registration order, so deck construction is deterministic for a
//! given catalogue.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::CatalogError;

/// Registry of card definitions with ordered iteration.
///
/// ## Example
///
/// ```
/// use citadel::cards::{CardCatalog, CardDefinition, CardColor, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new(CardId::new(1), "Orc", CardColor::Green, 3, "5 damage"));
///
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Orc");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    order: Vec<CardId>,
}

impl CardCatalog {
    /// Create a new empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists; building the
    /// catalogue is a startup-time operation.
    pub fn register(&mut self, card: CardDefinition) {
        assert!(
            !self.cards.contains_key(&card.id),
            "card id {} registered twice",
            card.id
        );
        self.order.push(card.id);
        self.cards.insert(card.id, card);
    }

    /// Load a catalogue from a JSON array of definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let defs: Vec<CardDefinition> = serde_json::from_str(json)?;
        if defs.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut catalog = Self::new();
        for def in defs {
            if catalog.cards.contains_key(&def.id) {
                return Err(CatalogError::DuplicateId(def.id.raw()));
            }
            catalog.register(def);
        }
        Ok(catalog)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// Every `CardId` held by a deck or hand originated from this
    /// catalogue, so engine-internal lookups use this form.
    #[must_use]
    pub fn get_unchecked(&self, id: CardId) -> &CardDefinition {
        self.cards.get(&id).expect("card id not in catalogue")
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().map(|id| &self.cards[id])
    }
}
