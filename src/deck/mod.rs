//! Deck construction, draws, and the full-pool rebuild rule.
//!
//! The deck holds two instances of every catalogue definition,
//! shuffled. Played and discarded cards never return to circulation;
//! when the live deck runs dry an entirely fresh pool is built from
//! the catalogue, regardless of what is still held in hands. Instance
//! identities are never reused across rebuilds.

use crate::cards::{CardCatalog, CardInstance, InstanceId};
use crate::core::GameRng;

/// Number of instances of each definition in a freshly built pool.
pub const COPIES_PER_DEFINITION: u64 = 2;

/// The shared draw pile.
#[derive(Clone, Debug)]
pub struct Deck {
    /// Remaining cards, drawn from the back.
    cards: Vec<CardInstance>,
    /// Next instance identity; monotonic across rebuilds.
    next_instance: u64,
    /// How many times the pool has been rebuilt after exhaustion.
    rebuilds: u32,
}

impl Deck {
    /// Build and shuffle a fresh deck from the catalogue.
    #[must_use]
    pub fn build(catalog: &CardCatalog, rng: &mut GameRng) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            next_instance: 0,
            rebuilds: 0,
        };
        deck.refill(catalog, rng);
        deck
    }

    fn refill(&mut self, catalog: &CardCatalog, rng: &mut GameRng) {
        self.cards.clear();
        self.cards
            .reserve(catalog.len() * COPIES_PER_DEFINITION as usize);
        for def in catalog.iter() {
            for _ in 0..COPIES_PER_DEFINITION {
                self.cards
                    .push(CardInstance::new(InstanceId(self.next_instance), def.id));
                self.next_instance += 1;
            }
        }
        rng.shuffle(&mut self.cards);
    }

    /// Draw one card, rebuilding the full pool first if the deck is
    /// exhausted.
    pub fn draw(&mut self, catalog: &CardCatalog, rng: &mut GameRng) -> CardInstance {
        if self.cards.is_empty() {
            self.rebuilds += 1;
            self.refill(catalog, rng);
        }
        // refill never leaves an empty deck: the catalogue is non-empty
        match self.cards.pop() {
            Some(card) => card,
            None => unreachable!("drew from a deck refilled from an empty catalogue"),
        }
    }

    /// Cards left before the next rebuild.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// How many times the pool has been rebuilt.
    #[must_use]
    pub fn rebuild_count(&self) -> u32 {
        self.rebuilds
    }
}
