//! Pluggable action selection for an automated side.
//!
//! `TurnEngine` never chooses cards itself; it asks a `Strategy` (or an
//! interactive caller) for exactly one decision per turn. Strategies
//! are stateless and deterministic so batch runs stay reproducible.

use crate::cards::{CardCatalog, CardInstance, InstanceId};
use crate::core::PlayerState;

use super::turn::Hand;

/// One turn's choice: play a specific card or discard one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Play(InstanceId),
    Discard(InstanceId),
}

/// An action-selection policy.
///
/// Implementations must return a `Play` only for an affordable card in
/// `hand`, and a `Discard` only when the policy wants to forfeit the
/// turn's effect.
pub trait Strategy {
    fn decide(&self, hand: &Hand, state: &PlayerState, catalog: &CardCatalog) -> Decision;
}

/// The reference policy: play the first affordable card in hand order,
/// otherwise discard the first card.
///
/// No lookahead, no scoring. This is the policy whose balance the
/// batch simulator measures.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstAffordable;

impl Strategy for FirstAffordable {
    fn decide(&self, hand: &Hand, state: &PlayerState, catalog: &CardCatalog) -> Decision {
        match affordable_cards(hand, state, catalog).next() {
            Some(card) => Decision::Play(card.instance),
            None => Decision::Discard(hand[0].instance),
        }
    }
}

/// Helper shared by strategies and the dead-hand accounting: the
/// affordable subset of a hand, in hand order.
pub fn affordable_cards<'a>(
    hand: &'a Hand,
    state: &PlayerState,
    catalog: &'a CardCatalog,
) -> impl Iterator<Item = &'a CardInstance> + 'a {
    let state = *state;
    hand.iter()
        .filter(move |c| catalog.get_unchecked(c.card).affordable(&state))
}
