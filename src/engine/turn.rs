//! The turn state machine.
//!
//! ## Phase sequence
//!
//! A turn runs `PRODUCTION` (at `begin_turn`), then one action from the
//! active side (`play_card` or `discard_card`), which internally covers
//! cost deduction, effect resolution, win check, draw, and the
//! extra-turn check before handing control over. Cost is deducted
//! *before* the effect resolves, so an effect granting the resource
//! that paid for the card cannot fund its own cost.
//!
//! ## Terminal states
//!
//! A match ends with a winner (`MatchStatus::Over`) or a fault: an
//! `InvariantViolation` when a state field escapes its floor, or
//! `Runaway` when the production ceiling is exceeded without a winner.
//! A floor violation discovered in the same action as a win condition
//! reports the fault, not the win.
//!
//! ## Win precedence
//!
//! When one mutation satisfies win conditions for both sides at once,
//! `Side::Player` wins. This is a fixed rule, checked player-first in
//! `check_winner`.

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::cards::{CardCatalog, CardId, CardInstance, InstanceId};
use crate::core::{GameRng, MatchError, PlayError, PlayerState, Side, SideMap, TOWER_WIN};
use crate::deck::Deck;
use crate::effects::{compile, resolve, CompiledEffect};

use super::strategy::{affordable_cards, Decision, Strategy};

/// Cards held by each side at all times.
pub const HAND_SIZE: usize = 6;

/// Production phases per match before a `Runaway` fault.
pub const DEFAULT_PRODUCTION_CEILING: u32 = 2000;

/// One side's hand.
pub type Hand = SmallVec<[CardInstance; HAND_SIZE]>;

/// A catalogue with every effect text compiled, shared read-only by
/// all matches in a batch.
#[derive(Clone, Debug)]
pub struct Ruleset {
    catalog: CardCatalog,
    effects: FxHashMap<CardId, CompiledEffect>,
}

impl Ruleset {
    /// Compile a catalogue into a ruleset.
    #[must_use]
    pub fn new(catalog: CardCatalog) -> Self {
        let effects = catalog
            .iter()
            .map(|def| (def.id, compile(&def.effect)))
            .collect();
        Self { catalog, effects }
    }

    /// The ruleset for the built-in card set.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(crate::cards::standard())
    }

    /// The underlying catalogue.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Compiled effect for a catalogue card.
    #[must_use]
    pub fn effect(&self, id: CardId) -> &CompiledEffect {
        &self.effects[&id]
    }
}

/// Where a match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    InProgress,
    Over(Side),
    Fault(MatchError),
}

/// One entry of the chronological action log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LogEvent {
    Played {
        side: Side,
        card: CardId,
        instance: InstanceId,
    },
    Discarded {
        side: Side,
        card: CardId,
        instance: InstanceId,
        dead_hand: bool,
    },
    ExtraTurn {
        side: Side,
    },
    MatchOver {
        winner: Side,
    },
    Fault {
        error: MatchError,
    },
}

/// What one action produced, for the caller's bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The replacement card drawn into the acting hand.
    pub drew: CardInstance,
    /// Whether the acting side keeps the turn.
    pub extra_turn: bool,
    /// Whether this was a forced discard with nothing affordable.
    pub dead_hand: bool,
}

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MatchVerdict {
    Winner(Side),
    Fault(MatchError),
}

/// Summary of one completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub verdict: MatchVerdict,
    /// Turns taken, extra turns included.
    pub turns: u32,
    /// Completed handovers; extra turns do not advance this.
    pub rounds: u32,
    /// Forced discards over the whole match.
    pub dead_hands: u32,
}

/// One running match.
#[derive(Clone, Debug)]
pub struct Match {
    rules: Arc<Ruleset>,
    states: SideMap<PlayerState>,
    hands: SideMap<Hand>,
    deck: Deck,
    rng: GameRng,
    active: Side,
    round: u32,
    productions: u32,
    ceiling: u32,
    status: MatchStatus,
    resolving: Option<CardInstance>,
    log: Vector<LogEvent>,
    dead_hands: u32,
}

impl Match {
    /// Start a match with the default production ceiling.
    #[must_use]
    pub fn new(rules: Arc<Ruleset>, seed: u64) -> Self {
        Self::with_ceiling(rules, seed, DEFAULT_PRODUCTION_CEILING)
    }

    /// Start a match with an explicit production ceiling.
    #[must_use]
    pub fn with_ceiling(rules: Arc<Ruleset>, seed: u64, ceiling: u32) -> Self {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::build(rules.catalog(), &mut rng);

        let mut hands: SideMap<Hand> = SideMap::new(|_| Hand::new());
        for _ in 0..HAND_SIZE {
            for side in Side::both() {
                hands[side].push(deck.draw(rules.catalog(), &mut rng));
            }
        }

        let mut game = Self {
            rules,
            states: SideMap::with_value(PlayerState::starting()),
            hands,
            deck,
            rng,
            active: Side::Player,
            round: 0,
            productions: 0,
            ceiling,
            status: MatchStatus::InProgress,
            resolving: None,
            log: Vector::new(),
            dead_hands: 0,
        };
        game.begin_turn();
        game
    }

    /// Discard everything and start over from a fresh seed.
    pub fn reset(&mut self, seed: u64) {
        *self = Self::with_ceiling(Arc::clone(&self.rules), seed, self.ceiling);
    }

    /// Play a card from the active hand.
    ///
    /// Rejections (`Unaffordable`, `NotInHand`, `NotYourTurn`,
    /// `MatchOver`) leave the match untouched.
    pub fn play_card(&mut self, instance: InstanceId, side: Side) -> Result<TurnOutcome, PlayError> {
        let pos = self.check_action(instance, side)?;
        let card = self.hands[side][pos];
        let def = self.rules.catalog().get_unchecked(card.card);
        if !def.affordable(&self.states[side]) {
            return Err(PlayError::Unaffordable(instance));
        }

        self.states[side].lose(def.color.currency(), def.cost);
        self.resolving = Some(card);

        let resolution = resolve(
            self.rules.effect(card.card),
            &self.states[side],
            &self.states[side.opponent()],
        );
        self.states[side] = resolution.acting;
        self.states[side.opponent()] = resolution.opponent;
        trace!(card = %def.name, %side, extra_turn = resolution.play_again, "card resolved");

        self.log.push_back(LogEvent::Played {
            side,
            card: card.card,
            instance,
        });
        self.hands[side].remove(pos);
        let drew = self.deck.draw(self.rules.catalog(), &mut self.rng);
        self.hands[side].push(drew);

        self.finish_turn(side, resolution.play_again);
        Ok(TurnOutcome {
            drew,
            extra_turn: resolution.play_again,
            dead_hand: false,
        })
    }

    /// Discard a card from the active hand.
    ///
    /// Counts as a dead hand when nothing in the hand was affordable.
    pub fn discard_card(
        &mut self,
        instance: InstanceId,
        side: Side,
    ) -> Result<TurnOutcome, PlayError> {
        let pos = self.check_action(instance, side)?;
        let dead_hand = affordable_cards(&self.hands[side], &self.states[side], self.rules.catalog())
            .next()
            .is_none();
        if dead_hand {
            self.dead_hands += 1;
            debug!(%side, "dead hand, forced discard");
        }

        let card = self.hands[side].remove(pos);
        self.resolving = None;
        self.log.push_back(LogEvent::Discarded {
            side,
            card: card.card,
            instance,
            dead_hand,
        });
        let drew = self.deck.draw(self.rules.catalog(), &mut self.rng);
        self.hands[side].push(drew);

        self.finish_turn(side, false);
        Ok(TurnOutcome {
            drew,
            extra_turn: false,
            dead_hand,
        })
    }

    /// Drive the match to a terminal state with one policy per side.
    ///
    /// Errors only when a policy returns an instance it does not hold
    /// or cannot pay for.
    pub fn run_to_completion(
        &mut self,
        player: &dyn Strategy,
        enemy: &dyn Strategy,
    ) -> Result<MatchOutcome, PlayError> {
        while self.status == MatchStatus::InProgress {
            let side = self.active;
            let policy = match side {
                Side::Player => player,
                Side::Enemy => enemy,
            };
            let decision = policy.decide(
                &self.hands[side],
                &self.states[side],
                self.rules.catalog(),
            );
            match decision {
                Decision::Play(instance) => self.play_card(instance, side)?,
                Decision::Discard(instance) => self.discard_card(instance, side)?,
            };
        }

        let verdict = match self.status {
            MatchStatus::Over(winner) => MatchVerdict::Winner(winner),
            MatchStatus::Fault(error) => MatchVerdict::Fault(error),
            MatchStatus::InProgress => unreachable!("loop exits on terminal status only"),
        };
        Ok(MatchOutcome {
            verdict,
            turns: self.productions,
            rounds: self.round,
            dead_hands: self.dead_hands,
        })
    }

    /// The win rule, player-first.
    ///
    /// Idempotent over a decided state: re-evaluating an ended match
    /// returns the same winner.
    #[must_use]
    pub fn check_winner(&self) -> Option<Side> {
        let player = &self.states[Side::Player];
        let enemy = &self.states[Side::Enemy];
        if player.tower >= TOWER_WIN || enemy.tower <= 0 {
            Some(Side::Player)
        } else if enemy.tower >= TOWER_WIN || player.tower <= 0 {
            Some(Side::Enemy)
        } else {
            None
        }
    }

    /// Shared preamble of both actions: match live, side active, card
    /// held. Returns the card's position in hand.
    fn check_action(&self, instance: InstanceId, side: Side) -> Result<usize, PlayError> {
        if self.status != MatchStatus::InProgress {
            return Err(PlayError::MatchOver);
        }
        if side != self.active {
            return Err(PlayError::NotYourTurn(side));
        }
        self.hands[side]
            .iter()
            .position(|c| c.instance == instance)
            .ok_or(PlayError::NotInHand(instance))
    }

    fn finish_turn(&mut self, side: Side, extra_turn: bool) {
        for checked in Side::both() {
            if let Err((field, value)) = self.states[checked].validate() {
                let error = MatchError::InvariantViolation {
                    side: checked,
                    field,
                    value,
                };
                self.status = MatchStatus::Fault(error);
                self.log.push_back(LogEvent::Fault { error });
                return;
            }
        }

        if let Some(winner) = self.check_winner() {
            self.status = MatchStatus::Over(winner);
            self.log.push_back(LogEvent::MatchOver { winner });
            info!(%winner, turns = self.productions, "match over");
            return;
        }

        if extra_turn {
            self.log.push_back(LogEvent::ExtraTurn { side });
        } else {
            self.active = side.opponent();
            self.round += 1;
        }
        self.begin_turn();
    }

    /// `PRODUCTION`, guarded by the runaway ceiling.
    fn begin_turn(&mut self) {
        self.productions += 1;
        if self.productions > self.ceiling {
            let error = MatchError::Runaway {
                ceiling: self.ceiling,
            };
            self.status = MatchStatus::Fault(error);
            self.log.push_back(LogEvent::Fault { error });
            return;
        }
        self.states[self.active].produce();
    }

    /// One side's current state.
    #[must_use]
    pub fn state(&self, side: Side) -> &PlayerState {
        &self.states[side]
    }

    /// One side's current hand.
    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active(&self) -> Side {
        self.active
    }

    /// Completed handovers so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Turns taken so far, extra turns included.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.productions
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// The winner, if the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            MatchStatus::Over(winner) => Some(winner),
            _ => None,
        }
    }

    /// The card whose effect most recently resolved, for presentation.
    #[must_use]
    pub fn resolving(&self) -> Option<CardInstance> {
        self.resolving
    }

    /// Chronological action log.
    #[must_use]
    pub fn log(&self) -> &Vector<LogEvent> {
        &self.log
    }

    /// Forced discards so far.
    #[must_use]
    pub fn dead_hands(&self) -> u32 {
        self.dead_hands
    }

    /// The shared draw pile.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}
