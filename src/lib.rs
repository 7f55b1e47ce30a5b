//! # citadel
//!
//! A two-sided tower-duel card battle engine with a headless batch
//! simulator for balance analysis.
//!
//! ## Design Principles
//!
//! 1. **One canonical interpreter**: effect text is compiled once into
//!    typed operations; the interactive surface and the batch
//!    simulator resolve cards through the same pipeline, so the two
//!    can never drift apart.
//!
//! 2. **Explicit state, pure transitions**: a `Match` is a value
//!    advanced by synchronous methods. No hidden shared state, no
//!    partially applied effects observable from outside.
//!
//! 3. **Deterministic by construction**: every source of randomness
//!    flows from one seeded `GameRng`, so any match or batch replays
//!    exactly.
//!
//! ## Modules
//!
//! - `core`: sides, player state, damage primitives, RNG, errors
//! - `cards`: definitions, instances, catalogues, the built-in set
//! - `effects`: text-to-ops compiler and the op resolver
//! - `deck`: the shared draw pile and its full-pool rebuild rule
//! - `engine`: the turn state machine and action policies
//! - `sim`: parallel batch runs and the balance report

pub mod cards;
pub mod core;
pub mod deck;
pub mod effects;
pub mod engine;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    GameRng, MatchError, PlayError, PlayerState, Resource, Side, SideMap, TOWER_WIN,
};

pub use crate::cards::{
    standard, CardCatalog, CardColor, CardDefinition, CardId, CardInstance, InstanceId,
};

pub use crate::effects::{compile, resolve, CompiledEffect, EffectOp, Resolution};

pub use crate::deck::Deck;

pub use crate::engine::{
    Decision, FirstAffordable, Hand, Match, MatchOutcome, MatchStatus, MatchVerdict, Ruleset,
    Strategy, TurnOutcome,
};

pub use crate::sim::{run_batch, BatchReport, BatchStats, SimConfig};
