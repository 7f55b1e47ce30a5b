//! Match orchestration: the turn state machine and action policies.

pub mod strategy;
pub mod turn;

pub use strategy::{Decision, FirstAffordable, Strategy};
pub use turn::{
    Hand, LogEvent, Match, MatchOutcome, MatchStatus, MatchVerdict, Ruleset, TurnOutcome,
    DEFAULT_PRODUCTION_CEILING, HAND_SIZE,
};
