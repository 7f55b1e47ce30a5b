//! Error taxonomy.
//!
//! Two distinct severities exist:
//!
//! - `MatchError`: fatal to one match. Either the data produced an
//!   illegal state (`InvariantViolation`) or the engine looped past its
//!   production ceiling (`Runaway`); the latter is an engine-design
//!   fault, reported distinctly from a data fault.
//! - `PlayError`: a locally rejected action. Nothing was mutated and
//!   the caller can present the rejection to a user.
//!
//! Unrecognized effect text is deliberately *not* an error: it no-ops
//! at play time and is caught by authoring-time catalogue lints.

use serde::Serialize;
use thiserror::Error;

use super::side::Side;
use super::state::Resource;
use crate::cards::InstanceId;

/// A fault that aborts a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
pub enum MatchError {
    /// A state field left its legal range after a mutation.
    #[error("{side} {field} left its legal range: {value}")]
    InvariantViolation {
        side: Side,
        field: Resource,
        value: i64,
    },

    /// The production-phase ceiling was exceeded without a winner.
    #[error("no winner after {ceiling} production phases")]
    Runaway { ceiling: u32 },
}

/// A rejected play or discard. No state was mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The color-matched resource does not cover the card's cost.
    #[error("cannot afford card instance {0}")]
    Unaffordable(InstanceId),

    /// The instance is not in the acting side's hand.
    #[error("card instance {0} is not in hand")]
    NotInHand(InstanceId),

    /// The acting side is not the active side.
    #[error("{0} acted out of turn")]
    NotYourTurn(Side),

    /// The match already has a winner or faulted.
    #[error("match is already over")]
    MatchOver,
}

/// A card catalogue that could not be constructed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid card JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate card id {0}")]
    DuplicateId(u32),

    #[error("catalogue contains no cards")]
    Empty,
}
