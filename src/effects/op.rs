//! Typed effect operations.
//!
//! A card's free-text effect is compiled once, at catalogue load, into
//! a `CompiledEffect`: an ordered list of `EffectOp`s plus the
//! extra-turn flag. Execution is then a fold over player state with no
//! text scanning on the play path, and the operation vocabulary can be
//! tested independently of card content.
//!
//! Several canonical texts intentionally trigger more than one clause
//! (a conditional's branch values also read as plain damage tokens, a
//! conditional's "+N quarry" branches also read as plain gains). The
//! compiler preserves those overlaps rather than deduplicating them;
//! they are part of the card balance the simulator measures.

use serde::{Deserialize, Serialize};

use crate::core::Resource;

/// One state mutation decoded from effect text.
///
/// Ops are resolved in the order the compiler emits them, which is the
/// fixed clause-dispatch order, not text order.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum EffectOp {
    /// Damage the opponent's tower directly, ignoring wall.
    BypassOpponentTower(i64),
    /// Damage the caster's own tower directly, ignoring wall.
    BypassOwnTower(i64),
    /// Wall-first damage against the opponent.
    WallFirstOpponent(i64),
    /// Both towers reduced directly.
    DamageAllTowers(i64),
    /// Both walls reduced directly, no tower spill.
    DamageAllWalls(i64),
    /// Wall-first damage against the caster.
    WallFirstSelf(i64),
    /// Caster gains a resource (no ceiling).
    GainSelf { resource: Resource, amount: i64 },
    /// Opponent's tower increases.
    RaiseOpponentTower(i64),
    /// Both sides' quarries increase by 1.
    AllGainQuarry,
    /// Both sides' dungeon increases by 1.
    AllGainDungeon,
    /// Caster loses a resource, clamped at its floor.
    LoseSelf { resource: Resource, amount: i64 },
    /// Opponent loses a resource, clamped at its floor.
    OpponentLoses { resource: Resource, amount: i64 },
    /// Opponent's dungeon drops by 1 (floor 1).
    DropOpponentDungeon,
    /// Opponent's quarries drop by 1 (floor 1).
    DropOpponentQuarry,
    /// Both sides lose a resource, clamped at its floor.
    AllLose { resource: Resource, amount: i64 },
    /// Both sides lose N bricks, gems, and beasts.
    AllLoseTriple(i64),
    /// Caster's quarries drop by 1 (floor 1).
    DropSelfQuarry,
    /// Both sides' quarries drop by 1 (floor 1).
    AllDropQuarry,
    /// Caster's magic drops by 1 (floor 1).
    DropSelfMagic,
    /// Both sides' magic drops by 1 (floor 1).
    AllDropMagic,
    /// One of the named conditionals, dispatched at resolve time.
    Conditional(ConditionalKind),
}

/// The fixed catalogue of named conditional effects.
///
/// Each kind carries its branch values; the comparison inputs are the
/// pre-resolution state snapshots, so a conditional's outcome does not
/// depend on the unconditional ops resolved before it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ConditionalKind {
    /// Quarries +2 if behind the opponent's quarries, else +1.
    QuarryCatchUp,
    /// Raise own quarries to the opponent's value; never lowers.
    QuarryEqualize,
    /// Wall +6 if own wall was 0, else +3.
    WallRefill,
    /// Tower +2 if behind the opponent's tower, else +1.
    TowerCatchUp,
    /// Wall-first 10 if the opponent's wall was 0, else 6.
    WallZeroBonus,
    /// Wall-first 10 if the opponent's wall was above 0, else 7.
    WallNonzeroBonus,
    /// Wall-first 12 if own magic exceeds the opponent's, else 8.
    MagicSuperiority,
    /// Bypass 6 if own wall exceeds the opponent's, else wall-first 6.
    WallSuperiorityRouting,
    /// Wall-first 3 if own wall exceeds the opponent's, else 2.
    SkirmishRouting,
    /// Bypass 8 if own tower exceeds the opponent's wall, else
    /// wall-first 8.
    TowerVsWallRouting,
    /// Opponent loses up to 10 gems and 5 bricks; caster gains half of
    /// each amount actually lost, rounded up.
    StealHalf,
    /// Exchange the two wall values.
    WallSwap,
    /// Both sides' magic set to the higher pre-resolution value.
    MagicEqualize,
}

/// A card effect after compilation.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CompiledEffect {
    /// Operations in dispatch order.
    pub ops: Vec<EffectOp>,
    /// Whether the caster takes another turn.
    pub play_again: bool,
}

impl CompiledEffect {
    /// True when the text matched no clause at all.
    ///
    /// A no-op effect is legal at play time (the card still costs and
    /// draws); authoring mistakes are caught by the catalogue lint
    /// test instead.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.ops.is_empty() && !self.play_again
    }
}
