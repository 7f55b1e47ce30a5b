//! Effect execution.
//!
//! `resolve` folds a compiled operation list over copies of the two
//! player states and returns the mutated pair. It is pure: no partial
//! application is ever observable, and the same inputs always produce
//! the same outputs.
//!
//! Conditional comparisons read the pre-resolution snapshots, so a
//! conditional's branch choice does not depend on the unconditional
//! ops resolved before it. The steal-half cap is the exception: it is
//! limited by the opponent's live holdings at the moment it runs.

use crate::core::{PlayerState, Resource};

use super::op::{CompiledEffect, ConditionalKind, EffectOp};

/// The outcome of resolving one card effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The acting side's state after resolution.
    pub acting: PlayerState,
    /// The other side's state after resolution.
    pub opponent: PlayerState,
    /// Whether the acting side takes another turn.
    pub play_again: bool,
}

/// Apply a compiled effect to the acting side and its opponent.
#[must_use]
pub fn resolve(
    effect: &CompiledEffect,
    acting: &PlayerState,
    opponent: &PlayerState,
) -> Resolution {
    let snap_self = *acting;
    let snap_opp = *opponent;
    let mut acting = *acting;
    let mut opponent = *opponent;

    for op in &effect.ops {
        match *op {
            EffectOp::BypassOpponentTower(v) => opponent.bypass_damage(v),
            EffectOp::BypassOwnTower(v) => acting.bypass_damage(v),
            EffectOp::WallFirstOpponent(v) => opponent.wall_first_damage(v),
            EffectOp::DamageAllTowers(v) => {
                acting.bypass_damage(v);
                opponent.bypass_damage(v);
            }
            EffectOp::DamageAllWalls(v) => {
                acting.wall = (acting.wall - v).max(0);
                opponent.wall = (opponent.wall - v).max(0);
            }
            EffectOp::WallFirstSelf(v) => acting.wall_first_damage(v),
            EffectOp::GainSelf { resource, amount } => acting.gain(resource, amount),
            EffectOp::RaiseOpponentTower(v) => opponent.gain(Resource::Tower, v),
            EffectOp::AllGainQuarry => {
                acting.quarries += 1;
                opponent.quarries += 1;
            }
            EffectOp::AllGainDungeon => {
                acting.dungeon += 1;
                opponent.dungeon += 1;
            }
            EffectOp::LoseSelf { resource, amount } => acting.lose(resource, amount),
            EffectOp::OpponentLoses { resource, amount } => opponent.lose(resource, amount),
            EffectOp::DropOpponentDungeon => opponent.lose(Resource::Dungeon, 1),
            EffectOp::DropOpponentQuarry => opponent.lose(Resource::Quarries, 1),
            EffectOp::AllLose { resource, amount } => {
                acting.lose(resource, amount);
                opponent.lose(resource, amount);
            }
            EffectOp::AllLoseTriple(v) => {
                for resource in [Resource::Bricks, Resource::Gems, Resource::Beasts] {
                    acting.lose(resource, v);
                    opponent.lose(resource, v);
                }
            }
            EffectOp::DropSelfQuarry => acting.lose(Resource::Quarries, 1),
            EffectOp::AllDropQuarry => {
                acting.lose(Resource::Quarries, 1);
                opponent.lose(Resource::Quarries, 1);
            }
            EffectOp::DropSelfMagic => acting.lose(Resource::Magic, 1),
            EffectOp::AllDropMagic => {
                acting.lose(Resource::Magic, 1);
                opponent.lose(Resource::Magic, 1);
            }
            EffectOp::Conditional(kind) => {
                conditional(kind, &mut acting, &mut opponent, &snap_self, &snap_opp);
            }
        }
    }

    Resolution {
        acting,
        opponent,
        play_again: effect.play_again,
    }
}

fn conditional(
    kind: ConditionalKind,
    acting: &mut PlayerState,
    opponent: &mut PlayerState,
    snap_self: &PlayerState,
    snap_opp: &PlayerState,
) {
    match kind {
        ConditionalKind::QuarryCatchUp => {
            acting.quarries += if snap_self.quarries < snap_opp.quarries {
                2
            } else {
                1
            };
        }
        ConditionalKind::QuarryEqualize => {
            acting.quarries = acting.quarries.max(snap_opp.quarries);
        }
        ConditionalKind::WallRefill => {
            acting.wall += if snap_self.wall == 0 { 6 } else { 3 };
        }
        ConditionalKind::TowerCatchUp => {
            acting.tower += if snap_self.tower < snap_opp.tower { 2 } else { 1 };
        }
        ConditionalKind::WallZeroBonus => {
            opponent.wall_first_damage(if snap_opp.wall == 0 { 10 } else { 6 });
        }
        ConditionalKind::WallNonzeroBonus => {
            opponent.wall_first_damage(if snap_opp.wall > 0 { 10 } else { 7 });
        }
        ConditionalKind::MagicSuperiority => {
            opponent.wall_first_damage(if snap_self.magic > snap_opp.magic {
                12
            } else {
                8
            });
        }
        ConditionalKind::WallSuperiorityRouting => {
            if snap_self.wall > snap_opp.wall {
                opponent.bypass_damage(6);
            } else {
                opponent.wall_first_damage(6);
            }
        }
        ConditionalKind::SkirmishRouting => {
            opponent.wall_first_damage(if snap_self.wall > snap_opp.wall { 3 } else { 2 });
        }
        ConditionalKind::TowerVsWallRouting => {
            if snap_self.tower > snap_opp.wall {
                opponent.bypass_damage(8);
            } else {
                opponent.wall_first_damage(8);
            }
        }
        ConditionalKind::StealHalf => {
            let gems = opponent.gems.min(10);
            let bricks = opponent.bricks.min(5);
            opponent.gems -= gems;
            opponent.bricks -= bricks;
            acting.gems += (gems + 1) / 2;
            acting.bricks += (bricks + 1) / 2;
        }
        ConditionalKind::WallSwap => {
            std::mem::swap(&mut acting.wall, &mut opponent.wall);
        }
        ConditionalKind::MagicEqualize => {
            let high = snap_self.magic.max(snap_opp.magic);
            acting.magic = high;
            opponent.magic = high;
        }
    }
}
