//! Side identification and per-side data storage.
//!
//! A match always has exactly two actors. `Side` identifies one of
//! them; `SideMap` stores one value per side with `Index` access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two actors in a match.
///
/// `Player` is the side an interactive caller controls; `Enemy` is the
/// automated side. The batch simulator drives both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// Both sides, player first.
    #[must_use]
    pub const fn both() -> [Side; 2] {
        [Side::Player, Side::Enemy]
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Enemy => write!(f, "Enemy"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use citadel::core::{Side, SideMap};
///
/// let mut wins: SideMap<u64> = SideMap::with_value(0);
/// wins[Side::Player] += 1;
/// assert_eq!(wins[Side::Player], 1);
/// assert_eq!(wins[Side::Enemy], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideMap<T> {
    player: T,
    enemy: T,
}

impl<T> SideMap<T> {
    /// Create with a factory function.
    pub fn new(mut f: impl FnMut(Side) -> T) -> Self {
        Self {
            player: f(Side::Player),
            enemy: f(Side::Enemy),
        }
    }

    /// Create with the same value for both sides.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            enemy: value,
        }
    }

    /// Iterate over `(side, value)` pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Enemy, &self.enemy)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }
}
