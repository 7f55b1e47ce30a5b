//! Per-side match state and the damage/clamping primitives.
//!
//! ## PlayerState
//!
//! The eight values that describe one side of a match: tower and wall,
//! the three producers (quarries, magic, dungeon) and the three stocks
//! they feed (bricks, gems, beasts).
//!
//! ## Floors
//!
//! - `tower`, `wall`, `bricks`, `gems`, `beasts` never go below 0.
//! - `quarries`, `magic`, `dungeon` never go below 1: reduction effects
//!   clamp to the floor, growth effects have no ceiling.
//!
//! All mutation goes through the methods here, so every write site gets
//! the same clamping. `validate` is the post-mutation safety net that
//! turns a violated floor into an `InvariantViolation` fault.

use serde::{Deserialize, Serialize};

/// Tower height at or above which a side wins.
pub const TOWER_WIN: i64 = 50;

/// A named state value on one side.
///
/// Used by effect ops to address fields generically, and by invariant
/// reporting to name the offending field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Tower,
    Wall,
    Quarries,
    Bricks,
    Magic,
    Gems,
    Dungeon,
    Beasts,
}

impl Resource {
    /// The legal minimum for this field.
    #[must_use]
    pub const fn floor(self) -> i64 {
        match self {
            Resource::Quarries | Resource::Magic | Resource::Dungeon => 1,
            _ => 0,
        }
    }

    /// Field name as reported in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Tower => "tower",
            Resource::Wall => "wall",
            Resource::Quarries => "quarries",
            Resource::Bricks => "bricks",
            Resource::Magic => "magic",
            Resource::Gems => "gems",
            Resource::Dungeon => "dungeon",
            Resource::Beasts => "beasts",
        }
    }

    /// All eight fields in declaration order.
    #[must_use]
    pub const fn all() -> [Resource; 8] {
        [
            Resource::Tower,
            Resource::Wall,
            Resource::Quarries,
            Resource::Bricks,
            Resource::Magic,
            Resource::Gems,
            Resource::Dungeon,
            Resource::Beasts,
        ]
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The state of one side of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub tower: i64,
    pub wall: i64,
    pub quarries: i64,
    pub bricks: i64,
    pub magic: i64,
    pub gems: i64,
    pub dungeon: i64,
    pub beasts: i64,
}

impl PlayerState {
    /// The fixed starting state both sides get at match reset.
    #[must_use]
    pub const fn starting() -> Self {
        Self {
            tower: 30,
            wall: 10,
            quarries: 2,
            bricks: 5,
            magic: 2,
            gems: 5,
            dungeon: 2,
            beasts: 5,
        }
    }

    /// Read a field by name.
    #[must_use]
    pub const fn get(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Tower => self.tower,
            Resource::Wall => self.wall,
            Resource::Quarries => self.quarries,
            Resource::Bricks => self.bricks,
            Resource::Magic => self.magic,
            Resource::Gems => self.gems,
            Resource::Dungeon => self.dungeon,
            Resource::Beasts => self.beasts,
        }
    }

    fn get_mut(&mut self, resource: Resource) -> &mut i64 {
        match resource {
            Resource::Tower => &mut self.tower,
            Resource::Wall => &mut self.wall,
            Resource::Quarries => &mut self.quarries,
            Resource::Bricks => &mut self.bricks,
            Resource::Magic => &mut self.magic,
            Resource::Gems => &mut self.gems,
            Resource::Dungeon => &mut self.dungeon,
            Resource::Beasts => &mut self.beasts,
        }
    }

    /// Production phase: each producer feeds its stock.
    pub fn produce(&mut self) {
        self.bricks += self.quarries;
        self.gems += self.magic;
        self.beasts += self.dungeon;
    }

    /// Wall-first damage: the wall absorbs up to `amount`, any overflow
    /// reduces the tower, floored at 0.
    pub fn wall_first_damage(&mut self, amount: i64) {
        let overflow = amount - self.wall;
        if overflow > 0 {
            self.wall = 0;
            self.tower = (self.tower - overflow).max(0);
        } else {
            self.wall -= amount;
        }
    }

    /// Bypass damage: reduces the tower directly, ignoring the wall.
    pub fn bypass_damage(&mut self, amount: i64) {
        self.tower = (self.tower - amount).max(0);
    }

    /// Increase a field. No ceiling.
    pub fn gain(&mut self, resource: Resource, amount: i64) {
        *self.get_mut(resource) += amount;
    }

    /// Decrease a field, clamped at its floor (0, or 1 for producers).
    pub fn lose(&mut self, resource: Resource, amount: i64) {
        let slot = self.get_mut(resource);
        *slot = (*slot - amount).max(resource.floor());
    }

    /// Check every field against its floor.
    ///
    /// Returns the first offending `(field, value)` pair, if any.
    pub fn validate(&self) -> Result<(), (Resource, i64)> {
        for resource in Resource::all() {
            let value = self.get(resource);
            if value < resource.floor() {
                return Err((resource, value));
            }
        }
        Ok(())
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::starting()
    }
}
