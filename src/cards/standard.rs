//! The built-in card set.
//!
//! Forty-two cards across the three colors. Effect texts are written
//! in the vocabulary the effect compiler understands; the catalogue
//! lint test in `tests/effect_tests.rs` checks that every text
//! compiles to at least one operation.

use super::catalog::CardCatalog;
use super::definition::{CardColor, CardDefinition, CardId};

/// Build the standard catalogue.
#[must_use]
pub fn standard() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    let mut next_id = 0u32;
    let mut add = |name: &str, color: CardColor, cost: i64, effect: &str| {
        next_id += 1;
        catalog.register(CardDefinition::new(
            CardId::new(next_id),
            name,
            color,
            cost,
            effect,
        ));
    };

    // Red: masonry and quarry manipulation.
    add("Masonry", CardColor::Red, 2, "+3 wall");
    add("Great Wall", CardColor::Red, 6, "+8 wall");
    add("Reinforced Tower", CardColor::Red, 8, "+8 tower");
    add(
        "Foundations",
        CardColor::Red,
        3,
        "if wall = 0, +6 wall. else, +3 wall",
    );
    add(
        "Mother Lode",
        CardColor::Red,
        4,
        "if quarry < enemy quarry, +2 quarry. else, +1 quarry",
    );
    add(
        "CoppingtheTech",
        CardColor::Red,
        5,
        "if quarry < enemy quarry, quarry = enemy quarry",
    );
    add(
        "Strip Mine",
        CardColor::Red,
        0,
        "-1 quarry, +10 wall, you gain 5 gems",
    );
    add("Earthquake", CardColor::Red, 0, "-1 to all player's quarrys");
    add("Collapse!", CardColor::Red, 4, "-1 enemy quarry");
    add("Common Ground", CardColor::Red, 1, "+1 to all player's quarrys");
    add("Tremors", CardColor::Red, 7, "all walls take 5 damage. play again");
    add("Rock Stompers", CardColor::Red, 7, "8 damage. -1 enemy quarry");
    add("Shatterer", CardColor::Red, 8, "-1 magic. 9 damage");
    add("Quarry's Help", CardColor::Red, 4, "+7 tower. lose 10 bricks");
    add("Lucky Cache", CardColor::Red, 0, "+2 bricks. play again");

    // Blue: magic, direct tower work, resource theft.
    add("Ruby Focus", CardColor::Blue, 4, "+5 tower");
    add("Crystal Matrix", CardColor::Blue, 6, "+1 magic, +3 wall. play again");
    add("Power Burn", CardColor::Blue, 3, "5 damage to your tower. +2 magic");
    add("Pearl of Wisdom", CardColor::Blue, 2, "+5 tower. +1 enemy tower");
    add("Overcharge", CardColor::Blue, 0, "+6 tower. you lose 3 gems");
    add(
        "Bag of Baubles",
        CardColor::Blue,
        2,
        "if tower < enemy tower, +2 tower. else, +1 tower",
    );
    add(
        "Spizzer",
        CardColor::Blue,
        6,
        "if enemy wall = 0, 10 damage. else, 6 damage",
    );
    add(
        "Corrosion Cloud",
        CardColor::Blue,
        11,
        "if enemy wall > 0, 10 damage. else, 7 damage",
    );
    add(
        "Unicorn",
        CardColor::Blue,
        9,
        "if magic > enemy magic, 12 damage. else, 8 damage",
    );
    add(
        "Lightning Shard",
        CardColor::Blue,
        11,
        "if tower > enemy wall, 8 damage to enemy tower. else, 8 damage",
    );
    add(
        "Thief",
        CardColor::Blue,
        12,
        "enemy loses 10 gems, 5 bricks. you gain 1/2 amt. round up",
    );
    add(
        "Discord",
        CardColor::Blue,
        5,
        "7 damage to all towers. all player's magic -1",
    );
    add(
        "Parity",
        CardColor::Blue,
        7,
        "all player's magic equals the highest player's magic",
    );
    add("Shift", CardColor::Blue, 17, "switch your wall with enemy wall");

    // Green: creatures.
    add("Slasher", CardColor::Green, 2, "4 damage");
    add("Orc", CardColor::Green, 3, "5 damage");
    add("Ogre", CardColor::Green, 6, "7 damage");
    add("Goblin Mob", CardColor::Green, 3, "6 damage. you take 3 damage");
    add(
        "Shadow Faerie",
        CardColor::Green,
        6,
        "2 damage to enemy tower. play again",
    );
    add(
        "Spearman",
        CardColor::Green,
        2,
        "if wall > enemy wall do 3 damage. else do 2 damage",
    );
    add(
        "Elven Archers",
        CardColor::Green,
        10,
        "if wall > enemy wall, 6 damage to tower. else, 6 damage",
    );
    add(
        "Imp",
        CardColor::Green,
        5,
        "6 damage. all players lose 5 bricks, gems, and recruits",
    );
    add("Vermin", CardColor::Green, 1, "-1 enemy dungeon. you gain 2 recruits");
    add("Troll Trainers", CardColor::Green, 7, "+2 dungeon");
    add(
        "Full Moon",
        CardColor::Green,
        0,
        "+1 to all player's dungeon. you gain 3 recruits",
    );
    add(
        "Succubus",
        CardColor::Green,
        10,
        "5 damage to enemy tower. enemy loses 8 recruits",
    );
    add(
        "Dragon",
        CardColor::Green,
        25,
        "20 damage. enemy loses 10 gems",
    );

    catalog
}
