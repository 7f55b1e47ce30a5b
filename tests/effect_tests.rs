//! Effect pipeline tests: compile + resolve against known scenarios,
//! plus the catalogue lint that keeps authoring mistakes out of the
//! built-in set.

use citadel::{compile, resolve, standard, PlayerState, Resource};
use proptest::prelude::*;

fn opponent(tower: i64, wall: i64) -> PlayerState {
    PlayerState {
        tower,
        wall,
        ..PlayerState::starting()
    }
}

#[test]
fn test_generic_damage_spills_over_wall() {
    let effect = compile("6 damage");
    let res = resolve(&effect, &PlayerState::starting(), &opponent(30, 4));

    assert_eq!(res.opponent.wall, 0);
    assert_eq!(res.opponent.tower, 28);
}

#[test]
fn test_tower_damage_leaves_wall_untouched() {
    let effect = compile("10 damage to enemy tower");
    let res = resolve(&effect, &PlayerState::starting(), &opponent(20, 5));

    assert_eq!(res.opponent.wall, 5);
    assert_eq!(res.opponent.tower, 10);
}

#[test]
fn test_overflow_finishes_a_bare_tower() {
    let effect = compile("5 damage");
    let res = resolve(&effect, &PlayerState::starting(), &opponent(1, 0));

    assert_eq!(res.opponent.tower, 0);
    assert_eq!(res.opponent.wall, 0);
}

#[test]
fn test_every_standard_card_compiles_to_something() {
    for def in standard().iter() {
        let effect = compile(&def.effect);
        assert!(
            !effect.is_noop(),
            "'{}' matched no clause: {:?}",
            def.name,
            def.effect
        );
    }
}

#[test]
fn test_every_standard_card_resolves_within_floors() {
    let start = PlayerState::starting();
    for def in standard().iter() {
        let res = resolve(&compile(&def.effect), &start, &start);
        assert!(
            res.acting.validate().is_ok(),
            "'{}' broke the acting side's floors",
            def.name
        );
        assert!(
            res.opponent.validate().is_ok(),
            "'{}' broke the opponent's floors",
            def.name
        );
    }
}

#[test]
fn test_magic_superiority_branches() {
    let effect = compile("if magic > enemy magic, 12 damage. else, 8 damage");

    let mut strong = PlayerState::starting();
    strong.magic = 5;
    let res = resolve(&effect, &strong, &opponent(30, 0));
    // First-token generic 12 plus the conditional's 12
    assert_eq!(res.opponent.tower, 6);

    let res = resolve(&effect, &PlayerState::starting(), &opponent(30, 0));
    // Generic 12 plus the weaker branch's 8
    assert_eq!(res.opponent.tower, 10);
}

#[test]
fn test_quarry_catch_up_branches() {
    let effect = compile("if quarry < enemy quarry, +2 quarry. else, +1 quarry");

    let mut rich = PlayerState::starting();
    rich.quarries = 5;
    // Both branch tokens land as plain gains (2 + 1), then the
    // catch-up branch adds 2 because the snapshot trails
    let res = resolve(&effect, &PlayerState::starting(), &rich);
    assert_eq!(res.acting.quarries, 7);

    // Not behind: the weaker branch adds 1
    let res = resolve(&effect, &PlayerState::starting(), &PlayerState::starting());
    assert_eq!(res.acting.quarries, 6);
}

#[test]
fn test_tower_catch_up_branches() {
    let effect = compile("if tower < enemy tower, +2 tower. else, +1 tower");

    let mut behind = PlayerState::starting();
    behind.tower = 20;
    let res = resolve(&effect, &behind, &PlayerState::starting());
    assert_eq!(res.acting.tower, 25);

    let res = resolve(&effect, &PlayerState::starting(), &PlayerState::starting());
    assert_eq!(res.acting.tower, 34);
}

#[test]
fn test_wall_zero_bonus_branches() {
    let effect = compile("if enemy wall = 0, 10 damage. else, 6 damage");

    // Bare wall: generic 10 straight to the tower, then the 10 branch
    let res = resolve(&effect, &PlayerState::starting(), &opponent(30, 0));
    assert_eq!(res.opponent.tower, 10);

    // Walled: generic 10 eats the wall, then the 6 branch
    let res = resolve(&effect, &PlayerState::starting(), &opponent(30, 4));
    assert_eq!(res.opponent.wall, 0);
    assert_eq!(res.opponent.tower, 18);
}

#[test]
fn test_wall_nonzero_bonus_branches() {
    let effect = compile("if enemy wall > 0, 10 damage. else, 7 damage");

    let res = resolve(&effect, &PlayerState::starting(), &opponent(30, 5));
    assert_eq!(res.opponent.wall, 0);
    assert_eq!(res.opponent.tower, 15);

    let res = resolve(&effect, &PlayerState::starting(), &opponent(30, 0));
    assert_eq!(res.opponent.tower, 13);
}

#[test]
fn test_skirmish_branches_on_wall_superiority() {
    let effect = compile("if wall > enemy wall do 3 damage. else do 2 damage");

    let mut tall = PlayerState::starting();
    tall.wall = 20;
    // Generic 3 plus the stronger branch's 3, all wall-first
    let res = resolve(&effect, &tall, &opponent(30, 5));
    assert_eq!(res.opponent.wall, 0);
    assert_eq!(res.opponent.tower, 29);

    let mut low = PlayerState::starting();
    low.wall = 2;
    let res = resolve(&effect, &low, &opponent(30, 5));
    assert_eq!(res.opponent.wall, 0);
    assert_eq!(res.opponent.tower, 30);
}

#[test]
fn test_wall_superiority_routes_past_wall() {
    let effect = compile("if wall > enemy wall, 6 damage to tower. else, 6 damage");

    let mut tall = PlayerState::starting();
    tall.wall = 20;
    let res = resolve(&effect, &tall, &opponent(30, 5));
    // Bypass from the tower clause plus the routed bypass
    assert_eq!(res.opponent.tower, 18);
    assert_eq!(res.opponent.wall, 5);

    let mut low = PlayerState::starting();
    low.wall = 2;
    let res = resolve(&effect, &low, &opponent(30, 5));
    // Bypass 6, then the else branch goes wall-first
    assert_eq!(res.opponent.tower, 23);
    assert_eq!(res.opponent.wall, 0);
}

#[test]
fn test_quarry_equalize_never_lowers() {
    let effect = compile("if quarry < enemy quarry, quarry = enemy quarry");

    let mut rich = PlayerState::starting();
    rich.quarries = 8;
    let res = resolve(&effect, &rich, &PlayerState::starting());
    assert_eq!(res.acting.quarries, 8);

    let res = resolve(&effect, &PlayerState::starting(), &rich);
    assert_eq!(res.acting.quarries, 8);
}

#[test]
fn test_steal_half_rounds_up() {
    let effect = compile("enemy loses 10 gems, 5 bricks. you gain 1/2 amt. round up");
    let mut opp = PlayerState::starting();
    opp.gems = 25;
    opp.bricks = 5;

    let res = resolve(&effect, &PlayerState::starting(), &opp);
    // 10 lost to the enemy-loses clause, 10 more stolen
    assert_eq!(res.opponent.gems, 5);
    assert_eq!(res.acting.gems, PlayerState::starting().gems + 5);
    assert_eq!(res.opponent.bricks, 0);
    assert_eq!(res.acting.bricks, PlayerState::starting().bricks + 3);
}

#[test]
fn test_imp_taxes_both_sides() {
    let effect = compile("6 damage. all players lose 5 bricks, gems, and recruits");
    let mut acting = PlayerState::starting();
    acting.bricks = 20;
    let mut opp = PlayerState::starting();
    opp.bricks = 20;
    opp.wall = 0;

    let res = resolve(&effect, &acting, &opp);
    // Acting bricks fall to the bare-lose clause, the single-stat
    // clause, and the triple clause; the opponent skips the bare form
    assert_eq!(res.acting.bricks, 5);
    assert_eq!(res.opponent.bricks, 10);
    assert_eq!(res.acting.gems, 0);
    assert_eq!(res.opponent.gems, 0);
    assert_eq!(res.acting.beasts, 0);
    assert_eq!(res.opponent.beasts, 0);
    assert_eq!(res.opponent.tower, 24);
}

#[test]
fn test_full_moon_grows_both_dungeons() {
    let effect = compile("+1 to all player's dungeon. you gain 3 recruits");
    let res = resolve(&effect, &PlayerState::starting(), &PlayerState::starting());

    assert_eq!(res.acting.dungeon, 3);
    assert_eq!(res.opponent.dungeon, 3);
    assert_eq!(res.acting.beasts, 8);
    assert_eq!(res.opponent.beasts, 5);
}

#[test]
fn test_unrecognized_text_no_ops_at_play_time() {
    let start = PlayerState::starting();
    let res = resolve(&compile("inscrutable runes"), &start, &start);

    assert_eq!(res.acting, start);
    assert_eq!(res.opponent, start);
    assert!(!res.play_again);
}

proptest! {
    #[test]
    fn test_wall_first_damage_formula(
        wall in 0i64..200,
        tower in 0i64..200,
        damage in 0i64..400,
    ) {
        let mut state = PlayerState {
            wall,
            tower,
            ..PlayerState::starting()
        };
        state.wall_first_damage(damage);

        prop_assert_eq!(state.wall, (wall - damage).max(0));
        prop_assert_eq!(state.tower, (tower - (damage - wall).max(0)).max(0));
        prop_assert!(state.validate().is_ok());
    }

    #[test]
    fn test_lose_never_breaks_floor(
        amount in 0i64..1000,
        start in 0i64..100,
    ) {
        for resource in Resource::all() {
            let mut state = PlayerState::starting();
            state.gain(resource, start);
            state.lose(resource, amount);
            prop_assert!(state.get(resource) >= resource.floor());
        }
    }
}
