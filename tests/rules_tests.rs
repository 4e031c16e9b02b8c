//! Rule engine integration and property tests.

use proptest::prelude::*;
use shellduel::{
    Action, Chamber, GameConfig, GameRng, GameState, Inventory, Item, Player, RuleEngine, Shell,
    StandardDispatcher,
};

fn engine() -> StandardDispatcher {
    StandardDispatcher::new(GameConfig::default()).unwrap()
}

// =============================================================================
// Strategies
// =============================================================================

fn arb_shell() -> impl Strategy<Value = Shell> {
    prop_oneof![Just(Shell::Live), Just(Shell::Blank)]
}

fn arb_inventory() -> impl Strategy<Value = Inventory> {
    prop::array::uniform5(0u8..3).prop_map(Inventory::from_counts)
}

prop_compose! {
    fn arb_state()(
        shells in prop::collection::vec(arb_shell(), 1..8),
        init_life in 1i32..5,
        inv1 in arb_inventory(),
        inv2 in arb_inventory(),
    ) -> GameState {
        let state = GameState::new(Chamber::from(shells), init_life);
        let inventory = state.inventory
            .with(Player::Player1, inv1)
            .with(Player::Player2, inv2);
        state.with_inventories(inventory)
    }
}

fn arb_actions() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..64, 1..40)
}

// =============================================================================
// Properties over random play
// =============================================================================

proptest! {
    /// Life never climbs above the starting cap, no matter what is played.
    #[test]
    fn prop_life_never_exceeds_init(state in arb_state(), picks in arb_actions(), seed: u64) {
        let engine = engine();
        let mut rng = GameRng::new(seed);
        let mut state = state;

        for pick in picks {
            let legal = engine.available_actions(&state);
            let action = legal[pick % legal.len()];
            state = engine.dispatch(&state, action, &mut rng);

            for player in Player::ALL {
                prop_assert!(state.life[player] <= state.init_life);
            }
            if engine.winner(&state).is_some() {
                break;
            }
        }
    }

    /// An undecided game always has both players above zero and a non-empty
    /// chamber (the reload fires inside the same dispatch that emptied it).
    #[test]
    fn prop_live_games_are_well_formed(state in arb_state(), picks in arb_actions(), seed: u64) {
        let engine = engine();
        let mut rng = GameRng::new(seed);
        let mut state = state;

        for pick in picks {
            let legal = engine.available_actions(&state);
            let action = legal[pick % legal.len()];
            state = engine.dispatch(&state, action, &mut rng);

            if engine.winner(&state).is_none() {
                prop_assert!(state.life[Player::Player1] > 0);
                prop_assert!(state.life[Player::Player2] > 0);
                prop_assert!(!state.chamber.is_empty());
            } else {
                break;
            }
        }
    }

    /// Reload only ever adds items, and never past the per-player cap when
    /// starting from within it.
    #[test]
    fn prop_item_totals_bounded(state in arb_state(), picks in arb_actions(), seed: u64) {
        let engine = engine();
        let cap = engine.config().max_items_per_player;
        let mut rng = GameRng::new(seed);
        let mut state = state;

        for pick in picks {
            let legal = engine.available_actions(&state);
            let action = legal[pick % legal.len()];
            let before: Vec<usize> = Player::ALL
                .iter()
                .map(|&p| state.inventory[p].total())
                .collect();

            state = engine.dispatch(&state, action, &mut rng);

            for (i, &p) in Player::ALL.iter().enumerate() {
                let total = state.inventory[p].total();
                prop_assert!(total <= before[i].max(cap));
            }
            if engine.winner(&state).is_some() {
                break;
            }
        }
    }

    /// Dispatch is deterministic given the same RNG stream.
    #[test]
    fn prop_dispatch_deterministic(state in arb_state(), pick in 0usize..64, seed: u64) {
        let engine = engine();
        let legal = engine.available_actions(&state);
        let action = legal[pick % legal.len()];

        let a = engine.dispatch(&state, action, &mut GameRng::new(seed));
        let b = engine.dispatch(&state, action, &mut GameRng::new(seed));
        prop_assert_eq!(a, b);
    }

    /// Terminal states absorb every action.
    #[test]
    fn prop_terminal_states_absorb(state in arb_state(), pick in 0usize..8, seed: u64) {
        let engine = engine();
        let dead = state.add_life(Player::Player2, -state.init_life);
        prop_assert_eq!(engine.winner(&dead), Some(Player::Player1));

        let action = Action::ALL[pick % Action::ALL.len()];
        let next = engine.dispatch(&dead, action, &mut GameRng::new(seed));
        prop_assert_eq!(next, dead);
    }
}

// =============================================================================
// Concrete turn-pass matrix
// =============================================================================

#[test]
fn test_blank_self_shot_reloads_and_keeps_turn() {
    let engine = engine();
    let state = GameState::new(Chamber::from(vec![Shell::Blank]), 3);

    let next = engine.dispatch(&state, Action::ShootSelf, &mut GameRng::new(0));

    assert_eq!(next.turn, Player::Player1);
    assert_eq!(next.life[Player::Player1], 3);
    assert!(!next.chamber.is_empty());
}

#[test]
fn test_sawed_live_opponent_shot_double_damage_and_pass() {
    let engine = engine();
    let state = GameState::new(Chamber::from(vec![Shell::Live]), 3).saw_shotgun(true);

    let next = engine.dispatch(&state, Action::ShootOpponent, &mut GameRng::new(0));

    assert_eq!(next.life[Player::Player2], 1);
    assert_eq!(next.turn, Player::Player2);
    assert!(!next.shotgun_sawed);
    assert!(!next.chamber.is_empty());
}

#[test]
fn test_missing_item_action_is_noop_and_unlisted() {
    let engine = engine();
    let state = GameState::new(Chamber::from(vec![Shell::Live, Shell::Blank]), 3);
    assert_eq!(state.inventory[Player::Player1].count(Item::Handcuffs), 0);

    let next = engine.dispatch(&state, Action::UseHandcuffs, &mut GameRng::new(0));
    assert_eq!(next, state);
    assert!(!engine
        .available_actions(&state)
        .contains(&Action::UseHandcuffs));
}

#[test]
fn test_action_tags_are_wire_stable() {
    // Stable string tags usable as a wire-level selector.
    let tags: Vec<&str> = Action::ALL.iter().map(|a| a.as_str()).collect();
    assert_eq!(
        tags,
        vec![
            "ShootSelf",
            "ShootOpponent",
            "UseHandcuffs",
            "UseBeer",
            "UseMagnifyingGlass",
            "UseCigarettes",
            "UseHandSaw",
        ]
    );
    for action in Action::ALL {
        assert_eq!(Action::parse(action.as_str()).unwrap(), action);
    }
}
