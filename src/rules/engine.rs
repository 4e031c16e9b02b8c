//! The rule engine: advances a state by one action.
//!
//! `dispatch` is a pure function over the state value except for the reload
//! draw, which consumes randomness from the caller's `GameRng`. Terminal
//! states are absorbing: once a winner exists, every dispatch returns the
//! state unchanged.

use smallvec::SmallVec;

use crate::core::{Action, GameConfig, GameRng, GameState, Inventory, Player, PlayerMap, Shell};
use crate::error::Error;

use super::init::{draw_inventories, ChamberSpec};

/// Action list for one state. Seven actions at most, so no heap allocation.
pub type ActionList = SmallVec<[Action; 7]>;

/// Capability interface for advancing game states.
///
/// Implementations must be deterministic given the state, the action, and
/// the RNG stream, or rollouts lose reproducibility.
pub trait RuleEngine {
    /// Apply `action` to `state`, producing the successor state.
    ///
    /// Item actions whose inventory count is zero are defined no-ops, not
    /// errors. A state with a decided winner is returned unchanged.
    fn dispatch(&self, state: &GameState, action: Action, rng: &mut GameRng) -> GameState;

    /// Legal actions for the acting player, in fixed order: the two shots
    /// first, then item actions gated by count and precondition.
    fn available_actions(&self, state: &GameState) -> ActionList;

    /// The winner, if either player's life has reached zero.
    fn winner(&self, state: &GameState) -> Option<Player>;
}

/// The standard ruleset dispatcher.
#[derive(Clone, Debug)]
pub struct StandardDispatcher {
    config: GameConfig,
    chamber_spec: ChamberSpec,
}

impl StandardDispatcher {
    /// Build a dispatcher over validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            chamber_spec: ChamberSpec::from_config(&config),
            config,
        })
    }

    /// Override how reload chambers are composed. Used by tests that need
    /// scripted shell counts.
    #[must_use]
    pub fn with_chamber_spec(mut self, spec: ChamberSpec) -> Self {
        self.chamber_spec = spec;
        self
    }

    /// The configuration this dispatcher was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn apply(&self, state: &GameState, action: Action) -> GameState {
        match action {
            Action::ShootSelf => self.shoot(state, state.turn),
            Action::ShootOpponent => self.shoot(state, state.turn.opponent()),
            Action::UseHandcuffs
            | Action::UseBeer
            | Action::UseMagnifyingGlass
            | Action::UseCigarettes
            | Action::UseHandSaw => self.use_item(state, action),
        }
    }

    /// Resolve one shot at `target`.
    ///
    /// Turn-pass rule: the turn passes unless the shooter hit themselves
    /// with a blank. When a pass would occur while the handcuff flag is set,
    /// the flag is consumed instead and the shooter keeps the turn once.
    fn shoot(&self, state: &GameState, target: Player) -> GameState {
        let damage = match state.chamber.next_shell() {
            Some(Shell::Live) if state.shotgun_sawed => 2,
            Some(Shell::Live) => 1,
            _ => 0,
        };

        let state = state
            .pop_chamber()
            .add_life(target, -damage)
            .clear_reveal()
            .saw_shotgun(false);

        let passes = target != state.turn || damage > 0;
        if !passes {
            return state;
        }
        if state.opponent_handcuffed {
            state.cuff_opponent(false)
        } else {
            state.pass_turn()
        }
    }

    fn use_item(&self, state: &GameState, action: Action) -> GameState {
        let Some(item) = action.item() else {
            unreachable!("shots are handled in apply");
        };

        // Zero inventory: defined no-op.
        let Some(state) = state.take_item(item) else {
            return state.clone();
        };

        match action {
            Action::UseHandcuffs => state.cuff_opponent(true),
            Action::UseBeer => state.pop_chamber(),
            Action::UseMagnifyingGlass => state.reveal_shell(),
            Action::UseCigarettes => state.add_life(state.turn, 1),
            Action::UseHandSaw => state.saw_shotgun(true),
            Action::ShootSelf | Action::ShootOpponent => unreachable!(),
        }
    }

    /// Reload after a shot that emptied the chamber: fresh shells plus an
    /// item top-up for both players, capped per player.
    fn settle(&self, state: GameState, rng: &mut GameRng) -> GameState {
        if self.winner(&state).is_some() || !state.chamber.is_empty() {
            return state;
        }

        let chamber = self.chamber_spec.generate(rng);
        let fresh = draw_inventories(&self.config, rng);
        let mut inventory = state.inventory;
        for player in Player::ALL {
            inventory[player] = self.top_up(inventory[player], fresh[player], rng);
        }

        state.with_chamber(chamber).with_inventories(inventory)
    }

    /// Add items from `fresh` one at a time, in shuffled order, until the
    /// per-player cap is reached or the draw is exhausted. Never removes
    /// items already held, even when the board is over the cap.
    fn top_up(&self, held: Inventory, fresh: Inventory, rng: &mut GameRng) -> Inventory {
        let room = self.config.max_items_per_player.saturating_sub(held.total());
        if room == 0 {
            return held;
        }

        let mut candidates = fresh.flattened();
        rng.shuffle(&mut candidates);

        candidates
            .into_iter()
            .take(room)
            .fold(held, |inv, item| inv.added(item))
    }
}

impl RuleEngine for StandardDispatcher {
    fn dispatch(&self, state: &GameState, action: Action, rng: &mut GameRng) -> GameState {
        if self.winner(state).is_some() {
            return state.clone();
        }
        self.settle(self.apply(state, action), rng)
    }

    fn available_actions(&self, state: &GameState) -> ActionList {
        let mut actions: ActionList = SmallVec::new();
        actions.push(Action::ShootSelf);
        actions.push(Action::ShootOpponent);

        let inventory = state.acting_inventory();
        for action in &Action::ALL[2..] {
            let item = action.item().expect("item actions carry an item");
            if !inventory.has(item) {
                continue;
            }
            let blocked = match action {
                Action::UseHandcuffs => state.opponent_handcuffed,
                Action::UseMagnifyingGlass => state.shell_revealed.is_some(),
                Action::UseHandSaw => state.shotgun_sawed,
                _ => false,
            };
            if !blocked {
                actions.push(*action);
            }
        }

        actions
    }

    fn winner(&self, state: &GameState) -> Option<Player> {
        // Check order is part of the contract: Player 1 first.
        if state.life[Player::Player1] <= 0 {
            return Some(Player::Player2);
        }
        if state.life[Player::Player2] <= 0 {
            return Some(Player::Player1);
        }
        None
    }
}
