//! In-process session facade.
//!
//! `Game` owns the current state, the dispatcher, and the RNG, and is the
//! boundary a harness (CLI, tester, trainer) talks to. Rendering is the
//! `Display` impl on `GameState`; nothing here is needed for engine
//! correctness.

use crate::agent::Agent;
use crate::core::{Action, GameConfig, GameRng, GameState, Player};
use crate::error::Error;
use crate::obs::{encode, Observation};
use crate::rules::{initial_state, ActionList, RuleEngine, StandardDispatcher};

/// One running duel.
pub struct Game {
    engine: StandardDispatcher,
    state: GameState,
    rng: GameRng,
}

impl Game {
    /// Initialize a fresh game from configured bounds.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, Error> {
        let engine = StandardDispatcher::new(config)?;
        let mut rng = GameRng::new(seed);
        let state = initial_state(&config, &mut rng)?;
        Ok(Self { engine, state, rng })
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The engine driving this game.
    #[must_use]
    pub fn engine(&self) -> &StandardDispatcher {
        &self.engine
    }

    /// Whose action is next.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.state.turn
    }

    /// The winner, if decided.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.engine.winner(&self.state)
    }

    /// Legal actions for the acting player.
    #[must_use]
    pub fn available_actions(&self) -> ActionList {
        self.engine.available_actions(&self.state)
    }

    /// The acting player's view of the state.
    #[must_use]
    pub fn observe(&self) -> Observation {
        encode(&self.state, self.state.turn)
    }

    /// Apply one action. Returns whether the state actually changed, so
    /// harnesses can tell a no-op from a real move.
    pub fn do_action(&mut self, action: Action) -> bool {
        let next = self.engine.dispatch(&self.state, action, &mut self.rng);
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

/// Pit two agents against each other until a winner or the step cap.
///
/// The rollout layer guarantees termination only almost surely, so match
/// harnesses impose the hard bound externally; `None` means the cap was hit
/// first. Agent errors (loop-guard exhaustion, bad observations) propagate.
pub fn run_match(
    game: &mut Game,
    agent1: &mut dyn Agent,
    agent2: &mut dyn Agent,
    max_steps: usize,
) -> Result<Option<Player>, Error> {
    for _ in 0..max_steps {
        if let Some(winner) = game.winner() {
            return Ok(Some(winner));
        }

        let observation = game.observe();
        let action = match game.turn() {
            Player::Player1 => agent1.act(&observation)?,
            Player::Player2 => agent2.act(&observation)?,
        };
        game.do_action(action);
    }
    Ok(game.winner())
}
