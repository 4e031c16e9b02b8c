//! Random playouts to a terminal state.

use crate::core::{Action, GameRng, GameState, Player};
use crate::rules::RuleEngine;

/// Result of one playout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RolloutOutcome {
    /// Whether Player 1 ended up the winner.
    pub player1_won: bool,
    /// Every action taken, in order. The first element is the action chosen
    /// at the root state.
    pub actions: Vec<Action>,
}

/// Capability interface for playing a state out to completion.
pub trait RolloutSource {
    /// Play from `state` until a winner exists.
    ///
    /// Terminates almost surely: every chamber empties within finitely many
    /// actions and every reload gives each shot a nonzero chance of ending
    /// the game. Callers that need a hard bound impose it externally.
    fn rollout(&self, state: &GameState, rng: &mut GameRng) -> RolloutOutcome;
}

/// Plays uniformly random legal actions.
#[derive(Clone, Debug)]
pub struct RandomRollout<E> {
    engine: E,
}

impl<E: RuleEngine> RandomRollout<E> {
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// The engine driving this rollout.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: RuleEngine> RolloutSource for RandomRollout<E> {
    fn rollout(&self, state: &GameState, rng: &mut GameRng) -> RolloutOutcome {
        let mut state = state.clone();
        let mut actions = Vec::new();

        loop {
            if let Some(winner) = self.engine.winner(&state) {
                return RolloutOutcome {
                    player1_won: winner == Player::Player1,
                    actions,
                };
            }
            let legal = self.engine.available_actions(&state);
            let action = legal[rng.gen_range(0..legal.len())];
            actions.push(action);
            state = self.engine.dispatch(&state, action, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Chamber, GameConfig, Shell};
    use crate::rules::StandardDispatcher;

    fn rollout_source() -> RandomRollout<StandardDispatcher> {
        RandomRollout::new(StandardDispatcher::new(GameConfig::default()).unwrap())
    }

    #[test]
    fn test_rollout_reaches_terminal_state() {
        let source = rollout_source();
        let state = GameState::new(Chamber::from(vec![Shell::Live, Shell::Blank]), 2);
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            let outcome = source.rollout(&state, &mut rng);
            assert!(!outcome.actions.is_empty());
        }
    }

    #[test]
    fn test_rollout_on_terminal_state_is_empty() {
        let source = rollout_source();
        let dead = GameState::new(Chamber::from(vec![Shell::Live]), 2)
            .add_life(Player::Player2, -2);

        let outcome = source.rollout(&dead, &mut GameRng::new(0));
        assert!(outcome.player1_won);
        assert!(outcome.actions.is_empty());
    }

    #[test]
    fn test_rollout_is_seed_deterministic() {
        let source = rollout_source();
        let state = GameState::new(Chamber::from(vec![Shell::Live, Shell::Blank]), 3);

        let a = source.rollout(&state, &mut GameRng::new(5));
        let b = source.rollout(&state, &mut GameRng::new(5));

        assert_eq!(a, b);
    }

    #[test]
    fn test_single_live_shell_first_action_decides_fast() {
        // Chamber [Live], no items: either shot fires the live round.
        let source = rollout_source();
        let state = GameState::new(Chamber::from(vec![Shell::Live]), 1);
        let mut rng = GameRng::new(9);

        let outcome = source.rollout(&state, &mut rng);
        assert_eq!(outcome.actions.len(), 1);
        match outcome.actions[0] {
            Action::ShootOpponent => assert!(outcome.player1_won),
            Action::ShootSelf => assert!(!outcome.player1_won),
            other => panic!("unexpected action {other}"),
        }
    }
}
