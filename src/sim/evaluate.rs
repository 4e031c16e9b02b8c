//! Monte Carlo win-probability estimation.

use rayon::prelude::*;

use crate::core::{GameRng, GameState};
use crate::rules::RuleEngine;

use super::rollout::{RandomRollout, RolloutSource};

/// Capability interface for scoring a state.
pub trait Evaluator {
    /// Empirical probability that Player 1 wins from `state`.
    ///
    /// Not perspective-normalized; callers invert for Player 2's view.
    fn evaluate(&self, state: &GameState, rng: &mut GameRng) -> f64;
}

/// Unbiased estimator: the win fraction over independent random rollouts.
#[derive(Clone, Debug)]
pub struct MonteCarloEvaluator<E> {
    rollout: RandomRollout<E>,
    trials: usize,
}

impl<E: RuleEngine> MonteCarloEvaluator<E> {
    /// `trials` rollouts per evaluation, at least one.
    #[must_use]
    pub fn new(engine: E, trials: usize) -> Self {
        Self {
            rollout: RandomRollout::new(engine),
            trials: trials.max(1),
        }
    }
}

impl<E: RuleEngine> Evaluator for MonteCarloEvaluator<E> {
    fn evaluate(&self, state: &GameState, rng: &mut GameRng) -> f64 {
        let wins = (0..self.trials)
            .filter(|_| self.rollout.rollout(state, rng).player1_won)
            .count();
        wins as f64 / self.trials as f64
    }
}

impl<E: RuleEngine + Sync> MonteCarloEvaluator<E> {
    /// Same estimator, rollouts spread across the rayon pool.
    ///
    /// Each trial gets its own RNG fork, so the result is deterministic for
    /// a given starting RNG state regardless of worker scheduling; the final
    /// reduction is a plain sum of independent outcomes.
    pub fn evaluate_parallel(&self, state: &GameState, rng: &mut GameRng) -> f64 {
        let streams: Vec<GameRng> = (0..self.trials).map(|_| rng.fork()).collect();

        let wins: usize = streams
            .into_par_iter()
            .filter_map(|mut stream| {
                self.rollout
                    .rollout(state, &mut stream)
                    .player1_won
                    .then_some(())
            })
            .count();
        wins as f64 / self.trials as f64
    }
}
