//! Decision agents: pick an action from an observation.
//!
//! Both Monte Carlo agents bridge the hidden chamber the same way: rebuild
//! candidate states consistent with the observation, then let random
//! rollouts score actions. They differ in how rollout results are
//! aggregated.

use crate::core::{Action, GameRng};
use crate::error::Error;
use crate::obs::{Observation, Reconstructor};
use crate::rules::RuleEngine;
use crate::sim::{Evaluator, MonteCarloEvaluator, RandomRollout, RolloutSource};

/// Capability interface for acting players.
///
/// The observation is from the acting player's own perspective; the
/// returned action must come from the fixed action set.
pub trait Agent {
    fn act(&mut self, obs: &Observation) -> Result<Action, Error>;
}

/// Picks uniformly among all action tags, legal or not.
///
/// Illegal picks dispatch as no-ops, so this agent is normally wrapped in a
/// [`LoopGuard`](crate::agent::LoopGuard). Useful as a baseline opponent.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, _obs: &Observation) -> Result<Action, Error> {
        Ok(Action::ALL[self.rng.gen_range(0..Action::ALL.len())])
    }
}

/// Expectation aggregation: score every action by summed win probability
/// over all reconstructed candidates, take the argmax.
///
/// Ties break to the earlier action in `Action::ALL` order. Actions that
/// are no-ops for every candidate score like "do nothing" and lose to any
/// action with positive expected value; callers that must avoid them wrap
/// this agent in a loop guard.
pub struct ExpectationAgent<E, R> {
    engine: E,
    evaluator: MonteCarloEvaluator<E>,
    reconstructor: R,
    rng: GameRng,
}

impl<E, R> ExpectationAgent<E, R>
where
    E: RuleEngine + Clone,
    R: Reconstructor,
{
    /// `trials` rollouts per (candidate, action) evaluation.
    pub fn new(engine: E, reconstructor: R, trials: usize, seed: u64) -> Self {
        Self {
            evaluator: MonteCarloEvaluator::new(engine.clone(), trials),
            engine,
            reconstructor,
            rng: GameRng::new(seed),
        }
    }
}

impl<E, R> Agent for ExpectationAgent<E, R>
where
    E: RuleEngine + Clone,
    R: Reconstructor,
{
    fn act(&mut self, obs: &Observation) -> Result<Action, Error> {
        let candidates = self.reconstructor.reconstruct(obs, &mut self.rng)?;

        let mut best = Action::ALL[0];
        let mut best_score = f64::NEG_INFINITY;
        for action in Action::ALL {
            let mut score = 0.0;
            for candidate in &candidates {
                let next = self.engine.dispatch(candidate, action, &mut self.rng);
                score += self.evaluator.evaluate(&next, &mut self.rng);
            }
            // Strict comparison keeps the first action on ties.
            if score > best_score {
                best = action;
                best_score = score;
            }
        }
        Ok(best)
    }
}

/// Rollout attribution: run whole rollouts from random candidates and credit
/// each outcome to the rollout's first action.
///
/// Each action's score is its empirical win ratio over the trials where it
/// was the opening action; actions never observed are excluded rather than
/// scored zero.
pub struct AttributionAgent<E, R> {
    rollout: RandomRollout<E>,
    reconstructor: R,
    num_trials: usize,
    rng: GameRng,
}

impl<E, R> AttributionAgent<E, R>
where
    E: RuleEngine,
    R: Reconstructor,
{
    pub fn new(engine: E, reconstructor: R, num_trials: usize, seed: u64) -> Self {
        Self {
            rollout: RandomRollout::new(engine),
            reconstructor,
            num_trials: num_trials.max(1),
            rng: GameRng::new(seed),
        }
    }
}

impl<E, R> Agent for AttributionAgent<E, R>
where
    E: RuleEngine,
    R: Reconstructor,
{
    fn act(&mut self, obs: &Observation) -> Result<Action, Error> {
        let candidates = self.reconstructor.reconstruct(obs, &mut self.rng)?;

        let mut wins = [0u32; Action::ALL.len()];
        let mut losses = [0u32; Action::ALL.len()];

        for _ in 0..self.num_trials {
            let candidate = &candidates[self.rng.gen_range(0..candidates.len())];
            let outcome = self.rollout.rollout(candidate, &mut self.rng);
            let Some(&first) = outcome.actions.first() else {
                continue;
            };
            if outcome.player1_won {
                wins[first as usize] += 1;
            } else {
                losses[first as usize] += 1;
            }
        }

        let mut best = None;
        let mut best_ratio = f64::NEG_INFINITY;
        for action in Action::ALL {
            let w = wins[action as usize];
            let l = losses[action as usize];
            if w + l == 0 {
                continue;
            }
            let ratio = f64::from(w) / f64::from(w + l);
            if ratio > best_ratio {
                best = Some(action);
                best_ratio = ratio;
            }
        }

        // Every rollout ended before its first action only if the state was
        // already terminal; fall back to the first action tag.
        Ok(best.unwrap_or(Action::ALL[0]))
    }
}
