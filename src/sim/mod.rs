//! Monte Carlo machinery: random rollouts and win-probability estimation.

pub mod evaluate;
pub mod rollout;

pub use evaluate::{Evaluator, MonteCarloEvaluator};
pub use rollout::{RandomRollout, RolloutOutcome, RolloutSource};
