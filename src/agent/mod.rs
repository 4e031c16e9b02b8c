//! Decision agents and the loop guard.

pub mod loop_guard;
pub mod monte_carlo;

pub use loop_guard::LoopGuard;
pub use monte_carlo::{Agent, AttributionAgent, ExpectationAgent, RandomAgent};
