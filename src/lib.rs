//! # shellduel
//!
//! Simulator for a two-player, turn-based shotgun duel with hidden chamber
//! state, plus Monte Carlo agents that play it.
//!
//! ## Architecture
//!
//! Three tightly coupled pieces sit at the core:
//!
//! 1. A deterministic **rule engine** advancing `(state, action) -> state`,
//!    with all randomness (reload draws) injected through an explicit RNG.
//! 2. A **hidden-state reconstruction** layer rebuilding concrete states
//!    from the fixed-shape observation vector one player can see. The
//!    chamber's interior ordering is the only hidden information.
//! 3. A **Monte Carlo** layer estimating win probability by random rollout
//!    and choosing actions from it.
//!
//! Reconstruction feeds candidate states to the rollout engine, which in
//! turn drives the rule engine.
//!
//! ## Design Principles
//!
//! - **Immutable state values**: every transition builds a new `GameState`;
//!   the chamber uses a persistent vector so clones are cheap during
//!   rollouts.
//! - **Explicit randomness**: a seedable, forkable `GameRng` is threaded
//!   through every call that needs it. Rollouts are reproducible and
//!   trivially data-parallel.
//! - **Traits at the seams**: `RuleEngine`, `Reconstructor`,
//!   `RolloutSource`, `Evaluator`, and `Agent` are capability interfaces;
//!   concrete strategies compose rather than inherit.
//!
//! ## Modules
//!
//! - `core`: players, shells, items, actions, state, RNG, configuration
//! - `rules`: the dispatcher and the random initializers
//! - `obs`: observation codec and hidden-state reconstruction
//! - `sim`: random rollouts and Monte Carlo evaluation
//! - `agent`: decision agents and the loop guard
//! - `game`: in-process session facade for harnesses

pub mod agent;
pub mod core;
pub mod error;
pub mod game;
pub mod obs;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Action, Chamber, GameConfig, GameRng, GameState, Inventory, Item, Player, PlayerMap, Shell,
};

pub use crate::error::Error;

pub use crate::rules::{
    draw_inventories, initial_state, ActionList, ChamberSpec, RuleEngine, StandardDispatcher,
};

pub use crate::obs::{
    encode, ExhaustiveReconstructor, Observation, Reconstructor, SampledReconstructor,
    OBSERVATION_LEN,
};

pub use crate::sim::{
    Evaluator, MonteCarloEvaluator, RandomRollout, RolloutOutcome, RolloutSource,
};

pub use crate::agent::{Agent, AttributionAgent, ExpectationAgent, LoopGuard, RandomAgent};

pub use crate::game::{run_match, Game};
