//! Core value types: players, shells, items, actions, state, RNG, config.
//!
//! Everything here is a plain value with well-formedness invariants; the
//! game rules live in `crate::rules`.

pub mod action;
pub mod config;
pub mod item;
pub mod player;
pub mod rng;
pub mod shell;
pub mod state;

pub use action::Action;
pub use config::GameConfig;
pub use item::{Inventory, Item};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use shell::{Chamber, Shell};
pub use state::GameState;
