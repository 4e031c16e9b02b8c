//! Rule engine and random initializers.
//!
//! `engine` holds the dispatcher that advances states; `init` holds the
//! weighted random draws for fresh chambers, inventories, and the starting
//! state.

pub mod engine;
pub mod init;

pub use engine::{ActionList, RuleEngine, StandardDispatcher};
pub use init::{draw_inventories, initial_state, ChamberSpec};
