//! Observation codec and hidden-state reconstruction.
//!
//! `encoder` projects a state into the fixed-shape vector one player can
//! see; `reconstruct` inverts it, rebuilding concrete candidate states that
//! differ only in the hidden chamber ordering.

pub mod encoder;
pub mod reconstruct;

pub use encoder::{encode, Observation, OBSERVATION_LEN};
pub use reconstruct::{ExhaustiveReconstructor, Reconstructor, SampledReconstructor};
