//! Crate-wide error type.

use thiserror::Error;

/// Everything that can go wrong at the crate boundary.
///
/// The rule engine itself is total over its inputs: item actions with zero
/// inventory are defined no-ops, not errors. Errors arise at the edges
/// (parsing wire tags, validating configuration, decoding observations,
/// loop-guard exhaustion).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An action tag that names no known action.
    #[error("unknown action tag: {0}")]
    InvalidAction(String),

    /// Configuration that cannot produce a valid game.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An observation vector no reachable state could have produced.
    #[error("inconsistent observation: {0}")]
    BadObservation(String),

    /// The loop guard banned every action for the current observation.
    #[error("no unbanned action remains for this observation")]
    NoActionLeft,
}
