//! Loop detection for agents whose picks can be engine no-ops.
//!
//! An agent that keeps choosing an action the dispatcher ignores (an item
//! with zero count, under imperfect fingerprinting) would stall a game
//! forever. The guard watches observation fingerprints: an unchanged
//! fingerprint means the previous action changed nothing visible, so that
//! (fingerprint, action) pair is banned for the rest of the run.

use rustc_hash::FxHashSet;

use crate::core::Action;
use crate::error::Error;
use crate::obs::Observation;

use super::monte_carlo::Agent;

/// Wraps an agent and permanently bans actions observed to be no-ops.
pub struct LoopGuard<A> {
    inner: A,
    last: Option<(u64, Action)>,
    banned: FxHashSet<(u64, Action)>,
}

impl<A: Agent> LoopGuard<A> {
    #[must_use]
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            last: None,
            banned: FxHashSet::default(),
        }
    }

    /// The wrapped agent.
    #[must_use]
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Agent> Agent for LoopGuard<A> {
    fn act(&mut self, obs: &Observation) -> Result<Action, Error> {
        let fingerprint = obs.fingerprint();

        // Unchanged fingerprint: the last action was a visible no-op.
        if let Some((last_fingerprint, last_action)) = self.last {
            if last_fingerprint == fingerprint {
                self.banned.insert((fingerprint, last_action));
            }
        }

        let is_banned = |action: Action| self.banned.contains(&(fingerprint, action));
        if Action::ALL.iter().all(|&a| is_banned(a)) {
            return Err(Error::NoActionLeft);
        }

        // Re-query the policy a bounded number of times, then fall back to
        // the first unbanned action so a deterministic inner policy stuck
        // on a banned choice cannot spin forever.
        let mut choice = None;
        for _ in 0..Action::ALL.len() {
            let action = self.inner.act(obs)?;
            if !self.banned.contains(&(fingerprint, action)) {
                choice = Some(action);
                break;
            }
        }
        let action = match choice {
            Some(action) => action,
            None => Action::ALL
                .iter()
                .copied()
                .find(|&a| !self.banned.contains(&(fingerprint, a)))
                .ok_or(Error::NoActionLeft)?,
        };

        self.last = Some((fingerprint, action));
        Ok(action)
    }
}
