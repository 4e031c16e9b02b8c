//! Shells and the shared chamber.
//!
//! The chamber is an ordered sequence consumed from the *tail*: the last
//! element is the next round to fire. It is backed by `im::Vector` so that
//! cloning a `GameState` during rollouts shares structure instead of copying.

use im::Vector;
use serde::{Deserialize, Serialize};

/// One round in the chamber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shell {
    Live,
    Blank,
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shell::Live => write!(f, "live"),
            Shell::Blank => write!(f, "blank"),
        }
    }
}

/// Ordered pending-shell sequence, consumed from the tail.
///
/// An empty chamber is a valid transient value; the rule engine reloads it
/// after the shot that emptied it resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chamber {
    shells: Vector<Shell>,
}

impl Chamber {
    /// An empty chamber.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of pending shells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }

    /// The next shell to fire, if any.
    #[must_use]
    pub fn next_shell(&self) -> Option<Shell> {
        self.shells.last().copied()
    }

    /// Copy with the tail shell removed. No-op on an empty chamber.
    #[must_use]
    pub fn popped(&self) -> Self {
        let mut shells = self.shells.clone();
        shells.pop_back();
        Self { shells }
    }

    /// Count shells of one kind.
    #[must_use]
    pub fn count(&self, kind: Shell) -> usize {
        self.shells.iter().filter(|&&s| s == kind).count()
    }

    /// Iterate from the breech end (index 0 fires last).
    pub fn iter(&self) -> impl Iterator<Item = &Shell> {
        self.shells.iter()
    }
}

impl FromIterator<Shell> for Chamber {
    fn from_iter<I: IntoIterator<Item = Shell>>(iter: I) -> Self {
        Self {
            shells: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Shell>> for Chamber {
    fn from(shells: Vec<Shell>) -> Self {
        shells.into_iter().collect()
    }
}
