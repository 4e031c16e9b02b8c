//! Player actions and their wire-level tags.
//!
//! `Action::ALL` order is part of the public contract: `available_actions`
//! lists shots before items, and the expectation-aggregation agent breaks
//! ties by first occurrence in this order.

use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::error::Error;

/// Everything a player can do on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    ShootSelf,
    ShootOpponent,
    UseHandcuffs,
    UseBeer,
    UseMagnifyingGlass,
    UseCigarettes,
    UseHandSaw,
}

impl Action {
    /// All actions, in the fixed enumeration order.
    pub const ALL: [Action; 7] = [
        Action::ShootSelf,
        Action::ShootOpponent,
        Action::UseHandcuffs,
        Action::UseBeer,
        Action::UseMagnifyingGlass,
        Action::UseCigarettes,
        Action::UseHandSaw,
    ];

    /// The item this action consumes, if it is an item action.
    #[must_use]
    pub const fn item(self) -> Option<Item> {
        match self {
            Action::ShootSelf | Action::ShootOpponent => None,
            Action::UseHandcuffs => Some(Item::Handcuffs),
            Action::UseBeer => Some(Item::Beer),
            Action::UseMagnifyingGlass => Some(Item::MagnifyingGlass),
            Action::UseCigarettes => Some(Item::Cigarettes),
            Action::UseHandSaw => Some(Item::HandSaw),
        }
    }

    /// Stable wire tag, usable as an action selector from a human interface.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::ShootSelf => "ShootSelf",
            Action::ShootOpponent => "ShootOpponent",
            Action::UseHandcuffs => "UseHandcuffs",
            Action::UseBeer => "UseBeer",
            Action::UseMagnifyingGlass => "UseMagnifyingGlass",
            Action::UseCigarettes => "UseCigarettes",
            Action::UseHandSaw => "UseHandSaw",
        }
    }

    /// Parse a wire tag. Unknown tags are a fatal caller error.
    pub fn parse(tag: &str) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == tag)
            .ok_or_else(|| Error::InvalidAction(tag.to_string()))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
