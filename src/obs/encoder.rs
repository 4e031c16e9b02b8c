//! Observation codec: what one player can see of the state.
//!
//! The observation is a fixed-length integer vector, perspective-normalized
//! so that "self" always means the viewer. The layout is bit-exact and index
//! positions are a wire contract shared with the reconstructor:
//!
//! | index        | field                                   |
//! |--------------|-----------------------------------------|
//! | 0            | live shells in chamber                  |
//! | 1            | blank shells in chamber                 |
//! | 2            | starting life                           |
//! | 3            | self life                               |
//! | 4            | opponent life                           |
//! | 5..10        | self item counts, `Item::ALL` order     |
//! | 10..15       | opponent item counts, `Item::ALL` order |
//! | 15           | opponent handcuffed                     |
//! | 16           | revealed shell is live                  |
//! | 17           | revealed shell is blank                 |
//! | 18           | shotgun sawed                           |
//!
//! The chamber's interior ordering is exactly what the vector hides.

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::core::{GameState, Item, Player, Shell};

/// Total vector length.
pub const OBSERVATION_LEN: usize = 5 + 2 * Item::COUNT + 4;

const IDX_LIVE: usize = 0;
const IDX_BLANK: usize = 1;
const IDX_INIT_LIFE: usize = 2;
const IDX_SELF_LIFE: usize = 3;
const IDX_OPP_LIFE: usize = 4;
const IDX_SELF_ITEMS: usize = 5;
const IDX_OPP_ITEMS: usize = IDX_SELF_ITEMS + Item::COUNT;
const IDX_CUFFED: usize = IDX_OPP_ITEMS + Item::COUNT;
const IDX_REVEALED_LIVE: usize = IDX_CUFFED + 1;
const IDX_REVEALED_BLANK: usize = IDX_CUFFED + 2;
const IDX_SAWED: usize = IDX_CUFFED + 3;

/// One player's view of a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    values: [i32; OBSERVATION_LEN],
}

/// Project `state` into the vector visible to `viewer`.
///
/// Self/opponent positions are swapped when the viewer is Player 2, so the
/// same decoder serves both seats.
#[must_use]
pub fn encode(state: &GameState, viewer: Player) -> Observation {
    let mut values = [0i32; OBSERVATION_LEN];

    values[IDX_LIVE] = state.chamber.count(Shell::Live) as i32;
    values[IDX_BLANK] = state.chamber.count(Shell::Blank) as i32;
    values[IDX_INIT_LIFE] = state.init_life;
    values[IDX_SELF_LIFE] = state.life[viewer];
    values[IDX_OPP_LIFE] = state.life[viewer.opponent()];

    let self_items = state.inventory[viewer].serialized();
    let opp_items = state.inventory[viewer.opponent()].serialized();
    values[IDX_SELF_ITEMS..IDX_SELF_ITEMS + Item::COUNT].copy_from_slice(&self_items);
    values[IDX_OPP_ITEMS..IDX_OPP_ITEMS + Item::COUNT].copy_from_slice(&opp_items);

    values[IDX_CUFFED] = i32::from(state.opponent_handcuffed);
    values[IDX_REVEALED_LIVE] = i32::from(state.shell_revealed == Some(Shell::Live));
    values[IDX_REVEALED_BLANK] = i32::from(state.shell_revealed == Some(Shell::Blank));
    values[IDX_SAWED] = i32::from(state.shotgun_sawed);

    Observation { values }
}

impl Observation {
    /// Build from a raw vector, e.g. one received from a harness.
    #[must_use]
    pub fn from_values(values: [i32; OBSERVATION_LEN]) -> Self {
        Self { values }
    }

    /// The raw vector.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Cheap fingerprint for loop detection.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.values.hash(&mut hasher);
        hasher.finish()
    }

    pub(crate) fn live_count(&self) -> i32 {
        self.values[IDX_LIVE]
    }

    pub(crate) fn blank_count(&self) -> i32 {
        self.values[IDX_BLANK]
    }

    pub(crate) fn init_life(&self) -> i32 {
        self.values[IDX_INIT_LIFE]
    }

    pub(crate) fn self_life(&self) -> i32 {
        self.values[IDX_SELF_LIFE]
    }

    pub(crate) fn opponent_life(&self) -> i32 {
        self.values[IDX_OPP_LIFE]
    }

    pub(crate) fn self_items(&self) -> &[i32] {
        &self.values[IDX_SELF_ITEMS..IDX_SELF_ITEMS + Item::COUNT]
    }

    pub(crate) fn opponent_items(&self) -> &[i32] {
        &self.values[IDX_OPP_ITEMS..IDX_OPP_ITEMS + Item::COUNT]
    }

    pub(crate) fn opponent_handcuffed(&self) -> bool {
        self.values[IDX_CUFFED] != 0
    }

    pub(crate) fn revealed_live(&self) -> bool {
        self.values[IDX_REVEALED_LIVE] != 0
    }

    pub(crate) fn revealed_blank(&self) -> bool {
        self.values[IDX_REVEALED_BLANK] != 0
    }

    pub(crate) fn sawed(&self) -> bool {
        self.values[IDX_SAWED] != 0
    }
}
