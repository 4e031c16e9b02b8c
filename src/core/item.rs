//! Single-use items and per-player inventories.
//!
//! `Item` declaration order is a serialization contract: the observation
//! vector lays out inventory counts in this exact order, and decoders depend
//! on it. Reorder only together with the codec and its tests.

use serde::{Deserialize, Serialize};

/// The fixed item pool. The shotgun itself is not an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    /// Suppresses the opponent's next turn once.
    Handcuffs,
    /// Ejects the next shell without firing it.
    Beer,
    /// Reveals the next shell without consuming it.
    MagnifyingGlass,
    /// Heals 1 life, capped at the starting life.
    Cigarettes,
    /// Doubles the next live shot's damage.
    HandSaw,
}

impl Item {
    /// All items, in declaration (serialization) order.
    pub const ALL: [Item; 5] = [
        Item::Handcuffs,
        Item::Beer,
        Item::MagnifyingGlass,
        Item::Cigarettes,
        Item::HandSaw,
    ];

    /// Number of distinct items.
    pub const COUNT: usize = Self::ALL.len();

    /// Ordinal within the serialization order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Item::Handcuffs => 0,
            Item::Beer => 1,
            Item::MagnifyingGlass => 2,
            Item::Cigarettes => 3,
            Item::HandSaw => 4,
        }
    }
}

/// Per-item counts for one player.
///
/// Backed by a fixed array indexed by item ordinal. Counts are never
/// negative: `removed` refuses to decrement past zero, and the engine's own
/// use-sites check availability first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inventory {
    counts: [u8; Item::COUNT],
}

impl Inventory {
    /// An empty inventory.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from counts in `Item::ALL` order.
    #[must_use]
    pub fn from_counts(counts: [u8; Item::COUNT]) -> Self {
        Self { counts }
    }

    /// Count of one item.
    #[must_use]
    pub fn count(&self, item: Item) -> u8 {
        self.counts[item.index()]
    }

    /// Total items held.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    #[must_use]
    pub fn has(&self, item: Item) -> bool {
        self.count(item) > 0
    }

    /// Copy with one more of `item`.
    #[must_use]
    pub fn added(&self, item: Item) -> Self {
        let mut next = *self;
        next.counts[item.index()] += 1;
        next
    }

    /// Copy with one fewer of `item`.
    ///
    /// Returns `None` if the count is already zero; decrementing below zero
    /// is forbidden.
    #[must_use]
    pub fn removed(&self, item: Item) -> Option<Self> {
        if self.counts[item.index()] == 0 {
            return None;
        }
        let mut next = *self;
        next.counts[item.index()] -= 1;
        Some(next)
    }

    /// Counts in `Item::ALL` order, as observation-vector integers.
    #[must_use]
    pub fn serialized(&self) -> [i32; Item::COUNT] {
        let mut out = [0i32; Item::COUNT];
        for (slot, &c) in out.iter_mut().zip(self.counts.iter()) {
            *slot = i32::from(c);
        }
        out
    }

    /// Flatten into one entry per held item, in `Item::ALL` order.
    ///
    /// Used by the reload top-up, which shuffles this list before drawing.
    #[must_use]
    pub fn flattened(&self) -> Vec<Item> {
        Item::ALL
            .iter()
            .flat_map(|&item| std::iter::repeat(item).take(self.count(item) as usize))
            .collect()
    }
}
