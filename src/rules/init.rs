//! Random initializers: chambers, inventories, and the starting state.
//!
//! These are plain weighted draws with no internal state machine. All
//! randomness comes through the caller's `GameRng`.

use crate::core::{Chamber, GameConfig, GameRng, GameState, Inventory, Item, PlayerMap, Shell};
use crate::error::Error;

/// How fresh chambers are composed, both at game start and on reload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChamberSpec {
    /// Random size within bounds, with at least one live and one blank.
    Bounded { min_shells: usize, max_shells: usize },
    /// Exact composition, shuffled. Used by tests and scripted scenarios.
    Fixed { lives: usize, blanks: usize },
}

impl ChamberSpec {
    /// The bounded spec implied by a config.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        ChamberSpec::Bounded {
            min_shells: config.min_shells,
            max_shells: config.max_shells,
        }
    }

    /// Draw a fresh chamber.
    pub fn generate(&self, rng: &mut GameRng) -> Chamber {
        let (lives, blanks) = match *self {
            ChamberSpec::Bounded {
                min_shells,
                max_shells,
            } => {
                let total = rng.gen_range_inclusive(min_shells..=max_shells);
                let lives = rng.gen_range_inclusive(1..=total - 1);
                (lives, total - lives)
            }
            ChamberSpec::Fixed { lives, blanks } => (lives, blanks),
        };

        let mut shells: Vec<Shell> = std::iter::repeat(Shell::Live)
            .take(lives)
            .chain(std::iter::repeat(Shell::Blank).take(blanks))
            .collect();
        rng.shuffle(&mut shells);
        Chamber::from(shells)
    }
}

/// Draw one inventory of `count` uniformly random items.
pub fn draw_inventory(count: usize, rng: &mut GameRng) -> Inventory {
    let mut inventory = Inventory::empty();
    for _ in 0..count {
        let item = Item::ALL[rng.gen_range(0..Item::COUNT)];
        inventory = inventory.added(item);
    }
    inventory
}

/// Draw both players' inventories, same item count each, independent picks.
pub fn draw_inventories(config: &GameConfig, rng: &mut GameRng) -> PlayerMap<Inventory> {
    let count = rng.gen_range_inclusive(config.min_items_per_draw..=config.max_items_per_draw);
    let first = draw_inventory(count, rng);
    let second = draw_inventory(count, rng);
    PlayerMap::new(|p| match p.index() {
        0 => first,
        _ => second,
    })
}

/// Build a valid starting state from configured bounds.
///
/// Player 1 acts first; both players start at the same randomly drawn life.
/// Fails with `Error::InvalidConfig` before any state exists if the bounds
/// are malformed.
pub fn initial_state(config: &GameConfig, rng: &mut GameRng) -> Result<GameState, Error> {
    config.validate()?;

    let init_life = {
        let lo = config.min_initial_life as usize;
        let hi = config.max_initial_life as usize;
        rng.gen_range_inclusive(lo..=hi) as i32
    };
    let chamber = ChamberSpec::from_config(config).generate(rng);
    let inventory = draw_inventories(config, rng);

    Ok(GameState {
        inventory,
        ..GameState::new(chamber, init_life)
    })
}
