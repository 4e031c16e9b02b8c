//! Game configuration bounds.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Bounds the initializers and the reload draw from.
///
/// Validation happens at construction time, before any state exists: a
/// config that cannot guarantee at least one live and one blank shell per
/// chamber is rejected outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fewest shells per fresh chamber. Must be >= 2 so every chamber can
    /// hold at least one live and one blank round.
    pub min_shells: usize,
    /// Most shells per fresh chamber.
    pub max_shells: usize,
    /// Fewest items handed to each player per draw.
    pub min_items_per_draw: usize,
    /// Most items handed to each player per draw.
    pub max_items_per_draw: usize,
    /// Hard cap on items a player may hold; reload top-ups never exceed it.
    pub max_items_per_player: usize,
    /// Lowest possible starting life.
    pub min_initial_life: i32,
    /// Highest possible starting life.
    pub max_initial_life: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_shells: 3,
            max_shells: 8,
            min_items_per_draw: 2,
            max_items_per_draw: 4,
            max_items_per_player: 8,
            min_initial_life: 2,
            max_initial_life: 3,
        }
    }
}

impl GameConfig {
    /// Builder-style override for the shell-count range.
    #[must_use]
    pub fn with_shells(mut self, min: usize, max: usize) -> Self {
        self.min_shells = min;
        self.max_shells = max;
        self
    }

    /// Builder-style override for the items-per-draw range.
    #[must_use]
    pub fn with_items_per_draw(mut self, min: usize, max: usize) -> Self {
        self.min_items_per_draw = min;
        self.max_items_per_draw = max;
        self
    }

    /// Builder-style override for the per-player item cap.
    #[must_use]
    pub fn with_item_cap(mut self, cap: usize) -> Self {
        self.max_items_per_player = cap;
        self
    }

    /// Builder-style override for the starting-life range.
    #[must_use]
    pub fn with_initial_life(mut self, min: i32, max: i32) -> Self {
        self.min_initial_life = min;
        self.max_initial_life = max;
        self
    }

    /// Reject configurations that cannot produce a valid game.
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_shells < 2 {
            return Err(Error::InvalidConfig(
                "min_shells must be at least 2 (one live and one blank)".into(),
            ));
        }
        if self.max_shells < self.min_shells {
            return Err(Error::InvalidConfig(
                "max_shells must be >= min_shells".into(),
            ));
        }
        if self.max_items_per_draw < self.min_items_per_draw {
            return Err(Error::InvalidConfig(
                "max_items_per_draw must be >= min_items_per_draw".into(),
            ));
        }
        // Inventory counts are u8; a cap or draw beyond that range could
        // overflow a single item's count.
        if self.max_items_per_player > u8::MAX as usize {
            return Err(Error::InvalidConfig(
                "max_items_per_player must be at most 255".into(),
            ));
        }
        if self.max_items_per_draw > u8::MAX as usize {
            return Err(Error::InvalidConfig(
                "max_items_per_draw must be at most 255".into(),
            ));
        }
        if self.min_initial_life < 1 {
            return Err(Error::InvalidConfig(
                "min_initial_life must be at least 1".into(),
            ));
        }
        if self.max_initial_life < self.min_initial_life {
            return Err(Error::InvalidConfig(
                "max_initial_life must be >= min_initial_life".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tiny_chamber_rejected() {
        let config = GameConfig::default().with_shells(1, 6);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_inverted_ranges_rejected() {
        let config = GameConfig::default().with_shells(6, 3);
        assert!(config.validate().is_err());

        let config = GameConfig::default().with_items_per_draw(4, 2);
        assert!(config.validate().is_err());

        let config = GameConfig::default().with_initial_life(3, 2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_life_rejected() {
        let config = GameConfig::default().with_initial_life(0, 3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_item_bounds_beyond_count_range_rejected() {
        // Counts are stored as u8, so caps past 255 must fail validation
        // instead of overflowing during a reload top-up.
        let config = GameConfig::default().with_item_cap(300);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = GameConfig::default().with_items_per_draw(2, 300);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = GameConfig::default().with_item_cap(255);
        assert!(config.validate().is_ok());
    }
}
