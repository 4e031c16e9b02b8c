//! Player identity for the two-seat duel.

use serde::{Deserialize, Serialize};

/// One of the two fixed seats at the table.
///
/// `Player1` always acts first in a fresh game. The `opponent` mapping is a
/// total involution: `p.opponent().opponent() == p` for both players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Seat index (0-based), used for per-player array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Player1 => write!(f, "Player 1"),
            Player::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access, indexed by seat.
///
/// ## Example
///
/// ```
/// use shellduel::core::{Player, PlayerMap};
///
/// let mut life: PlayerMap<i32> = PlayerMap::with_value(3);
/// assert_eq!(life[Player::Player1], 3);
///
/// life[Player::Player2] = 1;
/// assert_eq!(life[Player::Player2], 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Player1), factory(Player::Player2)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's entry.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Produce a copy with one player's entry replaced.
    #[must_use]
    pub fn with(&self, player: Player, value: T) -> Self
    where
        T: Clone,
    {
        let mut next = self.clone();
        next.data[player.index()] = value;
        next
    }

    /// Iterate over (Player, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.iter().map(|&p| (p, &self.data[p.index()]))
    }
}

impl<T> std::ops::Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> std::ops::IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for p in Player::ALL {
            assert_ne!(p, p.opponent());
            assert_eq!(p, p.opponent().opponent());
        }
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::Player1), "Player 1");
        assert_eq!(format!("{}", Player::Player2), "Player 2");
    }

    #[test]
    fn test_player_map_factory() {
        let map = PlayerMap::new(|p| p.index() as i32 * 10);
        assert_eq!(map[Player::Player1], 0);
        assert_eq!(map[Player::Player2], 10);
    }

    #[test]
    fn test_player_map_with() {
        let map = PlayerMap::with_value(4);
        let next = map.with(Player::Player2, 2);

        assert_eq!(map[Player::Player2], 4);
        assert_eq!(next[Player::Player1], 4);
        assert_eq!(next[Player::Player2], 2);
    }

    #[test]
    fn test_player_map_iter_order() {
        let map = PlayerMap::new(|p| p.index());
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::Player1, &0), (Player::Player2, &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
