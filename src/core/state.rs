//! The immutable game state value.
//!
//! Every transition produces a new value; shared instances are never
//! mutated. The functional-update methods here are building blocks for the
//! rule engine: they enforce local invariants (non-negative inventories,
//! life capped at the starting value by heals) but carry no game rules
//! themselves.

use serde::{Deserialize, Serialize};

use super::item::{Inventory, Item};
use super::player::{Player, PlayerMap};
use super::shell::{Chamber, Shell};

/// Full concrete state of one duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Whose action is next.
    pub turn: Player,
    /// Pending shells, tail fires first.
    pub chamber: Chamber,
    /// Life cap both players started with. Heals never exceed it.
    pub init_life: i32,
    /// Current life. May transiently be <= 0 until the winner check runs.
    pub life: PlayerMap<i32>,
    /// Items held per player.
    pub inventory: PlayerMap<Inventory>,
    /// True while the opponent's next forced turn-pass is suppressed once.
    pub opponent_handcuffed: bool,
    /// The revealed next-to-fire shell, cleared by the next shot.
    pub shell_revealed: Option<Shell>,
    /// True while the next shot's live damage is doubled.
    pub shotgun_sawed: bool,
}

impl GameState {
    /// Fresh state with both players at `init_life`, no items, no flags.
    #[must_use]
    pub fn new(chamber: Chamber, init_life: i32) -> Self {
        Self {
            turn: Player::Player1,
            chamber,
            init_life,
            life: PlayerMap::with_value(init_life),
            inventory: PlayerMap::with_value(Inventory::empty()),
            opponent_handcuffed: false,
            shell_revealed: None,
            shotgun_sawed: false,
        }
    }

    /// Copy with the turn handed to the opponent.
    #[must_use]
    pub fn pass_turn(&self) -> Self {
        Self {
            turn: self.turn.opponent(),
            ..self.clone()
        }
    }

    /// Copy with the tail shell discarded.
    ///
    /// Does not touch the reveal or saw flags: those are consumed by the
    /// next fire action only, never by item actions such as Beer.
    #[must_use]
    pub fn pop_chamber(&self) -> Self {
        Self {
            chamber: self.chamber.popped(),
            ..self.clone()
        }
    }

    /// Copy with a replacement chamber.
    #[must_use]
    pub fn with_chamber(&self, chamber: Chamber) -> Self {
        Self {
            chamber,
            ..self.clone()
        }
    }

    /// Copy with `diff` applied to `player`'s life.
    ///
    /// Positive diffs (heals) are capped at `init_life`; negative diffs may
    /// drive life below zero, which the winner check then picks up.
    #[must_use]
    pub fn add_life(&self, player: Player, diff: i32) -> Self {
        let raw = self.life[player] + diff;
        let capped = if diff > 0 { raw.min(self.init_life) } else { raw };
        Self {
            life: self.life.with(player, capped),
            ..self.clone()
        }
    }

    /// Copy with one of `item` removed from the acting player's inventory.
    ///
    /// Returns `None` when the count is already zero; callers treat that as
    /// a defined no-op.
    #[must_use]
    pub fn take_item(&self, item: Item) -> Option<Self> {
        let inventory = self.inventory[self.turn].removed(item)?;
        Some(Self {
            inventory: self.inventory.with(self.turn, inventory),
            ..self.clone()
        })
    }

    /// Copy with replacement inventories for both players.
    #[must_use]
    pub fn with_inventories(&self, inventory: PlayerMap<Inventory>) -> Self {
        Self {
            inventory,
            ..self.clone()
        }
    }

    /// Copy with the handcuff flag set or cleared.
    #[must_use]
    pub fn cuff_opponent(&self, cuffed: bool) -> Self {
        Self {
            opponent_handcuffed: cuffed,
            ..self.clone()
        }
    }

    /// Copy with the tail shell revealed to the acting player.
    #[must_use]
    pub fn reveal_shell(&self) -> Self {
        Self {
            shell_revealed: self.chamber.next_shell(),
            ..self.clone()
        }
    }

    /// Copy with the reveal cleared.
    #[must_use]
    pub fn clear_reveal(&self) -> Self {
        Self {
            shell_revealed: None,
            ..self.clone()
        }
    }

    /// Copy with the saw flag set or cleared.
    #[must_use]
    pub fn saw_shotgun(&self, sawed: bool) -> Self {
        Self {
            shotgun_sawed: sawed,
            ..self.clone()
        }
    }

    /// Items the acting player holds.
    #[must_use]
    pub fn acting_inventory(&self) -> &Inventory {
        &self.inventory[self.turn]
    }
}

impl std::fmt::Display for GameState {
    /// Human-readable dump, free-form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Turn: {}", self.turn)?;
        writeln!(
            f,
            "Chamber: {} live / {} blank ({} total)",
            self.chamber.count(Shell::Live),
            self.chamber.count(Shell::Blank),
            self.chamber.len(),
        )?;
        writeln!(
            f,
            "Life: {} vs {} (started at {})",
            self.life[Player::Player1],
            self.life[Player::Player2],
            self.init_life,
        )?;
        for (player, inventory) in self.inventory.iter() {
            write!(f, "{} items:", player)?;
            for item in Item::ALL {
                write!(f, " {:?}={}", item, inventory.count(item))?;
            }
            writeln!(f)?;
        }
        if self.opponent_handcuffed {
            writeln!(f, "Opponent handcuffed")?;
        }
        if let Some(shell) = self.shell_revealed {
            writeln!(f, "Revealed shell: {}", shell)?;
        }
        if self.shotgun_sawed {
            writeln!(f, "Shotgun sawed")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(Chamber::from(vec![Shell::Live, Shell::Blank]), 3)
    }

    #[test]
    fn test_updates_leave_original_untouched() {
        let s = state();
        let _ = s.pass_turn();
        let _ = s.pop_chamber();
        let _ = s.add_life(Player::Player2, -1);

        assert_eq!(s, state());
    }

    #[test]
    fn test_pass_turn() {
        let s = state().pass_turn();
        assert_eq!(s.turn, Player::Player2);
        assert_eq!(s.pass_turn().turn, Player::Player1);
    }

    #[test]
    fn test_pop_chamber_keeps_reveal() {
        let s = state().reveal_shell();
        assert_eq!(s.shell_revealed, Some(Shell::Blank));

        // Item pops never consume the reveal; only a shot does.
        let s = s.pop_chamber();
        assert_eq!(s.shell_revealed, Some(Shell::Blank));
        assert_eq!(s.chamber.len(), 1);

        let s = s.clear_reveal();
        assert_eq!(s.shell_revealed, None);
    }

    #[test]
    fn test_heal_capped_at_init_life() {
        let s = state().add_life(Player::Player1, -2);
        assert_eq!(s.life[Player::Player1], 1);

        let s = s.add_life(Player::Player1, 1).add_life(Player::Player1, 5);
        assert_eq!(s.life[Player::Player1], 3);
    }

    #[test]
    fn test_damage_may_go_below_zero() {
        let s = state().add_life(Player::Player2, -5);
        assert_eq!(s.life[Player::Player2], -2);
    }

    #[test]
    fn test_take_item_at_zero_is_none() {
        assert!(state().take_item(Item::Beer).is_none());
    }

    #[test]
    fn test_take_item_decrements_actor_only() {
        let s = state();
        let s = s.with_inventories(
            s.inventory
                .with(Player::Player1, Inventory::empty().added(Item::Beer)),
        );

        let next = s.take_item(Item::Beer).unwrap();
        assert_eq!(next.inventory[Player::Player1].count(Item::Beer), 0);
        assert_eq!(next.inventory[Player::Player2].count(Item::Beer), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let s = state().reveal_shell().saw_shotgun(true);
        let json = serde_json::to_string(&s).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
