//! Core state types — cards, players, and the actions that move the game.

use serde::{Deserialize, Serialize};

use super::categories::{Category, CATEGORY_COUNT};

/// One player's column on the sheet: a slot per category, `None` until
/// scored. `Some(0)` is a recorded zero, not an empty slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard([Option<i32>; CATEGORY_COUNT]);

impl ScoreCard {
    pub fn new() -> Self {
        Self([None; CATEGORY_COUNT])
    }

    #[inline]
    pub fn get(&self, category: Category) -> Option<i32> {
        self.0[category.index()]
    }

    /// Record a value. Overwrites silently; refusing filled slots is the
    /// command layer's job.
    #[inline]
    pub fn set(&mut self, category: Category, value: i32) {
        self.0[category.index()] = Some(value);
    }

    /// Number of filled slots (0–12).
    pub fn filled(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|slot| slot.is_some())
    }

    /// Column total. Empty slots count as zero.
    pub fn total(&self) -> i64 {
        self.0.iter().flatten().map(|&v| v as i64).sum()
    }
}

/// A seated player. Identity and name are fixed when the game starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub scores: ScoreCard,
}

impl Player {
    /// Build the player for seat `index` with an empty card.
    pub fn new(index: usize, name: &str) -> Self {
        Self {
            id: format!("player-{index}"),
            name: name.to_string(),
            scores: ScoreCard::new(),
        }
    }
}

/// Authoritative state of one sitting. `Default` is the idle shape shown
/// before any game has started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub game_started: bool,
    /// Derived: recomputed on every assignment, never set on its own.
    pub game_ended: bool,
    pub show_scoreboard: bool,
}

impl GameState {
    /// The player whose turn it is. Panics on the idle state.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// True once every slot of every card is filled.
    pub fn all_cards_complete(&self) -> bool {
        self.players.iter().all(|p| p.scores.is_complete())
    }
}

/// State transitions, reducer style. Preconditions are the caller's
/// contract; `commands` is the validating front door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Replace whatever is there with a fresh game for these players.
    /// Names must already be validated.
    Initialize { names: Vec<String> },
    /// Write one slot on one card. `player_index` must be in range.
    AssignScore {
        player_index: usize,
        category: Category,
        value: i32,
    },
    /// Pass the turn to the next seat, wrapping at the end of the table.
    AdvanceTurn,
    ToggleScoreboard,
    /// Back to the idle state. No confirmation at any layer.
    Reset,
}
