//! Validated commands — the checked front door to the reducer.
//!
//! Every mutation a session can request comes through here. A command either
//! returns an `Action` ready for `transitions::apply` or a typed error, and
//! never touches the state itself.

use thiserror::Error;

use super::categories::Category;
use super::models::{Action, GameState};

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;
/// Most players one sheet can hold.
pub const MAX_PLAYERS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("need at least {min} player names, got {0}", min = MIN_PLAYERS)]
    TooFewPlayers(usize),
    #[error("at most {max} players fit on one sheet, got {0}", max = MAX_PLAYERS)]
    TooManyPlayers(usize),
    #[error("duplicate player name \"{0}\"")]
    DuplicateName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),
    #[error("{0} is already scored for this player")]
    CategoryTaken(Category),
    #[error("\"{0}\" is not a whole number")]
    InvalidScore(String),
}

/// Check a raw list of names and produce the game-start action.
///
/// Entries are trimmed and blank ones dropped before any rule runs, so
/// stray empty lines never count against the limits. Name comparison is
/// case-sensitive, matching what is printed on the sheet.
pub fn setup_command<S: AsRef<str>>(raw_names: &[S]) -> Result<Action, SetupError> {
    let names: Vec<String> = raw_names
        .iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();

    if names.len() < MIN_PLAYERS {
        return Err(SetupError::TooFewPlayers(names.len()));
    }
    if names.len() > MAX_PLAYERS {
        return Err(SetupError::TooManyPlayers(names.len()));
    }
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(SetupError::DuplicateName(name.clone()));
        }
    }

    Ok(Action::Initialize { names })
}

/// Resolve a category entry for the current player: one of the twelve codes
/// (case-insensitive) and still open on their card.
///
/// Sessions call this before prompting for a value, so a mistyped code is
/// caught up front. Expects a started game.
pub fn category_command(state: &GameState, raw: &str) -> Result<Category, ScoreError> {
    let category = Category::from_code(raw.trim())
        .ok_or_else(|| ScoreError::UnknownCategory(raw.trim().to_string()))?;
    if state.current_player().scores.get(category).is_some() {
        return Err(ScoreError::CategoryTaken(category));
    }
    Ok(category)
}

/// Check a score entry for the current player and produce the assignment.
///
/// The target is always the player whose turn it is; callers never pick an
/// index. Any whole number is accepted, negatives included. The open-slot
/// check is repeated here, so the call stands on its own.
pub fn score_command(
    state: &GameState,
    category: Category,
    raw_value: &str,
) -> Result<Action, ScoreError> {
    if state.current_player().scores.get(category).is_some() {
        return Err(ScoreError::CategoryTaken(category));
    }
    let trimmed = raw_value.trim();
    let value: i32 = trimmed
        .parse()
        .map_err(|_| ScoreError::InvalidScore(trimmed.to_string()))?;

    Ok(Action::AssignScore {
        player_index: state.current_player_index,
        category,
        value,
    })
}
