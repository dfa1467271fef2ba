//! The reducer — one pure function from state and action to next state.

use super::models::{Action, GameState, Player};

/// Apply one action and return the successor state. Never mutates in place.
///
/// This layer trusts its input: `AssignScore` expects an in-range player
/// index and `AdvanceTurn` expects at least one seated player. The
/// `commands` module is the checked entry point; violations here are caller
/// bugs and panic.
pub fn apply(state: &GameState, action: &Action) -> GameState {
    match action {
        Action::Initialize { names } => GameState {
            players: names
                .iter()
                .enumerate()
                .map(|(i, name)| Player::new(i, name))
                .collect(),
            current_player_index: 0,
            game_started: true,
            game_ended: false,
            show_scoreboard: false,
        },
        Action::AssignScore {
            player_index,
            category,
            value,
        } => {
            let mut next = state.clone();
            next.players[*player_index].scores.set(*category, *value);
            next.game_ended = next.all_cards_complete();
            next
        }
        Action::AdvanceTurn => {
            let mut next = state.clone();
            next.current_player_index = (next.current_player_index + 1) % next.players.len();
            next
        }
        Action::ToggleScoreboard => {
            let mut next = state.clone();
            next.show_scoreboard = !next.show_scoreboard;
            next
        }
        Action::Reset => GameState::default(),
    }
}
