//! Screen rendering — pure text builders, no I/O.
//!
//! Three screens: setup, board, results. The session decides which one to
//! show; these functions only turn state into text.

use crate::engine::categories::{Category, CATEGORY_COUNT};
use crate::engine::commands::{MAX_PLAYERS, MIN_PLAYERS};
use crate::engine::models::GameState;
use crate::engine::rankings::standings;

const RULE_WIDTH: usize = 44;

/// Intro shown before any game has started.
pub fn setup_screen() -> String {
    let mut lines = vec!["Yahtzee score pad".to_string()];
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!(
        "Enter one name per line, {MIN_PLAYERS} to {MAX_PLAYERS} players."
    ));
    lines.push("Names must be distinct. A blank line starts the game.".to_string());
    lines.join("\n")
}

/// The in-game screen: whose turn it is, their card, and the command hints.
/// Embeds the full sheet while the scoreboard toggle is on.
pub fn board_screen(state: &GameState) -> String {
    let player = state.current_player();
    let mut lines = vec![format!(
        "{}'s turn  ({}/{} categories scored)",
        player.name,
        player.scores.filled(),
        CATEGORY_COUNT
    )];
    lines.push("=".repeat(RULE_WIDTH));
    for cat in Category::ALL {
        let value = match player.scores.get(cat) {
            Some(v) => v.to_string(),
            None => "-".to_string(),
        };
        lines.push(format!("  {:<4} {:<14} {:>6}", cat.code(), cat.label(), value));
    }
    if state.show_scoreboard {
        lines.push(String::new());
        lines.push(score_table(state));
    }
    lines.push(String::new());
    lines.push("Type a category code to score it, 'table' to show or hide the".to_string());
    lines.push("full sheet, 'new' to restart, 'quit' to leave.".to_string());
    lines.join("\n")
}

/// Final standings plus the complete sheet.
pub fn results_screen(state: &GameState) -> String {
    let rows = standings(state);
    let name_width = rows
        .iter()
        .map(|r| r.player.name.len())
        .max()
        .unwrap_or(0);

    let mut lines = vec!["Game over!".to_string()];
    lines.push("=".repeat(RULE_WIDTH));
    for row in &rows {
        // Podium markers for the top three, like the medals on the sheet.
        let marker = match row.rank {
            1 => "  (winner)",
            2 => "  (2nd)",
            3 => "  (3rd)",
            _ => "",
        };
        lines.push(format!(
            "{:>2}. {:<name_width$}  {:>6}{}",
            row.rank, row.player.name, row.total, marker
        ));
    }
    lines.push(String::new());
    lines.push(score_table(state));
    lines.join("\n")
}

/// The full sheet: one column per player in seat order, one row per
/// category, a TOTAL row at the bottom. Open slots print as "-".
pub fn score_table(state: &GameState) -> String {
    let labels: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{:<4} {}", c.code(), c.label()))
        .collect();
    let label_width = labels
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0)
        .max("Category".len());

    let col_widths: Vec<usize> = state
        .players
        .iter()
        .map(|p| {
            let widest_value = Category::ALL
                .iter()
                .map(|c| match p.scores.get(*c) {
                    Some(v) => v.to_string().len(),
                    None => 1,
                })
                .max()
                .unwrap_or(1);
            p.name.len().max(widest_value).max(p.scores.total().to_string().len())
        })
        .collect();

    let mut header = format!("{:<label_width$}", "Category");
    for (p, w) in state.players.iter().zip(col_widths.iter().copied()) {
        header.push_str(&format!("  {:>w$}", p.name));
    }
    let rule_width = header.len();

    let mut lines = vec![header];
    lines.push("-".repeat(rule_width));
    for (cat, label) in Category::ALL.iter().zip(&labels) {
        let mut line = format!("{label:<label_width$}");
        for (p, w) in state.players.iter().zip(col_widths.iter().copied()) {
            let value = match p.scores.get(*cat) {
                Some(v) => v.to_string(),
                None => "-".to_string(),
            };
            line.push_str(&format!("  {value:>w$}"));
        }
        lines.push(line);
    }
    lines.push("-".repeat(rule_width));
    let mut total_line = format!("{:<label_width$}", "TOTAL");
    for (p, w) in state.players.iter().zip(col_widths.iter().copied()) {
        total_line.push_str(&format!("  {:>w$}", p.scores.total()));
    }
    lines.push(total_line);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::commands::setup_command;
    use crate::engine::models::Action;
    use crate::engine::transitions::apply;

    fn started(names: &[&str]) -> GameState {
        apply(&GameState::default(), &setup_command(names).unwrap())
    }

    fn assign(state: &GameState, player_index: usize, category: Category, value: i32) -> GameState {
        apply(
            state,
            &Action::AssignScore {
                player_index,
                category,
                value,
            },
        )
    }

    #[test]
    fn test_setup_screen_states_the_limits() {
        let text = setup_screen();
        assert!(text.contains("2 to 20 players"));
        assert!(text.contains("blank line"));
    }

    #[test]
    fn test_board_screen_names_the_current_player() {
        let mut state = started(&["Ana", "Bo"]);
        assert!(board_screen(&state).contains("Ana's turn"));
        state = apply(&state, &Action::AdvanceTurn);
        assert!(board_screen(&state).contains("Bo's turn"));
    }

    #[test]
    fn test_board_screen_tracks_progress() {
        let mut state = started(&["Ana", "Bo"]);
        assert!(board_screen(&state).contains("(0/12 categories scored)"));
        state = assign(&state, 0, Category::Uno, 3);
        state = assign(&state, 0, Category::Poker, 17);
        assert!(board_screen(&state).contains("(2/12 categories scored)"));
    }

    #[test]
    fn test_board_screen_embeds_the_sheet_only_when_toggled() {
        let state = started(&["Ana", "Bo"]);
        assert!(!board_screen(&state).contains("TOTAL"));
        let shown = apply(&state, &Action::ToggleScoreboard);
        assert!(board_screen(&shown).contains("TOTAL"));
    }

    #[test]
    fn test_score_table_prints_dash_for_open_slots() {
        let mut state = started(&["Ana", "Bo"]);
        state = assign(&state, 0, Category::Uno, 3);
        let table = score_table(&state);
        let uno_row = table
            .lines()
            .find(|l| l.starts_with("UNO"))
            .expect("UNO row");
        assert!(uno_row.contains('3'));
        assert!(uno_row.ends_with('-'), "Bo's slot is open: {uno_row:?}");
    }

    #[test]
    fn test_score_table_totals_per_column() {
        let mut state = started(&["Ana", "Bo"]);
        state = assign(&state, 0, Category::Uno, 3);
        state = assign(&state, 0, Category::Sei, 24);
        state = assign(&state, 1, Category::Yahtzee, 50);
        let table = score_table(&state);
        let total_row = table
            .lines()
            .find(|l| l.starts_with("TOTAL"))
            .expect("TOTAL row");
        assert!(total_row.contains("27"));
        assert!(total_row.contains("50"));
    }

    #[test]
    fn test_score_table_has_a_row_per_category() {
        let state = started(&["Ana", "Bo"]);
        let table = score_table(&state);
        for cat in Category::ALL {
            assert!(
                table.lines().any(|l| l.starts_with(cat.code())),
                "missing row for {}",
                cat.code()
            );
        }
    }

    #[test]
    fn test_results_screen_lists_standings_in_rank_order() {
        let mut state = started(&["Ana", "Bo"]);
        state = assign(&state, 0, Category::Uno, 3);
        state = assign(&state, 1, Category::Yahtzee, 50);
        let text = results_screen(&state);
        assert!(text.contains("Game over!"));
        let bo_line = text.lines().position(|l| l.contains("Bo")).unwrap();
        let ana_line = text.lines().position(|l| l.contains("Ana")).unwrap();
        assert!(bo_line < ana_line, "higher total first");
        assert!(text.lines().nth(bo_line).unwrap().contains("(winner)"));
    }

    #[test]
    fn test_results_screen_marks_the_whole_podium() {
        let mut state = started(&["Ana", "Bo", "Carla", "Dana"]);
        state = assign(&state, 0, Category::Uno, 1);
        state = assign(&state, 1, Category::Sei, 30);
        state = assign(&state, 2, Category::Poker, 20);
        state = assign(&state, 3, Category::Cinque, 10);
        let text = results_screen(&state);

        let line_for = |name: &str| {
            text.lines()
                .find(|l| l.contains(name))
                .unwrap_or_else(|| panic!("no standings line for {name}"))
        };
        assert!(line_for("Bo").contains("(winner)"));
        assert!(line_for("Carla").contains("(2nd)"));
        assert!(line_for("Dana").contains("(3rd)"));
        let ana_line = line_for("Ana");
        assert!(
            ana_line.ends_with('1'),
            "no marker past third place: {ana_line:?}"
        );
    }
}
