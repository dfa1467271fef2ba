//! Standings — totals ranked highest first, ties keep seat order.

use super::models::{GameState, Player};

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing<'a> {
    pub player: &'a Player,
    pub total: i64,
    /// 1-based, never shared: equal totals get distinct consecutive ranks.
    pub rank: usize,
}

/// Rank all players by total score, highest first.
///
/// Empty slots count as zero, so this works mid-game for the live
/// scoreboard as well as at the end. The sort is stable: players on equal
/// totals keep their seating order, and the earlier seat takes the better
/// rank.
pub fn standings(state: &GameState) -> Vec<Standing<'_>> {
    let mut totals: Vec<(&Player, i64)> = state
        .players
        .iter()
        .map(|p| (p, p.scores.total()))
        .collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
        .into_iter()
        .enumerate()
        .map(|(i, (player, total))| Standing {
            player,
            total,
            rank: i + 1,
        })
        .collect()
}
