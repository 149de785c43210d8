//! Win counts and streaks derived from scored holes.
//!
//! A player wins a hole when their strokes equal the hole's best, so shared
//! bests are wins for everyone involved. Only scored holes appear in the
//! result list; an unscored hole in between does not break a streak.

use serde::{Deserialize, Serialize};

use matchpoints_core::{Player, PlayerId};

use crate::scoring::HoleResult;

/// Consecutive wins needed to be "on a streak".
pub const HOT_STREAK_LENGTH: usize = 3;

/// Number of holes where `player` had the best score.
pub fn holes_won(player: PlayerId, results: &[HoleResult]) -> usize {
    results.iter().filter(|r| r.is_winner(player)).count()
}

/// Longest run of consecutive scored holes won by `player`.
pub fn best_streak(player: PlayerId, results: &[HoleResult]) -> usize {
    let mut best = 0;
    let mut current = 0;
    for result in results {
        if result.is_winner(player) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

/// Whether `player` won each of the last three scored holes.
pub fn hot_streak(player: PlayerId, results: &[HoleResult]) -> bool {
    results.len() >= HOT_STREAK_LENGTH
        && results[results.len() - HOT_STREAK_LENGTH..]
            .iter()
            .all(|r| r.is_winner(player))
}

/// All derived statistics for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player: PlayerId,
    pub holes_won: usize,
    pub best_streak: usize,
    pub hot_streak: bool,
}

pub fn player_stats(results: &[HoleResult], players: &[Player]) -> Vec<PlayerStats> {
    (0..players.len())
        .map(|player| PlayerStats {
            player,
            holes_won: holes_won(player, results),
            best_streak: best_streak(player, results),
            hot_streak: hot_streak(player, results),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::HoleEntry;
    use matchpoints_core::Points;
    use matchpoints_core::test_helpers::{make_players, named_players};

    /// A scored hole from raw strokes; points are irrelevant to these stats.
    fn hole(number: u8, strokes: &[u32]) -> HoleResult {
        HoleResult {
            hole: number,
            par: 4,
            entries: strokes
                .iter()
                .enumerate()
                .map(|(player, &s)| HoleEntry {
                    player,
                    strokes: s,
                    points: Points::ZERO,
                })
                .collect(),
        }
    }

    #[test]
    fn shared_best_counts_as_win() {
        let results = vec![hole(1, &[4, 4, 5]), hole(2, &[3, 4, 5])];
        assert_eq!(holes_won(0, &results), 2);
        assert_eq!(holes_won(1, &results), 1);
        assert_eq!(holes_won(2, &results), 0);
    }

    #[test]
    fn wins_are_stroke_based_not_points_based() {
        // Player 1 may collect more points via bonuses, but player 0 has the low score
        let results = vec![hole(1, &[3, 4])];
        assert_eq!(holes_won(0, &results), 1);
        assert_eq!(holes_won(1, &results), 0);
    }

    #[test]
    fn streak_resets_on_loss() {
        let results = vec![
            hole(1, &[3, 4]),
            hole(2, &[3, 4]),
            hole(3, &[5, 4]),
            hole(4, &[3, 4]),
            hole(5, &[3, 4]),
            hole(6, &[3, 4]),
        ];
        assert_eq!(best_streak(0, &results), 3);
        assert_eq!(best_streak(1, &results), 1);
    }

    #[test]
    fn unscored_gap_does_not_break_streak() {
        // Holes 3 and 4 were never completed, so they are absent from the list
        let results = vec![hole(1, &[3, 4]), hole(2, &[3, 4]), hole(5, &[3, 4])];
        assert_eq!(best_streak(0, &results), 3);
        assert!(hot_streak(0, &results));
    }

    #[test]
    fn hot_streak_needs_three_holes() {
        let results = vec![hole(1, &[3, 4]), hole(2, &[3, 4])];
        assert!(!hot_streak(0, &results));
        assert!(!hot_streak(0, &[]));
    }

    #[test]
    fn hot_streak_looks_at_last_three_only() {
        let results = vec![
            hole(1, &[5, 4]),
            hole(2, &[3, 4]),
            hole(3, &[3, 4]),
            hole(4, &[3, 3]),
        ];
        assert!(hot_streak(0, &results));
        assert!(!hot_streak(1, &results));
    }

    #[test]
    fn players_with_same_name_are_tracked_separately() {
        let players = named_players(&[("Sam", 0), ("Sam", 0)]);
        let results = vec![hole(1, &[3, 4]), hole(2, &[3, 4]), hole(3, &[3, 4])];
        let stats = player_stats(&results, &players);
        assert_eq!(stats[0].holes_won, 3);
        assert!(stats[0].hot_streak);
        assert_eq!(stats[1].holes_won, 0);
        assert!(!stats[1].hot_streak);
    }

    #[test]
    fn unknown_player_wins_nothing() {
        let results = vec![hole(1, &[3, 4])];
        assert_eq!(holes_won(9, &results), 0);
        assert_eq!(best_streak(9, &results), 0);
        assert_eq!(player_stats(&results, &make_players(2)).len(), 2);
    }
}
