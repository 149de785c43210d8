use std::fmt;

use serde::{Deserialize, Serialize};

use matchpoints_core::{PlayerId, Points};

use crate::round::RoundState;
use crate::stats::{best_streak, holes_won, hot_streak};

/// A player's strokes on the current hole relative to par.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParStatus {
    NoScore,
    Under(u32),
    Even,
    Over(u32),
}

impl ParStatus {
    pub fn from_strokes(strokes: Option<u32>, par: u8) -> Self {
        let Some(strokes) = strokes else {
            return Self::NoScore;
        };
        let par = par as u32;
        match strokes.cmp(&par) {
            std::cmp::Ordering::Less => Self::Under(par - strokes),
            std::cmp::Ordering::Equal => Self::Even,
            std::cmp::Ordering::Greater => Self::Over(strokes - par),
        }
    }
}

impl fmt::Display for ParStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoScore => f.write_str("No score entered"),
            Self::Under(n) => write!(f, "{n} under par"),
            Self::Even => f.write_str("Even par"),
            Self::Over(n) => write!(f, "{n} over par"),
        }
    }
}

/// One line of the live leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub player: PlayerId,
    pub name: String,
    pub points: Points,
    pub leader: bool,
    pub hot_streak: bool,
    pub status: ParStatus,
}

/// Players ordered by running points, highest first; ties keep seat order.
pub fn leaderboard(state: &RoundState) -> Vec<LeaderboardRow> {
    let hole = state.current_hole();
    let par = state.course().par(hole).unwrap_or_default();
    let results = state.hole_results();

    let mut rows: Vec<LeaderboardRow> = state
        .players()
        .iter()
        .enumerate()
        .map(|(player, p)| LeaderboardRow {
            player,
            name: p.name.clone(),
            points: state.totals().get(player).unwrap_or_default(),
            leader: false,
            hot_streak: hot_streak(player, results),
            status: ParStatus::from_strokes(state.strokes().strokes(player, hole), par),
        })
        .collect();
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    if let Some(first) = rows.first_mut() {
        first.leader = true;
    }
    rows
}

/// Final placing for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub total_points: Points,
    pub holes_won: usize,
    pub best_streak: usize,
}

/// Round highlights. Ties go to whoever ranks higher in the standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlights {
    pub winner: PlayerId,
    pub most_holes_won: PlayerId,
    pub most_holes_won_count: usize,
    pub best_streak: PlayerId,
    pub best_streak_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub standings: Vec<Standing>,
    pub highlights: Option<Highlights>,
}

impl RoundSummary {
    pub fn standing(&self, player: PlayerId) -> Option<&Standing> {
        self.standings.iter().find(|s| s.player == player)
    }
}

/// Pick the first standing with the strictly greatest `key`.
fn first_max(standings: &[Standing], key: impl Fn(&Standing) -> usize) -> Option<&Standing> {
    standings.iter().fold(None, |best, s| match best {
        Some(b) if key(s) <= key(b) => Some(b),
        _ => Some(s),
    })
}

/// End-of-round standings and highlights.
pub fn summarize(state: &RoundState) -> RoundSummary {
    let results = state.hole_results();
    let mut standings: Vec<Standing> = state
        .players()
        .iter()
        .enumerate()
        .map(|(player, p)| Standing {
            player,
            name: p.name.clone(),
            total_points: state.totals().get(player).unwrap_or_default(),
            holes_won: holes_won(player, results),
            best_streak: best_streak(player, results),
        })
        .collect();
    standings.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    let highlights = match (
        standings.first(),
        first_max(&standings, |s| s.holes_won),
        first_max(&standings, |s| s.best_streak),
    ) {
        (Some(winner), Some(most), Some(streak)) => Some(Highlights {
            winner: winner.player,
            most_holes_won: most.player,
            most_holes_won_count: most.holes_won,
            best_streak: streak.player,
            best_streak_length: streak.best_streak,
        }),
        _ => None,
    };

    tracing::debug!(
        players = standings.len(),
        scored_holes = results.len(),
        "round summarized"
    );

    RoundSummary {
        standings,
        highlights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::{RoundOptions, StrokeEdit};
    use matchpoints_core::test_helpers::{flat_course, named_players, rules};

    fn round(players: &[(&str, i32)]) -> RoundState {
        RoundState::new(
            named_players(players),
            rules(2, 1, 0, 1, 2, false),
            flat_course(4),
            RoundOptions::default(),
        )
        .unwrap()
    }

    fn score(state: RoundState, hole: u8, values: &[u32]) -> RoundState {
        values
            .iter()
            .enumerate()
            .fold(state, |s, (player, &strokes)| {
                s.apply_edit(StrokeEdit {
                    player,
                    hole,
                    strokes,
                })
                .unwrap()
            })
    }

    #[test]
    fn par_status_text() {
        assert_eq!(ParStatus::from_strokes(None, 4).to_string(), "No score entered");
        assert_eq!(ParStatus::from_strokes(Some(2), 4).to_string(), "2 under par");
        assert_eq!(ParStatus::from_strokes(Some(4), 4).to_string(), "Even par");
        assert_eq!(ParStatus::from_strokes(Some(7), 4).to_string(), "3 over par");
    }

    #[test]
    fn leaderboard_orders_by_points_and_flags_leader() {
        let state = round(&[("Ann", 0), ("Bo", 0), ("Cy", 0)]);
        let state = score(state, 1, &[5, 3, 4]);
        let rows = leaderboard(&state);
        let order: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["Bo", "Cy", "Ann"]);
        assert!(rows[0].leader);
        assert!(!rows[1].leader);
        assert_eq!(rows[0].status, ParStatus::Under(1));
        assert_eq!(rows[2].status, ParStatus::Over(1));
    }

    #[test]
    fn leaderboard_ties_keep_seat_order() {
        let state = round(&[("Ann", 1), ("Bo", 1), ("Cy", 0)]);
        let rows = leaderboard(&state);
        assert_eq!(rows[0].player, 0);
        assert_eq!(rows[1].player, 1);
        assert_eq!(rows[2].status, ParStatus::NoScore);
    }

    #[test]
    fn leaderboard_flags_hot_streak() {
        let mut state = round(&[("Ann", 0), ("Bo", 0)]);
        for hole in 1..=3 {
            state = score(state, hole, &[3, 5]);
        }
        let rows = leaderboard(&state);
        assert!(rows.iter().find(|r| r.player == 0).unwrap().hot_streak);
        assert!(!rows.iter().find(|r| r.player == 1).unwrap().hot_streak);
    }

    #[test]
    fn summary_standings_and_highlights() {
        let mut state = round(&[("Ann", 0), ("Bo", 10), ("Cy", 0)]);
        state = score(state, 1, &[3, 5, 4]);
        state = score(state, 2, &[4, 5, 4]);
        state = score(state, 3, &[5, 5, 3]);
        state = score(state, 4, &[5, 6, 3]);

        let summary = summarize(&state);
        assert_eq!(summary.standings[0].name, "Bo");

        let ann = summary.standing(0).unwrap();
        assert_eq!(ann.holes_won, 2);
        assert_eq!(ann.best_streak, 2);

        let cy = summary.standing(2).unwrap();
        assert_eq!(cy.holes_won, 3);
        assert_eq!(cy.best_streak, 3);

        let h = summary.highlights.unwrap();
        assert_eq!(h.winner, 1);
        assert_eq!(h.most_holes_won, 2);
        assert_eq!(h.most_holes_won_count, 3);
        assert_eq!(h.best_streak, 2);
        assert_eq!(h.best_streak_length, 3);
    }

    #[test]
    fn highlight_ties_go_to_higher_standing() {
        let state = round(&[("Ann", 0), ("Bo", 5)]);
        let state = score(state, 1, &[4, 4]);
        let h = summarize(&state).highlights.unwrap();
        // Both won hole 1; Bo leads the standings
        assert_eq!(h.winner, 1);
        assert_eq!(h.most_holes_won, 1);
        assert_eq!(h.best_streak, 1);
    }
}
