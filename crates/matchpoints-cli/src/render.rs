//! Plain-text views of a round for the terminal.

use matchpoints_core::RulesConfig;
use matchpoints_core::rules::HOLE_IN_ONE_BONUS;
use matchpoints_engine::{LeaderboardRow, RoundState, RoundSummary};

fn player_name(state: &RoundState, player: usize) -> &str {
    state.player(player).map(|p| p.name.as_str()).unwrap_or("?")
}

pub fn hole_header(state: &RoundState) -> String {
    let hole = state.current_hole();
    match state.course().hole(hole) {
        Some(h) => format!(
            "Hole {} of {}  Par {}  {} yds  HCP {}",
            h.number,
            state.course().holes.len(),
            h.par,
            h.yards,
            h.handicap_rank
        ),
        None => format!("Hole {hole}"),
    }
}

pub fn leaderboard(rows: &[LeaderboardRow]) -> String {
    rows.iter()
        .enumerate()
        .map(|(rank, row)| {
            let leader = if row.leader { " [leader]" } else { "" };
            let hot = if row.hot_streak { " [hot]" } else { "" };
            format!(
                "{:>2}. {:<16} {:>7} pts  {}{leader}{hot}\n",
                rank + 1,
                row.name,
                row.points.to_string(),
                row.status
            )
        })
        .collect()
}

/// Strokes and points for every seat on the current hole.
pub fn current_hole(state: &RoundState) -> String {
    let hole = state.current_hole();
    match state.current_hole_result() {
        Some(result) => result
            .entries
            .iter()
            .map(|entry| {
                format!(
                    "  {:<16} {:>3} strokes  {:>7} pts\n",
                    player_name(state, entry.player),
                    entry.strokes,
                    entry.points.to_string()
                )
            })
            .collect(),
        None => {
            let mut out: String = state
                .players()
                .iter()
                .enumerate()
                .map(|(seat, p)| {
                    let strokes = state
                        .strokes()
                        .strokes(seat, hole)
                        .map_or_else(|| "-".to_string(), |s| s.to_string());
                    format!("  {:<16} {:>3}\n", p.name, strokes)
                })
                .collect();
            out.push_str("  (hole not scored until every player has an entry)\n");
            out
        },
    }
}

pub fn round(state: &RoundState, rows: &[LeaderboardRow]) -> String {
    format!(
        "{}\n{}\n{}",
        hole_header(state),
        current_hole(state),
        leaderboard(rows)
    )
}

pub fn summary(summary: &RoundSummary, state: &RoundState) -> String {
    let mut out = String::from("Final results\n");
    for (rank, s) in summary.standings.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<16} {:>7} pts  {} holes won  best streak {}\n",
            rank + 1,
            s.name,
            s.total_points.to_string(),
            s.holes_won,
            s.best_streak
        ));
    }
    if let Some(h) = &summary.highlights {
        out.push_str(&format!(
            "\nWinner: {}\nMost holes won: {} ({})\nBest streak: {} ({} holes)\n",
            player_name(state, h.winner),
            player_name(state, h.most_holes_won),
            h.most_holes_won_count,
            player_name(state, h.best_streak),
            h.best_streak_length
        ));
    }
    out
}

pub fn rules(rules: &RulesConfig) -> String {
    format!(
        "1st place: {} pts\n2nd place: {} pts\n3rd place: {} pts\n\
         Birdie bonus: {} pts\nEagle bonus: {} pts\n\
         Hole in one: {}\n",
        rules.first_points,
        rules.second_points,
        rules.third_points,
        rules.birdie_bonus,
        rules.eagle_bonus,
        if rules.hio_win {
            format!("+{HOLE_IN_ONE_BONUS} pts")
        } else {
            "no bonus".to_string()
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchpoints_core::default_course;
    use matchpoints_core::test_helpers::{named_players, rules as make_rules};
    use matchpoints_engine::{RoundOptions, StrokeEdit, leaderboard as build_leaderboard, summarize};

    fn scored() -> RoundState {
        let state = RoundState::new(
            named_players(&[("Ann", 0), ("Bo", 0)]),
            make_rules(2, 1, 0, 1, 2, false),
            default_course(),
            RoundOptions::default(),
        )
        .unwrap();
        state
            .apply_edit(StrokeEdit {
                player: 0,
                hole: 1,
                strokes: 3,
            })
            .unwrap()
    }

    #[test]
    fn header_shows_card_details() {
        assert_eq!(hole_header(&scored()), "Hole 1 of 18  Par 4  358 yds  HCP 3");
    }

    #[test]
    fn incomplete_hole_lists_entered_strokes() {
        let text = current_hole(&scored());
        assert!(text.contains("Ann"));
        assert!(text.contains("not scored"));
    }

    #[test]
    fn leaderboard_marks_leader_and_status() {
        let state = scored()
            .apply_edit(StrokeEdit {
                player: 1,
                hole: 1,
                strokes: 4,
            })
            .unwrap();
        let text = leaderboard(&build_leaderboard(&state));
        let first = text.lines().next().unwrap();
        assert!(first.contains("Ann"));
        assert!(first.contains("[leader]"));
        assert!(first.contains("1 under par"));
        assert!(text.contains("Even par"));
    }

    #[test]
    fn leaderboard_has_one_line_per_player() {
        let rows = build_leaderboard(&scored());
        let text = leaderboard(&rows);
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches("[leader]").count(), 1);
    }

    #[test]
    fn summary_names_the_winner() {
        let state = scored()
            .apply_edit(StrokeEdit {
                player: 1,
                hole: 1,
                strokes: 5,
            })
            .unwrap();
        let text = summary(&summarize(&state), &state);
        assert!(text.contains("Winner: Ann"));
        assert!(text.contains("Most holes won: Ann (1)"));
        assert!(text.contains("Best streak: Ann (1 holes)"));
    }

    #[test]
    fn rules_describe_hole_in_one() {
        assert!(rules(&RulesConfig::default()).contains("no bonus"));
        let text = rules(&make_rules(3, 2, 1, 1, 2, true));
        assert!(text.contains("1st place: 3 pts"));
        assert!(text.contains("+10"));
    }
}
