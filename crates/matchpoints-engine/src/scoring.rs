//! Per-hole points allocation.
//!
//! Players are ranked by strokes. Each run of equal scores is a tie group
//! that shares the position points of every place it occupies, split evenly.
//! Score-vs-par bonuses are added per player on top of that share.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use matchpoints_core::course::{HOLE_COUNT, MIN_PAR};
use matchpoints_core::error::{InvalidInput, Result};
use matchpoints_core::{PlayerId, Points, RulesConfig};

/// One player's line in a scored hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleEntry {
    pub player: PlayerId,
    pub strokes: u32,
    /// Tie-adjusted position points plus any bonus.
    pub points: Points,
}

/// Points awarded on a fully scored hole, ordered best score first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleResult {
    pub hole: u8,
    pub par: u8,
    pub entries: Vec<HoleEntry>,
}

impl HoleResult {
    /// Lowest stroke count on the hole.
    pub fn best_strokes(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.strokes).min()
    }

    pub fn entry(&self, player: PlayerId) -> Option<&HoleEntry> {
        self.entries.iter().find(|e| e.player == player)
    }

    pub fn points_for(&self, player: PlayerId) -> Option<Points> {
        self.entry(player).map(|e| e.points)
    }

    /// Whether `player` shot the best score on this hole (shared bests count).
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match (self.entry(player), self.best_strokes()) {
            (Some(entry), Some(best)) => entry.strokes == best,
            _ => false,
        }
    }
}

/// Allocate points for one hole.
///
/// `strokes` must hold an entry for every player in the round; callers skip
/// holes that are not fully entered.
pub fn compute_hole_result(
    hole: u8,
    strokes: &BTreeMap<PlayerId, u32>,
    rules: &RulesConfig,
    par: u8,
) -> Result<HoleResult> {
    if hole == 0 || hole > HOLE_COUNT {
        return Err(InvalidInput::UnknownHole(hole));
    }
    if par < MIN_PAR {
        return Err(InvalidInput::InvalidPar { hole, par });
    }
    if strokes.is_empty() {
        return Err(InvalidInput::Players(format!(
            "hole {hole} has no stroke entries"
        )));
    }
    // Seats are 0..n; a gap means a player has no entry on this hole.
    if let Some((player, _)) = strokes.keys().enumerate().find(|&(i, &p)| i != p) {
        return Err(InvalidInput::MissingEntry { player, hole });
    }
    if let Some((&player, &s)) = strokes.iter().find(|&(_, &s)| s == 0) {
        return Err(InvalidInput::NonPositiveStrokes {
            player,
            hole,
            strokes: s,
        });
    }

    // BTreeMap iteration is by player index, and the sort is stable, so tied
    // players keep seat order.
    let mut ranked: Vec<(PlayerId, u32)> = strokes.iter().map(|(&p, &s)| (p, s)).collect();
    ranked.sort_by_key(|&(_, s)| s);

    let mut entries = Vec::with_capacity(ranked.len());
    let mut start = 0usize;
    for group in ranked.chunk_by(|a, b| a.1 == b.1) {
        let size = group.len();
        let pool: i64 = (start..start + size)
            .map(|pos| rules.position_points(pos) as i64)
            .sum();
        let share = Points::ratio(pool, size as i64);
        for &(player, s) in group {
            let bonus = rules.bonus_for(s, par);
            entries.push(HoleEntry {
                player,
                strokes: s,
                points: share + Points::from(bonus),
            });
        }
        start += size;
    }

    Ok(HoleResult { hole, par, entries })
}
