use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use matchpoints_core::course::{Course, HOLE_COUNT};
use matchpoints_core::error::{InvalidInput, Result};
use matchpoints_core::player::{Player, PlayerId, validate_players};
use matchpoints_core::{Points, RulesConfig};

use crate::scoring::{HoleResult, compute_hole_result};

const HOLES: usize = HOLE_COUNT as usize;

/// One player's entry for one hole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeCell {
    /// Nothing entered yet.
    #[default]
    Unset,
    /// Pre-filled with par at round start; counts as entered.
    Defaulted(u32),
    /// Entered or confirmed by the scorer.
    Confirmed(u32),
}

impl StrokeCell {
    pub fn strokes(self) -> Option<u32> {
        match self {
            Self::Unset => None,
            Self::Defaulted(s) | Self::Confirmed(s) => Some(s),
        }
    }

    pub fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed(_))
    }
}

/// Strokes per player per hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeMatrix {
    rows: Vec<[StrokeCell; HOLES]>,
}

fn slot(hole: u8) -> Result<usize> {
    if hole == 0 || hole > HOLE_COUNT {
        return Err(InvalidInput::UnknownHole(hole));
    }
    Ok(hole as usize - 1)
}

impl StrokeMatrix {
    /// An empty card for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            rows: vec![[StrokeCell::Unset; HOLES]; player_count],
        }
    }

    /// A card with every cell defaulted to the hole's par.
    pub fn prefilled(player_count: usize, course: &Course) -> Self {
        let mut row = [StrokeCell::Unset; HOLES];
        for (cell, hole) in row.iter_mut().zip(&course.holes) {
            *cell = StrokeCell::Defaulted(hole.par as u32);
        }
        Self {
            rows: vec![row; player_count],
        }
    }

    pub fn player_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, player: PlayerId, hole: u8) -> Result<StrokeCell> {
        let row = self
            .rows
            .get(player)
            .ok_or(InvalidInput::UnknownPlayer(player))?;
        Ok(row[slot(hole)?])
    }

    pub fn strokes(&self, player: PlayerId, hole: u8) -> Option<u32> {
        self.cell(player, hole).ok().and_then(StrokeCell::strokes)
    }

    /// Record a confirmed stroke count.
    pub fn set(&mut self, player: PlayerId, hole: u8, strokes: u32) -> Result<()> {
        let index = slot(hole)?;
        if strokes == 0 {
            return Err(InvalidInput::NonPositiveStrokes {
                player,
                hole,
                strokes,
            });
        }
        let row = self
            .rows
            .get_mut(player)
            .ok_or(InvalidInput::UnknownPlayer(player))?;
        row[index] = StrokeCell::Confirmed(strokes);
        Ok(())
    }

    /// Promote every defaulted cell on `hole` to confirmed.
    pub fn confirm_hole(&mut self, hole: u8) -> Result<()> {
        let index = slot(hole)?;
        for row in &mut self.rows {
            if let StrokeCell::Defaulted(s) = row[index] {
                row[index] = StrokeCell::Confirmed(s);
            }
        }
        Ok(())
    }

    pub fn is_hole_complete(&self, hole: u8) -> bool {
        self.hole_strokes(hole).is_some()
    }

    /// Every player's strokes on `hole`, or `None` if any entry is missing.
    pub fn hole_strokes(&self, hole: u8) -> Option<BTreeMap<PlayerId, u32>> {
        let index = slot(hole).ok()?;
        if self.rows.is_empty() {
            return None;
        }
        self.rows
            .iter()
            .enumerate()
            .map(|(player, row)| row[index].strokes().map(|s| (player, s)))
            .collect()
    }

    /// Reject any entered cell holding zero strokes.
    pub fn validate(&self) -> Result<()> {
        for (player, row) in self.rows.iter().enumerate() {
            for (i, cell) in row.iter().enumerate() {
                if cell.strokes() == Some(0) {
                    return Err(InvalidInput::NonPositiveStrokes {
                        player,
                        hole: i as u8 + 1,
                        strokes: 0,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Running points per player, indexed by `PlayerId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTotals(Vec<Points>);

impl RoundTotals {
    pub fn get(&self, player: PlayerId) -> Option<Points> {
        self.0.get(player).copied()
    }

    pub fn as_slice(&self) -> &[Points] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything derived from a stroke matrix: totals and per-hole results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScores {
    pub totals: RoundTotals,
    /// Scored holes only, in hole order.
    pub hole_results: Vec<HoleResult>,
}

/// Recompute totals and per-hole results from hole 1 through `upto_hole`.
///
/// Always a full pass: an edit on an early hole must be reflected in every
/// total, so nothing is carried over from a previous computation.
pub fn recompute_round(
    strokes: &StrokeMatrix,
    rules: &RulesConfig,
    players: &[Player],
    course: &Course,
    upto_hole: u8,
) -> Result<RoundScores> {
    slot(upto_hole)?;
    course.validate()?;
    if strokes.player_count() != players.len() {
        return Err(InvalidInput::Players(format!(
            "stroke card has {} rows for {} players",
            strokes.player_count(),
            players.len()
        )));
    }

    let mut totals: Vec<Points> = players
        .iter()
        .map(|p| Points::from(p.start_points))
        .collect();
    let mut hole_results = Vec::new();

    for hole in 1..=upto_hole {
        let Some(entries) = strokes.hole_strokes(hole) else {
            tracing::trace!(hole, "hole incomplete, skipped");
            continue;
        };
        let par = course
            .par(hole)
            .ok_or(InvalidInput::UnknownHole(hole))?;
        let result = compute_hole_result(hole, &entries, rules, par)?;
        for entry in &result.entries {
            totals[entry.player] += entry.points;
        }
        hole_results.push(result);
    }

    tracing::debug!(
        upto_hole,
        scored = hole_results.len(),
        "recomputed round"
    );

    Ok(RoundScores {
        totals: RoundTotals(totals),
        hole_results,
    })
}

/// Options fixed when a round is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOptions {
    /// Start every cell at par instead of empty.
    pub prefill_par: bool,
}

/// A single stroke entry from the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeEdit {
    pub player: PlayerId,
    pub hole: u8,
    pub strokes: u32,
}

/// Outcome of stepping the current-hole pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Moved(RoundState),
    /// Stepping back from hole 1 or by more than the card allows.
    Blocked,
    /// Stepping forward from the last hole ends the round.
    FinishRound,
}

/// The complete state of one round.
///
/// Values are never edited in place: every operation returns a new state or
/// an error, leaving `self` as the last valid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    players: Vec<Player>,
    rules: RulesConfig,
    course: Course,
    strokes: StrokeMatrix,
    current_hole: u8,
    scores: RoundScores,
}

impl RoundState {
    pub fn new(
        players: Vec<Player>,
        rules: RulesConfig,
        course: Course,
        options: RoundOptions,
    ) -> Result<Self> {
        validate_players(&players)?;
        course.validate()?;
        let strokes = if options.prefill_par {
            StrokeMatrix::prefilled(players.len(), &course)
        } else {
            StrokeMatrix::new(players.len())
        };
        let scores = recompute_round(&strokes, &rules, &players, &course, HOLE_COUNT)?;
        tracing::info!(
            players = players.len(),
            course = %course.name,
            prefill_par = options.prefill_par,
            "round started"
        );
        Ok(Self {
            players,
            rules,
            course,
            strokes,
            current_hole: 1,
            scores,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn strokes(&self) -> &StrokeMatrix {
        &self.strokes
    }

    pub fn current_hole(&self) -> u8 {
        self.current_hole
    }

    pub fn scores(&self) -> &RoundScores {
        &self.scores
    }

    pub fn totals(&self) -> &RoundTotals {
        &self.scores.totals
    }

    pub fn hole_results(&self) -> &[HoleResult] {
        &self.scores.hole_results
    }

    pub fn hole_result(&self, hole: u8) -> Option<&HoleResult> {
        self.scores.hole_results.iter().find(|r| r.hole == hole)
    }

    pub fn current_hole_result(&self) -> Option<&HoleResult> {
        self.hole_result(self.current_hole)
    }

    /// All 18 holes have a result.
    pub fn is_complete(&self) -> bool {
        self.scores.hole_results.len() == HOLES
    }

    fn with_strokes(&self, strokes: StrokeMatrix) -> Result<Self> {
        let scores = recompute_round(
            &strokes,
            &self.rules,
            &self.players,
            &self.course,
            HOLE_COUNT,
        )?;
        Ok(Self {
            strokes,
            scores,
            ..self.clone()
        })
    }

    /// Record one stroke entry and recompute the whole round.
    pub fn apply_edit(&self, edit: StrokeEdit) -> Result<Self> {
        let mut strokes = self.strokes.clone();
        strokes.set(edit.player, edit.hole, edit.strokes)?;
        tracing::debug!(
            player = edit.player,
            hole = edit.hole,
            strokes = edit.strokes,
            "stroke entry"
        );
        self.with_strokes(strokes)
    }

    /// Nudge a player's strokes by `delta`, starting from par if nothing is
    /// entered. The result never drops below 1.
    pub fn adjust(&self, player: PlayerId, hole: u8, delta: i32) -> Result<Self> {
        let cell = self.strokes.cell(player, hole)?;
        let par = self
            .course
            .par(hole)
            .ok_or(InvalidInput::UnknownHole(hole))?;
        let base = cell.strokes().unwrap_or(par as u32) as i64;
        let strokes = (base + delta as i64).clamp(1, u32::MAX as i64) as u32;
        self.apply_edit(StrokeEdit {
            player,
            hole,
            strokes,
        })
    }

    /// Mark every par-defaulted entry on `hole` as confirmed.
    pub fn confirm_hole(&self, hole: u8) -> Result<Self> {
        let mut strokes = self.strokes.clone();
        strokes.confirm_hole(hole)?;
        self.with_strokes(strokes)
    }

    pub fn goto_hole(&self, hole: u8) -> Result<Self> {
        slot(hole)?;
        Ok(Self {
            current_hole: hole,
            ..self.clone()
        })
    }

    /// Step the current-hole pointer by `step` holes.
    pub fn navigate(&self, step: i8) -> Navigation {
        let target = self.current_hole as i16 + step as i16;
        if step > 0 && self.current_hole == HOLE_COUNT {
            return Navigation::FinishRound;
        }
        if target < 1 || target > HOLE_COUNT as i16 {
            return Navigation::Blocked;
        }
        Navigation::Moved(Self {
            current_hole: target as u8,
            ..self.clone()
        })
    }

    /// Recompute derived scores from this state's inputs.
    pub fn recompute(&self) -> Result<RoundScores> {
        recompute_round(
            &self.strokes,
            &self.rules,
            &self.players,
            &self.course,
            HOLE_COUNT,
        )
    }

    /// Structural checks for a state that did not come from `new`.
    ///
    /// Stored scores are not compared against a recompute here; decoding in
    /// `persist` does that.
    pub fn validate(&self) -> Result<()> {
        validate_players(&self.players)?;
        self.course.validate()?;
        slot(self.current_hole)?;
        if self.strokes.player_count() != self.players.len() {
            return Err(InvalidInput::Players(format!(
                "stroke card has {} rows for {} players",
                self.strokes.player_count(),
                self.players.len()
            )));
        }
        self.strokes.validate()
    }
}
