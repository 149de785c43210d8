use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

use matchpoints_core::{InvalidInput, Player, PlayerId, default_course};
use matchpoints_engine::persist::load_or_fresh;
use matchpoints_engine::{
    Navigation, RoundOptions, RoundState, StrokeEdit, leaderboard, summarize,
};

use crate::cli::{Command, PlayerEntry};
use crate::config::AppConfig;
use crate::render;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no round in progress; start one with `matchpoints new`")]
    NoRound,

    #[error("seats are numbered from 1")]
    SeatZero,

    #[error("rejected: {0}")]
    Invalid(#[from] InvalidInput),
}

/// What a command produced. `state` is set only when the round changed and
/// must be saved.
#[derive(Debug)]
pub struct Outcome {
    pub state: Option<RoundState>,
    pub output: String,
}

impl Outcome {
    fn changed(state: RoundState, output: String) -> Self {
        Self {
            state: Some(state),
            output,
        }
    }

    fn view(output: String) -> Self {
        Self {
            state: None,
            output,
        }
    }
}

/// Load the saved round, if any. A save that cannot be read or fails
/// validation is discarded.
pub fn load_current(path: &Path) -> Option<RoundState> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no saved round");
            return None;
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), "cannot read saved round: {e}");
            return None;
        },
    };
    load_or_fresh(&contents, || None)
}

fn seat_to_player(seat: usize) -> Result<PlayerId, CommandError> {
    seat.checked_sub(1).ok_or(CommandError::SeatZero)
}

fn new_round(
    entries: &[PlayerEntry],
    prefill_par: bool,
    config: &AppConfig,
) -> Result<RoundState, CommandError> {
    let players = entries
        .iter()
        .enumerate()
        .map(|(i, e)| Player::new(i, &e.name, e.start_points))
        .collect();
    Ok(RoundState::new(
        players,
        config.rules.clone(),
        default_course(),
        RoundOptions {
            prefill_par: prefill_par || config.prefill_par,
        },
    )?)
}

fn show(state: &RoundState) -> String {
    render::round(state, &leaderboard(state))
}

fn step(state: &RoundState, step: i8) -> Outcome {
    match state.navigate(step) {
        Navigation::Moved(next) => {
            let output = show(&next);
            Outcome::changed(next, output)
        },
        Navigation::Blocked => Outcome::view(format!(
            "Already at hole {}\n\n{}",
            state.current_hole(),
            show(state)
        )),
        Navigation::FinishRound => {
            tracing::info!("round finished");
            Outcome::view(render::summary(&summarize(state), state))
        },
    }
}

/// Run one command against the current round.
pub fn execute(
    command: &Command,
    current: Option<&RoundState>,
    config: &AppConfig,
) -> Result<Outcome, CommandError> {
    let round = || current.ok_or(CommandError::NoRound);
    let outcome = match command {
        Command::New {
            players,
            prefill_par,
        } => {
            let state = new_round(players, *prefill_par, config)?;
            let output = show(&state);
            Outcome::changed(state, output)
        },
        Command::Score {
            seat,
            hole,
            strokes,
        } => {
            let next = round()?.apply_edit(StrokeEdit {
                player: seat_to_player(*seat)?,
                hole: *hole,
                strokes: *strokes,
            })?;
            let output = show(&next);
            Outcome::changed(next, output)
        },
        Command::Adjust { seat, delta, hole } => {
            let state = round()?;
            let hole = hole.unwrap_or(state.current_hole());
            let next = state.adjust(seat_to_player(*seat)?, hole, *delta)?;
            let output = show(&next);
            Outcome::changed(next, output)
        },
        Command::Confirm { hole } => {
            let state = round()?;
            let hole = hole.unwrap_or(state.current_hole());
            let next = state.confirm_hole(hole)?;
            let output = format!("Hole {hole} confirmed\n\n{}", show(&next));
            Outcome::changed(next, output)
        },
        Command::Next => step(round()?, 1),
        Command::Prev => step(round()?, -1),
        Command::Goto { hole } => {
            let next = round()?.goto_hole(*hole)?;
            let output = show(&next);
            Outcome::changed(next, output)
        },
        Command::Show => Outcome::view(show(round()?)),
        Command::Summary => {
            let state = round()?;
            Outcome::view(render::summary(&summarize(state), state))
        },
        Command::Rules => {
            let rules = current.map_or(&config.rules, |s| s.rules());
            Outcome::view(render::rules(rules))
        },
    };
    Ok(outcome)
}
