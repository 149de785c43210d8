use thiserror::Error;

use crate::player::PlayerId;

/// Input rejected before any round state is touched.
///
/// An incomplete hole is not an error: it is skipped during recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("stroke count must be at least 1 (player {player}, hole {hole}, got {strokes})")]
    NonPositiveStrokes {
        player: PlayerId,
        hole: u8,
        strokes: u32,
    },

    #[error("unknown player index {0}")]
    UnknownPlayer(PlayerId),

    #[error("hole {0} is outside 1..=18")]
    UnknownHole(u8),

    #[error("hole {hole} is missing a stroke entry for player {player}")]
    MissingEntry { player: PlayerId, hole: u8 },

    #[error("hole {hole} has par {par}, expected at least 3")]
    InvalidPar { hole: u8, par: u8 },

    #[error("invalid rules: {0}")]
    Rules(String),

    #[error("invalid course: {0}")]
    Course(String),

    #[error("invalid players: {0}")]
    Players(String),
}

pub type Result<T> = std::result::Result<T, InvalidInput>;
