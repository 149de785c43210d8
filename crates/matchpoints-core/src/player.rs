use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, Result};

/// Stable identifier for a player: their index in the round's player list.
pub type PlayerId = usize;

/// Fewest players a round can be set up with.
pub const MIN_PLAYERS: usize = 2;
/// Most players a round can be set up with.
pub const MAX_PLAYERS: usize = 6;

/// A player seated for a round. Immutable once the round starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Handicap-style head start; may be negative.
    pub start_points: i32,
}

impl Player {
    /// Build the player for seat `index`, falling back to "Player N" for a blank name.
    pub fn new(index: PlayerId, name: &str, start_points: i32) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            Self::default_name(index)
        } else {
            trimmed.to_string()
        };
        Self { name, start_points }
    }

    /// Display name used when none was entered (1-based).
    pub fn default_name(index: PlayerId) -> String {
        format!("Player {}", index + 1)
    }
}

/// Check a seating list before a round is created from it.
pub fn validate_players(players: &[Player]) -> Result<()> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(InvalidInput::Players(format!(
            "expected {MIN_PLAYERS} to {MAX_PLAYERS} players, got {}",
            players.len()
        )));
    }
    if let Some((index, _)) = players
        .iter()
        .enumerate()
        .find(|(_, p)| p.name.trim().is_empty())
    {
        return Err(InvalidInput::Players(format!(
            "player {index} has an empty name"
        )));
    }
    Ok(())
}
