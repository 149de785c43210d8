use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "matchpoints")]
#[command(about = "Golf match-points scorekeeper", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "matchpoints.toml")]
    pub config: PathBuf,

    /// Save file for the current round (overrides the config)
    #[arg(short, long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start a new round, replacing any saved one
    New {
        /// Player as NAME or NAME:START_POINTS; repeat for each seat
        #[arg(short, long = "player", value_parser = parse_player_entry, required = true)]
        players: Vec<PlayerEntry>,
        /// Pre-fill every hole with par
        #[arg(long)]
        prefill_par: bool,
    },
    /// Enter strokes for a seat on a hole
    Score { seat: usize, hole: u8, strokes: u32 },
    /// Nudge a seat's strokes on the current (or given) hole
    Adjust {
        seat: usize,
        #[arg(allow_negative_numbers = true)]
        delta: i32,
        #[arg(long)]
        hole: Option<u8>,
    },
    /// Confirm par-defaulted entries on the current (or given) hole
    Confirm {
        #[arg(long)]
        hole: Option<u8>,
    },
    /// Move to the next hole, or finish the round from hole 18
    Next,
    /// Move to the previous hole
    Prev,
    /// Jump to a hole
    Goto { hole: u8 },
    /// Show the leaderboard and current hole
    Show,
    /// Show end-of-round standings and highlights
    Summary,
    /// Show the scoring rules in effect
    Rules,
}

/// A player as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub name: String,
    pub start_points: i32,
}

/// Parse `NAME` or `NAME:START`. A suffix that is not a number stays part of the name.
pub fn parse_player_entry(raw: &str) -> Result<PlayerEntry, String> {
    if let Some((name, start)) = raw.rsplit_once(':')
        && let Ok(start_points) = start.trim().parse::<i32>()
    {
        return Ok(PlayerEntry {
            name: name.to_string(),
            start_points,
        });
    }
    Ok(PlayerEntry {
        name: raw.to_string(),
        start_points: 0,
    })
}
