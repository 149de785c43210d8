//! Match-points engine: per-hole allocation, full-round recomputation,
//! derived statistics and the persisted round state.

pub mod persist;
pub mod round;
pub mod scoring;
pub mod stats;
pub mod summary;

pub use persist::SerializationError;
pub use round::{
    Navigation, RoundOptions, RoundScores, RoundState, RoundTotals, StrokeCell, StrokeEdit,
    StrokeMatrix, recompute_round,
};
pub use scoring::{HoleEntry, HoleResult, compute_hole_result};
pub use stats::{PlayerStats, best_streak, holes_won, hot_streak, player_stats};
pub use summary::{LeaderboardRow, ParStatus, RoundSummary, leaderboard, summarize};
