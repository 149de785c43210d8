use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, Result};

/// Flat bonus for a hole-in-one when `hio_win` is enabled.
pub const HOLE_IN_ONE_BONUS: i32 = 10;

/// Number of finishing positions that earn position points.
pub const PAID_POSITIONS: usize = 3;

/// Match-points rules, fixed for the lifetime of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Points for the best score on a hole.
    pub first_points: i32,
    pub second_points: i32,
    pub third_points: i32,
    /// Bonus for exactly one under par.
    pub birdie_bonus: i32,
    /// Bonus for exactly two under par.
    pub eagle_bonus: i32,
    /// Whether a hole-in-one earns `HOLE_IN_ONE_BONUS`.
    pub hio_win: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            first_points: 2,
            second_points: 1,
            third_points: 0,
            birdie_bonus: 1,
            eagle_bonus: 2,
            hio_win: false,
        }
    }
}

impl RulesConfig {
    /// Points for a zero-based finishing position. Fourth place and below earn 0.
    pub fn position_points(&self, position: usize) -> i32 {
        match position {
            0 => self.first_points,
            1 => self.second_points,
            2 => self.third_points,
            _ => 0,
        }
    }

    /// Sum of everything the position table can pay out on one hole.
    pub fn position_pool(&self) -> i64 {
        (0..PAID_POSITIONS)
            .map(|p| self.position_points(p) as i64)
            .sum()
    }

    /// Score-vs-par bonus for a single player's strokes on a hole.
    ///
    /// An ace is classified before eagle/birdie: with `hio_win` off it earns
    /// nothing extra, even on a par 3.
    pub fn bonus_for(&self, strokes: u32, par: u8) -> i32 {
        if strokes == 1 {
            return if self.hio_win { HOLE_IN_ONE_BONUS } else { 0 };
        }
        match strokes as i64 - par as i64 {
            -2 => self.eagle_bonus,
            -1 => self.birdie_bonus,
            _ => 0,
        }
    }

    /// Parse rules from TOML. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str::<Self>(contents).map_err(|e| InvalidInput::Rules(e.to_string()))
    }

    /// Load rules from `MATCHPOINTS_RULES` or `config/rules.toml`, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(std::env::var("MATCHPOINTS_RULES").ok())
    }

    fn load_from(env_path: Option<String>) -> Self {
        if let Some(path) = env_path {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match Self::from_toml_str(&contents) {
                    Ok(rules) => return rules,
                    Err(e) => tracing::warn!(%path, "ignoring rules file: {e}"),
                },
                Err(e) => tracing::warn!(%path, "cannot read rules file: {e}"),
            }
        }
        if let Ok(contents) = std::fs::read_to_string("config/rules.toml") {
            match Self::from_toml_str(&contents) {
                Ok(rules) => return rules,
                Err(e) => tracing::warn!("ignoring config/rules.toml: {e}"),
            }
        }
        Self::default()
    }
}
