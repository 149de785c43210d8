pub mod course;
pub mod error;
pub mod player;
pub mod points;
pub mod rules;

pub use course::{Course, HOLE_COUNT, Hole, default_course};
pub use error::InvalidInput;
pub use player::{Player, PlayerId};
pub use points::Points;
pub use rules::RulesConfig;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::course::{Course, HOLE_COUNT, Hole};
    use crate::player::Player;
    use crate::rules::RulesConfig;

    /// Create `n` players named "Player 1".."Player n" with no head start.
    pub fn make_players(n: usize) -> Vec<Player> {
        (0..n).map(|i| Player::new(i, "", 0)).collect()
    }

    /// Create players from `(name, start_points)` pairs.
    pub fn named_players(entries: &[(&str, i32)]) -> Vec<Player> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (name, start))| Player::new(i, name, *start))
            .collect()
    }

    /// Build a rules table in positional order: first, second, third, birdie, eagle, hio.
    pub fn rules(
        first: i32,
        second: i32,
        third: i32,
        birdie: i32,
        eagle: i32,
        hio_win: bool,
    ) -> RulesConfig {
        RulesConfig {
            first_points: first,
            second_points: second,
            third_points: third,
            birdie_bonus: birdie,
            eagle_bonus: eagle,
            hio_win,
        }
    }

    /// An 18-hole course where every hole has the same par.
    pub fn flat_course(par: u8) -> Course {
        Course {
            name: format!("Flat par {par}"),
            holes: (1..=HOLE_COUNT)
                .map(|n| Hole::new(n, par, 300, n))
                .collect(),
        }
    }
}
