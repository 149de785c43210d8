use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, Result};

/// Holes in a full round.
pub const HOLE_COUNT: u8 = 18;

/// Lowest par a hole may carry.
pub const MIN_PAR: u8 = 3;

/// Static card data for one hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    pub yards: u16,
    /// Stroke index, 1 = hardest.
    pub handicap_rank: u8,
}

impl Hole {
    pub const fn new(number: u8, par: u8, yards: u16, handicap_rank: u8) -> Self {
        Self {
            number,
            par,
            yards,
            handicap_rank,
        }
    }
}

/// An 18-hole course card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Course {
    /// Look up a hole by its 1-based number.
    pub fn hole(&self, number: u8) -> Option<&Hole> {
        if number == 0 {
            return None;
        }
        self.holes.get(number as usize - 1)
    }

    pub fn par(&self, number: u8) -> Option<u8> {
        self.hole(number).map(|h| h.par)
    }

    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| h.par as u32).sum()
    }

    /// Check the card is a well-formed 18-hole layout.
    pub fn validate(&self) -> Result<()> {
        if self.holes.len() != HOLE_COUNT as usize {
            return Err(InvalidInput::Course(format!(
                "{} has {} holes, expected {HOLE_COUNT}",
                self.name,
                self.holes.len()
            )));
        }
        let mut seen_ranks = [false; HOLE_COUNT as usize];
        for (i, hole) in self.holes.iter().enumerate() {
            let expected = i as u8 + 1;
            if hole.number != expected {
                return Err(InvalidInput::Course(format!(
                    "hole at position {expected} is numbered {}",
                    hole.number
                )));
            }
            if hole.par < MIN_PAR {
                return Err(InvalidInput::InvalidPar {
                    hole: hole.number,
                    par: hole.par,
                });
            }
            let rank = hole.handicap_rank;
            if rank == 0 || rank > HOLE_COUNT || seen_ranks[rank as usize - 1] {
                return Err(InvalidInput::Course(format!(
                    "hole {} has invalid or repeated handicap rank {rank}",
                    hole.number
                )));
            }
            seen_ranks[rank as usize - 1] = true;
        }
        Ok(())
    }
}

/// The built-in course card.
pub fn default_course() -> Course {
    Course {
        name: "Default Course".to_string(),
        holes: vec![
            Hole::new(1, 4, 358, 3),
            Hole::new(2, 3, 148, 14),
            Hole::new(3, 5, 448, 18),
            Hole::new(4, 4, 390, 9),
            Hole::new(5, 5, 492, 12),
            Hole::new(6, 4, 373, 10),
            Hole::new(7, 4, 348, 13),
            Hole::new(8, 3, 224, 7),
            Hole::new(9, 4, 373, 5),
            Hole::new(10, 5, 504, 15),
            Hole::new(11, 3, 164, 17),
            Hole::new(12, 4, 422, 4),
            Hole::new(13, 4, 393, 1),
            Hole::new(14, 3, 137, 16),
            Hole::new(15, 5, 504, 11),
            Hole::new(16, 4, 431, 6),
            Hole::new(17, 4, 390, 8),
            Hole::new(18, 4, 404, 2),
        ],
    }
}
