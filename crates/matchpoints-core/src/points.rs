use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

/// An exact match-points value.
///
/// Tie groups split position points evenly, so a hole can award thirds or
/// quarters. Keeping the value as a reduced fraction means running totals
/// compare exactly against the per-hole sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPoints", into = "RawPoints")]
pub struct Points {
    num: i64,
    den: i64,
}

#[derive(Serialize, Deserialize)]
struct RawPoints {
    num: i64,
    den: i64,
}

impl TryFrom<RawPoints> for Points {
    type Error = String;

    fn try_from(raw: RawPoints) -> Result<Self, Self::Error> {
        if raw.den <= 0 {
            return Err(format!("points denominator must be positive, got {}", raw.den));
        }
        Ok(Self::ratio(raw.num, raw.den))
    }
}

impl From<Points> for RawPoints {
    fn from(p: Points) -> Self {
        Self {
            num: p.num,
            den: p.den,
        }
    }
}

impl Points {
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// `num / den`, reduced. `den` must be non-zero.
    pub fn ratio(num: i64, den: i64) -> Self {
        debug_assert!(den != 0, "points denominator must be non-zero");
        let sign = if den < 0 { -1 } else { 1 };
        let (num, den) = (num * sign, den * sign);
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()).max(1) as i64;
        Self {
            num: num / g,
            den: den / g,
        }
    }

    pub const fn whole(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    pub const fn numerator(self) -> i64 {
        self.num
    }

    pub const fn denominator(self) -> i64 {
        self.den
    }

    pub const fn is_whole(self) -> bool {
        self.den == 1
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Default for Points {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i32> for Points {
    fn from(value: i32) -> Self {
        Self::whole(value as i64)
    }
}

impl From<i64> for Points {
    fn from(value: i64) -> Self {
        Self::whole(value)
    }
}

impl Add for Points {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.den == rhs.den {
            return Self::ratio(self.num + rhs.num, self.den);
        }
        Self::ratio(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for Points {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Sub for Points {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Points> for Points {
    fn sum<I: Iterator<Item = &'a Points>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Ord for Points {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying preserves order.
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Points {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            return write!(f, "{}", self.num);
        }
        let rendered = format!("{:.2}", self.to_f64());
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
        f.write_str(trimmed)
    }
}
