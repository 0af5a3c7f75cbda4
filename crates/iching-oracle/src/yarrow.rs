//! The yarrow-stalk procedure.
//!
//! Each line is decided by three rounds of stalk division. A round splits the
//! stalks into two piles, sets one stalk aside from the right pile, then
//! counts each pile off by fours. The stalks held back in the hand decide the
//! round's value: 4 or 5 held back is worth 3, 8 or 9 is worth 2. The three
//! values sum to 6, 7, 8 or 9, which fixes the line and whether it changes.

use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::{OracleError, OracleResult};

/// Stalks in play at the start of each line (one of the fifty is never used).
pub const STALKS: u32 = 49;

/// Division rounds per line.
pub const ROUNDS_PER_LINE: usize = 3;

/// Minimum size of the left pile.
const MIN_LEFT: u32 = 4;

/// Minimum size of the right pile.
const MIN_RIGHT: u32 = 5;

/// The four kinds of line a cast can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Sum 6: yin, changing to yang.
    OldYin,
    /// Sum 7: yang, stable.
    YoungYang,
    /// Sum 8: yin, stable.
    YoungYin,
    /// Sum 9: yang, changing to yin.
    OldYang,
}

impl LineKind {
    /// Map a raw sum of three round values to a line kind.
    pub fn from_sum(sum: u32) -> Option<Self> {
        match sum {
            6 => Some(Self::OldYin),
            7 => Some(Self::YoungYang),
            8 => Some(Self::YoungYin),
            9 => Some(Self::OldYang),
            _ => None,
        }
    }

    /// The traditional number for this kind.
    pub fn sum(self) -> u32 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// 1 for yang, 0 for yin.
    pub fn value(self) -> u8 {
        match self {
            Self::YoungYang | Self::OldYang => 1,
            Self::OldYin | Self::YoungYin => 0,
        }
    }

    /// Whether the line is about to flip.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OldYin => write!(f, "old yin"),
            Self::YoungYang => write!(f, "young yang"),
            Self::YoungYin => write!(f, "young yin"),
            Self::OldYang => write!(f, "old yang"),
        }
    }
}

/// One round of stalk division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StalkDivision {
    /// Stalks at the start of the round.
    pub total: u32,
    /// Size of the left pile.
    pub left: u32,
    /// Size of the right pile, before one stalk is set aside.
    pub right: u32,
    /// Stalks held back: the set-aside stalk plus both remainders.
    pub stalks_used: u32,
    /// 3 for 4-5 stalks used, 2 for 8-9.
    pub value: u32,
}

/// The three rounds that decided one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineCast {
    /// The division rounds, in order.
    pub rounds: Vec<StalkDivision>,
    /// Sum of the round values.
    pub sum: u32,
    /// The resulting line.
    pub kind: LineKind,
}

impl LineCast {
    /// 1 for yang, 0 for yin.
    pub fn value(&self) -> u8 {
        self.kind.value()
    }

    /// Whether the line is about to flip.
    pub fn is_changing(&self) -> bool {
        self.kind.is_changing()
    }
}

/// What is left of a pile counted off by fours; a multiple of four leaves four.
fn remainder(pile: u32) -> u32 {
    match pile % 4 {
        0 => 4,
        r => r,
    }
}

fn round_value(stalks_used: u32) -> OracleResult<u32> {
    match stalks_used {
        4 | 5 => Ok(3),
        8 | 9 => Ok(2),
        other => Err(OracleError::InvariantViolation(format!(
            "{other} stalks held back in one round"
        ))),
    }
}

/// Run one round of division over `total` stalks.
pub fn divide_stalks(total: u32, rng: &mut StdRng) -> OracleResult<StalkDivision> {
    if total < MIN_LEFT + MIN_RIGHT {
        return Err(OracleError::InvariantViolation(format!(
            "cannot divide {total} stalks into two piles"
        )));
    }
    let r: f64 = rng.random();
    let span = f64::from(total - MIN_LEFT - MIN_RIGHT);
    // left in MIN_LEFT..=total - MIN_RIGHT
    let left = (r * span + f64::from(MIN_LEFT)).ceil() as u32;
    let left = left.clamp(MIN_LEFT, total - MIN_RIGHT);
    let right = total - left;

    let stalks_used = 1 + remainder(left) + remainder(right - 1);
    let value = round_value(stalks_used)?;

    Ok(StalkDivision {
        total,
        left,
        right,
        stalks_used,
        value,
    })
}

/// Cast one line: three rounds, each starting from what the previous left.
pub fn cast_line(rng: &mut StdRng) -> OracleResult<LineCast> {
    let mut total = STALKS;
    let mut rounds = Vec::with_capacity(ROUNDS_PER_LINE);
    for _ in 0..ROUNDS_PER_LINE {
        let round = divide_stalks(total, rng)?;
        total -= round.stalks_used;
        rounds.push(round);
    }

    let sum = rounds.iter().map(|r| r.value).sum();
    let kind = LineKind::from_sum(sum).ok_or_else(|| {
        OracleError::InvariantViolation(format!("line sum {sum} outside 6-9"))
    })?;

    Ok(LineCast { rounds, sum, kind })
}
