//! Strongly typed stage and round identifiers.
//!
//! Stages are numbered 1..=6 the way the game board labels its machines
//! (M1..M6).  Per-stage arrays are 0-based, so always go through
//! [`Stage::index`] rather than subtracting by hand.

use std::fmt;

use crate::{TocError, TocResult};

/// Number of machines on the line.
pub const NUM_STAGES: usize = 6;

// ── Stage ─────────────────────────────────────────────────────────────────────

/// One machine on the line, 1-based.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Stage(u8);

impl Stage {
    pub const FIRST: Stage = Stage(1);
    pub const LAST: Stage = Stage(NUM_STAGES as u8);

    /// The half-speed machine of the classic game setup.
    pub(crate) const CLASSIC_BOTTLENECK: Stage = Stage(4);

    /// Build a stage from its 1-based machine number.
    pub fn new(number: u8) -> TocResult<Stage> {
        if (1..=NUM_STAGES as u8).contains(&number) {
            Ok(Stage(number))
        } else {
            Err(TocError::InvalidStage(number))
        }
    }

    /// The 1-based machine number.
    #[inline(always)]
    pub fn number(self) -> u8 {
        self.0
    }

    /// 0-based position for indexing per-stage arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All six stages in line order.
    pub fn all() -> impl Iterator<Item = Stage> {
        (1..=NUM_STAGES as u8).map(Stage)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::FIRST
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

impl TryFrom<u8> for Stage {
    type Error = TocError;
    fn try_from(n: u8) -> TocResult<Stage> {
        Stage::new(n)
    }
}

impl From<Stage> for u8 {
    #[inline(always)]
    fn from(stage: Stage) -> u8 {
        stage.0
    }
}

// ── Round ─────────────────────────────────────────────────────────────────────

/// A round counter.  Round 0 is the untouched initial state; the first
/// simulated round is round 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u64);

impl Round {
    pub const ZERO: Round = Round(0);

    /// The round after `self`.
    #[inline]
    pub fn next(self) -> Round {
        Round(self.0 + 1)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
