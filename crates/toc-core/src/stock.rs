//! Inventory levels that may be unbounded.
//!
//! Under push release the first machine has an endless pile of raw material
//! in front of it.  Rather than carrying `f64::INFINITY` through the
//! arithmetic, that case is a variant of its own: it counts as zero in sums
//! and never limits production in comparisons.

use std::fmt;

/// Units waiting in front of a stage.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stock {
    /// No upper bound on available input.
    Unbounded,
    /// A finite queue of units.
    Units(u32),
}

impl Stock {
    pub const EMPTY: Stock = Stock::Units(0);

    #[inline]
    pub fn is_unbounded(self) -> bool {
        matches!(self, Stock::Unbounded)
    }

    /// Finite level, with `Unbounded` counting as 0.  Use for sums.
    #[inline]
    pub fn units_or_zero(self) -> u32 {
        match self {
            Stock::Unbounded => 0,
            Stock::Units(n) => n,
        }
    }

    /// How many of `capacity` units this stock can actually feed.
    #[inline]
    pub fn limit(self, capacity: u32) -> u32 {
        match self {
            Stock::Unbounded => capacity,
            Stock::Units(n) => n.min(capacity),
        }
    }

    /// Remove `n` units.  Unbounded stays unbounded; finite stock saturates at 0.
    #[inline]
    pub fn drain(self, n: u32) -> Stock {
        match self {
            Stock::Unbounded => Stock::Unbounded,
            Stock::Units(have) => Stock::Units(have.saturating_sub(n)),
        }
    }

    /// Finite level after `n` units arrive.  An unbounded level is treated as
    /// empty first, so arrivals always produce a finite queue.
    #[inline]
    pub fn receive(self, n: u32) -> Stock {
        Stock::Units(self.units_or_zero() + n)
    }

    /// Numeric view; `Unbounded` maps to `f64::INFINITY`.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Stock::Unbounded => f64::INFINITY,
            Stock::Units(n) => n as f64,
        }
    }
}

impl Default for Stock {
    fn default() -> Self {
        Stock::EMPTY
    }
}

impl From<u32> for Stock {
    fn from(n: u32) -> Self {
        Stock::Units(n)
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stock::Unbounded => f.write_str("∞"),
            Stock::Units(n) => write!(f, "{n}"),
        }
    }
}
