//! Deterministic dice.
//!
//! # Determinism strategy
//!
//! All randomness in a run comes from one 32-bit seed.  The generator is
//! Mulberry32: tiny state, fast, and reproducible bit-for-bit on any
//! platform, which is what a classroom game needs (two students typing the
//! same seed must see the same dice).
//!
//! The Monte-Carlo lead-time estimator needs randomness too, but must never
//! advance the main die sequence.  It gets its own stream derived from the
//! seed plus [`LEAD_TIME_STREAM_OFFSET`], rebuilt on every estimate.

use rand::{Error, RngCore, SeedableRng};

use crate::NUM_STAGES;

/// Added to the run seed to derive the isolated lead-time sampling stream.
pub const LEAD_TIME_STREAM_OFFSET: u32 = 987_654_321;

/// 2^32, the divisor that maps a `u32` draw into `[0, 1)`.
const U32_RANGE: f64 = 4_294_967_296.0;

// ── Mulberry32 ────────────────────────────────────────────────────────────────

/// The Mulberry32 generator.  Implements [`RngCore`] so it plugs into the
/// `rand` distribution API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Mulberry32 { state: seed }
    }
}

impl RngCore for Mulberry32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
        r ^ (r >> 14)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: [u8; 4]) -> Self {
        Mulberry32::new(u32::from_le_bytes(seed))
    }
}

// ── DiceRng ───────────────────────────────────────────────────────────────────

/// The run's source of die rolls.
///
/// Used only from the single thread that advances the line.  Two `DiceRng`s
/// built from the same seed produce identical sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiceRng(Mulberry32);

impl DiceRng {
    pub fn new(seed: u32) -> Self {
        DiceRng(Mulberry32::new(seed))
    }

    /// The isolated stream used by Monte-Carlo lead-time sampling.
    pub fn lead_time_stream(seed: u32) -> Self {
        DiceRng::new(seed.wrapping_add(LEAD_TIME_STREAM_OFFSET))
    }

    /// A uniform draw in `[0, 1)`.
    #[inline]
    pub fn next_unit(&mut self) -> f64 {
        self.0.next_u32() as f64 / U32_RANGE
    }

    /// One fair die: `floor(u · 6) + 1`, always in `1..=6`.
    #[inline]
    pub fn roll(&mut self) -> u8 {
        (self.next_unit() * 6.0) as u8 + 1
    }

    /// One die per machine, in line order.
    pub fn roll_line(&mut self) -> [u8; NUM_STAGES] {
        std::array::from_fn(|_| self.roll())
    }

    /// Expose the inner generator for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut Mulberry32 {
        &mut self.0
    }
}
