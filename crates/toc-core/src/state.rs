//! Immutable per-round snapshots.

use crate::{NUM_STAGES, ParameterSet, Round, Stock};

// ── Ledger ────────────────────────────────────────────────────────────────────

/// Running financial totals.  All money fields are cumulative since round 0
/// except `operating_profit` and `roi`, which are derived from them.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ledger {
    pub revenue:          f64,
    pub fixed_cost:       f64,
    pub holding_cost:     f64,
    /// Variable cost of everything released into machine 1.
    pub invested_capital: f64,
    pub operating_profit: f64,
    /// `operating_profit / invested_capital`, or 0 with no capital invested.
    pub roi:              f64,
}

// ── SimulationState ───────────────────────────────────────────────────────────

/// The line after some number of rounds.
///
/// Snapshots are values: the engine builds a fresh one each round from its
/// predecessor and never edits an existing one.  Arrays are indexed by
/// [`Stage::index`](crate::Stage::index).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationState {
    pub round: Round,

    /// Die faces rolled this round (0 before the first roll).
    pub dice: [u8; NUM_STAGES],

    /// `floor(die · factor)`, with stage 1 clamped to the release quota
    /// under constrained release.
    pub capacity: [u32; NUM_STAGES],

    /// Input available to each machine at the start of this round.  Stage 1
    /// is unbounded under push and the release quota under constrained mode.
    pub pre_round: [Stock; NUM_STAGES],

    pub production: [u32; NUM_STAGES],

    /// What each machine still had queued once it finished this round.
    /// Upstream output is not in here yet; it lands in `next_pre_round`.
    pub post_round: [Stock; NUM_STAGES],

    /// Input carried into the next round: `post_round[i] + production[i-1]`
    /// for stages 2..=6, the unreleased remainder (or unbounded) for stage 1.
    pub next_pre_round: [Stock; NUM_STAGES],

    /// Units finished by the last machine this round.
    pub throughput: u32,

    pub cumulative_throughput: u64,

    /// Units queued in front of machines 2..=6 at the end of the round.
    pub work_in_process: u64,

    pub lead_time: f64,

    pub ledger: Ledger,

    /// What the release rule would let into machine 1 next round under the
    /// live policy.  A display field: recomputed on soft policy updates
    /// without advancing the round.
    pub release_view: Stock,
}

impl SimulationState {
    /// Round 0: nothing rolled or produced, buffers at their initial levels,
    /// machine 1 facing unbounded input.
    pub fn initial(params: &ParameterSet) -> Self {
        let mut levels = [Stock::Unbounded; NUM_STAGES];
        for (slot, &units) in levels[1..].iter_mut().zip(&params.initial_buffers) {
            *slot = Stock::Units(units);
        }
        Self {
            round:                 Round::ZERO,
            dice:                  [0; NUM_STAGES],
            capacity:              [0; NUM_STAGES],
            pre_round:             levels,
            production:            [0; NUM_STAGES],
            post_round:            levels,
            next_pre_round:        levels,
            throughput:            0,
            cumulative_throughput: 0,
            work_in_process:       sum_buffers(&levels),
            lead_time:             0.0,
            ledger:                Ledger::default(),
            release_view:          Stock::Unbounded,
        }
    }

    /// Average units finished per round so far (0 at round 0).
    pub fn mean_throughput(&self) -> f64 {
        if self.round.0 == 0 {
            0.0
        } else {
            self.cumulative_throughput as f64 / self.round.0 as f64
        }
    }

    /// Pre-round queues of machines 2..=6, the "buffers" of the game board.
    pub fn buffers(&self) -> &[Stock] {
        &self.pre_round[1..]
    }
}

/// Sum of the finite levels of stages 2..=6.  Stage 1 has no bounded buffer
/// and is always excluded.
pub fn sum_buffers(levels: &[Stock; NUM_STAGES]) -> u64 {
    levels[1..].iter().map(|s| s.units_or_zero() as u64).sum()
}
