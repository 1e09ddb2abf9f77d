//! Run configuration.
//!
//! # Design
//!
//! A [`ParameterSet`] is an immutable value describing one run: machine
//! capacity factors, starting buffers, prices and costs, the release policy,
//! the lead-time method, and the RNG seed.  The defaults reproduce the
//! classroom version of the dice game (six machines, M4 at half capacity).
//!
//! Nothing here is validated.  Array shapes are fixed by the types; value
//! ranges (non-negative factors, sensible costs) are the caller's concern.

use std::fmt;

use crate::{NUM_STAGES, Stage, TocError, TocResult};

/// Expected face value of a fair six-sided die.
pub const MEAN_DIE: f64 = 3.5;

/// Monte-Carlo lead-time estimates never use fewer trials than this.
pub const MIN_MONTE_CARLO_RUNS: u32 = 10;

// ── ReleasePolicy ─────────────────────────────────────────────────────────────

/// How the first machine is fed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReleaseMode {
    /// Unlimited raw material; every machine runs as fast as its dice allow.
    #[default]
    Push,
    /// Drum-Buffer-Rope: release only enough to refill the bottleneck buffer.
    Constrained,
}

impl fmt::Display for ReleaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReleaseMode::Push        => "push",
            ReleaseMode::Constrained => "constrained",
        })
    }
}

/// Size of the protective buffer in front of the bottleneck.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BufferTarget {
    /// An explicit number of pieces.
    Pieces(u32),
    /// Rounds of average bottleneck output, converted to pieces every round.
    Days(f64),
}

impl Default for BufferTarget {
    fn default() -> Self {
        BufferTarget::Days(3.0)
    }
}

/// Release-policy configuration for stage 1.
///
/// This is plain data; the rule itself is evaluated by `toc-flow` from the
/// live parameters every round, so swapping in a new policy mid-run takes
/// effect on the next round without touching any accumulated state.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleasePolicy {
    pub mode:       ReleaseMode,
    /// The machine treated as the constraint.
    pub bottleneck: Stage,
    pub target:     BufferTarget,
}

impl ReleasePolicy {
    /// Unlimited release.  Bottleneck and target are kept so that switching
    /// to constrained mode later has something to work with.
    pub fn push(bottleneck: Stage, target: BufferTarget) -> Self {
        Self { mode: ReleaseMode::Push, bottleneck, target }
    }

    /// Drum-Buffer-Rope release protecting `bottleneck`.
    pub fn constrained(bottleneck: Stage, target: BufferTarget) -> Self {
        Self { mode: ReleaseMode::Constrained, bottleneck, target }
    }

    #[inline]
    pub fn is_constrained(&self) -> bool {
        self.mode == ReleaseMode::Constrained
    }
}

impl Default for ReleasePolicy {
    fn default() -> Self {
        ReleasePolicy::push(Stage::CLASSIC_BOTTLENECK, BufferTarget::default())
    }
}

// ── LeadTimeMethod ────────────────────────────────────────────────────────────

/// Which estimator fills `SimulationState::lead_time`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LeadTimeMethod {
    /// WIP divided by mean throughput.
    #[default]
    LittlesLaw,
    /// Sum of per-stage queueing, service and transfer times.
    StageAnalytical,
    /// Mean of the all-sixes and all-ones per-stage sums.
    MinMaxWindow,
    /// Average walk time of a notional unit over sampled dice.
    MonteCarlo,
}

impl LeadTimeMethod {
    /// The numeric code used on the game's control panel (1..=4).
    pub fn code(self) -> u8 {
        match self {
            LeadTimeMethod::LittlesLaw      => 1,
            LeadTimeMethod::StageAnalytical => 2,
            LeadTimeMethod::MinMaxWindow    => 3,
            LeadTimeMethod::MonteCarlo      => 4,
        }
    }
}

impl TryFrom<u8> for LeadTimeMethod {
    type Error = TocError;
    fn try_from(code: u8) -> TocResult<Self> {
        match code {
            1 => Ok(LeadTimeMethod::LittlesLaw),
            2 => Ok(LeadTimeMethod::StageAnalytical),
            3 => Ok(LeadTimeMethod::MinMaxWindow),
            4 => Ok(LeadTimeMethod::MonteCarlo),
            other => Err(TocError::InvalidLeadTimeMethod(other)),
        }
    }
}

impl fmt::Display for LeadTimeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LeadTimeMethod::LittlesLaw      => "little",
            LeadTimeMethod::StageAnalytical => "stages",
            LeadTimeMethod::MinMaxWindow    => "min-max",
            LeadTimeMethod::MonteCarlo      => "monte-carlo",
        })
    }
}

// ── FinancialFormula ──────────────────────────────────────────────────────────

/// How operating profit is derived from the ledger accumulators.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FinancialFormula {
    /// `revenue − fixed cost`.
    #[default]
    RevenueLessFixed,
    /// Throughput accounting: `(price − variable cost) · ΣTH − fixed cost`.
    Toc,
    /// `revenue − fixed cost − holding cost − variable cost · ΣTH`.
    NetOfCosts,
}

impl FinancialFormula {
    /// Operating profit given the running totals.
    pub fn operating_profit(
        self,
        params:                &ParameterSet,
        revenue:               f64,
        fixed_cost:            f64,
        holding_cost:          f64,
        cumulative_throughput: u64,
    ) -> f64 {
        let units = cumulative_throughput as f64;
        match self {
            FinancialFormula::RevenueLessFixed => revenue - fixed_cost,
            FinancialFormula::Toc => {
                (params.sell_price - params.variable_cost) * units - fixed_cost
            }
            FinancialFormula::NetOfCosts => {
                revenue - fixed_cost - holding_cost - params.variable_cost * units
            }
        }
    }
}

// ── ParameterSet ──────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically built from [`ParameterSet::default`] and adjusted field by
/// field, or loaded from a JSON file by the application crate (with the
/// `serde` feature).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParameterSet {
    /// Per-machine multiplier applied to the die face.
    pub capacity_factors: [f64; NUM_STAGES],

    /// Starting queue in front of machines 2..=6.
    pub initial_buffers: [u32; NUM_STAGES - 1],

    /// Revenue per unit leaving the last machine.
    pub sell_price: f64,

    /// Cost per unit released into machine 1.
    pub variable_cost: f64,

    /// Operating expense charged every round.
    pub fixed_cost_per_round: f64,

    /// Charge per unit of WIP per round.
    pub holding_cost: f64,

    pub policy: ReleasePolicy,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u32,

    pub lead_time_method: LeadTimeMethod,

    /// Rounds a finished unit spends moving to the next machine, as used by
    /// the analytical and Monte-Carlo lead-time estimators.
    pub transfer_delay: u32,

    /// Trials per Monte-Carlo estimate.  Values below
    /// [`MIN_MONTE_CARLO_RUNS`] are raised to it.
    pub monte_carlo_runs: u32,

    pub financial_formula: FinancialFormula,
}

impl ParameterSet {
    /// Average capacity of `stage` per round: `3.5 · factor`.
    #[inline]
    pub fn mean_capacity(&self, stage: Stage) -> f64 {
        MEAN_DIE * self.capacity_factors[stage.index()]
    }

    /// Monte-Carlo trial count after applying the floor.
    #[inline]
    pub fn effective_monte_carlo_runs(&self) -> u32 {
        self.monte_carlo_runs.max(MIN_MONTE_CARLO_RUNS)
    }

    #[inline]
    pub fn is_constrained(&self) -> bool {
        self.policy.is_constrained()
    }

    /// A copy with the release policy replaced.
    pub fn with_policy(&self, policy: ReleasePolicy) -> Self {
        Self { policy, ..self.clone() }
    }

    /// A copy with a different seed.
    pub fn with_seed(&self, seed: u32) -> Self {
        Self { seed, ..self.clone() }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            capacity_factors:     [2.0, 2.0, 2.0, 1.0, 2.0, 2.0],
            initial_buffers:      [0; NUM_STAGES - 1],
            sell_price:           4.0,
            variable_cost:        0.0,
            fixed_cost_per_round: 0.0,
            holding_cost:         0.0,
            policy:               ReleasePolicy::default(),
            seed:                 12_345,
            lead_time_method:     LeadTimeMethod::LittlesLaw,
            transfer_delay:       1,
            monte_carlo_runs:     200,
            financial_formula:    FinancialFormula::RevenueLessFixed,
        }
    }
}
