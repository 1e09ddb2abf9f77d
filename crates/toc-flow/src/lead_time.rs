//! Lead-time estimators.
//!
//! Four interchangeable ways to answer "how long will a unit released now
//! take to leave the line?".  All of them read the same
//! [`LeadTimeContext`] and return a non-negative number of rounds.  When the
//! answer is undefined (no throughput yet, a machine with zero capacity) they
//! return 0 instead of dividing by zero or looping forever.
//!
//! | Method              | Formula                                                   |
//! |---------------------|-----------------------------------------------------------|
//! | [`LittlesLaw`]      | `WIP / mean TH`                                           |
//! | [`StageAnalytical`] | `Σ queue/μ + 1/μ + transfer`, `μ = 3.5 · factor`          |
//! | [`MinMaxWindow`]    | mean of the stage sum at `μ = 6 · factor` and `1 · factor` |
//! | [`MonteCarlo`]      | mean walk time of one unit over sampled dice              |

use toc_core::{DiceRng, LeadTimeMethod, MEAN_DIE, NUM_STAGES, ParameterSet, Stage, Stock};

/// What the estimators may look at.
#[derive(Clone, Copy, Debug)]
pub struct LeadTimeContext<'a> {
    /// Units queued in front of machines 2..=6 at round end.
    pub work_in_process: u64,
    /// Cumulative throughput divided by rounds played.
    pub mean_throughput: f64,
    /// Queues at the start of the round being estimated.
    pub pre_round: &'a [Stock; NUM_STAGES],
}

impl LeadTimeContext<'_> {
    /// Units ahead of a new arrival at `stage`.
    ///
    /// Machine 1 only has a real queue under constrained release, where it
    /// is the released-but-unprocessed quota; under push its input is
    /// unbounded and counts as nothing waiting.
    fn queue_ahead(&self, params: &ParameterSet, stage: Stage) -> f64 {
        if stage == Stage::FIRST && !params.is_constrained() {
            return 0.0;
        }
        self.pre_round[stage.index()].units_or_zero() as f64
    }
}

/// Pluggable lead-time estimator.
pub trait LeadTimeEstimator {
    /// Estimated rounds in system.  Never negative, never NaN.
    fn estimate(&self, params: &ParameterSet, ctx: &LeadTimeContext<'_>) -> f64;
}

// ── 1. Little's Law ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct LittlesLaw;

impl LeadTimeEstimator for LittlesLaw {
    fn estimate(&self, _params: &ParameterSet, ctx: &LeadTimeContext<'_>) -> f64 {
        if ctx.mean_throughput > 0.0 {
            ctx.work_in_process as f64 / ctx.mean_throughput
        } else {
            0.0
        }
    }
}

// ── 2. Per-stage analytical ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct StageAnalytical;

impl LeadTimeEstimator for StageAnalytical {
    fn estimate(&self, params: &ParameterSet, ctx: &LeadTimeContext<'_>) -> f64 {
        if !all_stages_productive(params) {
            return 0.0;
        }
        stage_sum(params, ctx, MEAN_DIE)
    }
}

// ── 3. Min–max window ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct MinMaxWindow;

impl MinMaxWindow {
    /// `(best, worst)`: every die showing 6, every die showing 1.
    pub fn window(params: &ParameterSet, ctx: &LeadTimeContext<'_>) -> (f64, f64) {
        if !all_stages_productive(params) {
            return (0.0, 0.0);
        }
        (stage_sum(params, ctx, 6.0), stage_sum(params, ctx, 1.0))
    }
}

impl LeadTimeEstimator for MinMaxWindow {
    fn estimate(&self, params: &ParameterSet, ctx: &LeadTimeContext<'_>) -> f64 {
        let (best, worst) = MinMaxWindow::window(params, ctx);
        (best + worst) / 2.0
    }
}

// ── 4. Monte Carlo ────────────────────────────────────────────────────────────

/// Walks one notional unit through the line `runs` times.
///
/// Each trial rolls from [`DiceRng::lead_time_stream`], rebuilt per estimate,
/// so the result depends only on the parameters and the context.  The walk
/// ignores machine 1's queue: a unit entering the line is assumed to start
/// straight away.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonteCarlo;

impl MonteCarlo {
    fn sample_one(params: &ParameterSet, ctx: &LeadTimeContext<'_>, rng: &mut DiceRng) -> u64 {
        let transfer = params.transfer_delay as u64;
        let mut rounds = 0u64;
        for stage in Stage::all() {
            let factor = params.capacity_factors[stage.index()];
            let ahead = if stage == Stage::FIRST {
                0.0
            } else {
                ctx.pre_round[stage.index()].units_or_zero() as f64
            };
            let mut remaining = ahead + 1.0;
            while remaining > 0.0 {
                let capacity = rng.roll() as f64 * factor;
                remaining -= remaining.min(capacity);
                rounds += 1;
            }
            if stage != Stage::LAST {
                rounds += transfer;
            }
        }
        rounds
    }
}

impl LeadTimeEstimator for MonteCarlo {
    fn estimate(&self, params: &ParameterSet, ctx: &LeadTimeContext<'_>) -> f64 {
        // A zero-capacity machine would never finish the unit.
        if !all_stages_productive(params) {
            return 0.0;
        }
        let runs = params.effective_monte_carlo_runs();
        let mut rng = DiceRng::lead_time_stream(params.seed);
        let total: u64 = (0..runs).map(|_| MonteCarlo::sample_one(params, ctx, &mut rng)).sum();
        total as f64 / runs as f64
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

impl LeadTimeEstimator for LeadTimeMethod {
    fn estimate(&self, params: &ParameterSet, ctx: &LeadTimeContext<'_>) -> f64 {
        match self {
            LeadTimeMethod::LittlesLaw      => LittlesLaw.estimate(params, ctx),
            LeadTimeMethod::StageAnalytical => StageAnalytical.estimate(params, ctx),
            LeadTimeMethod::MinMaxWindow    => MinMaxWindow.estimate(params, ctx),
            LeadTimeMethod::MonteCarlo      => MonteCarlo.estimate(params, ctx),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `true` if every machine can make progress on a die roll.
fn all_stages_productive(params: &ParameterSet) -> bool {
    params.capacity_factors.iter().all(|&f| f > 0.0 && f.is_finite())
}

/// Σ over stages of `queue/μ + 1/μ + transfer`, with `μ = face · factor`.
/// The last stage ships directly and has no transfer term.  Callers check
/// [`all_stages_productive`] first, so `μ > 0`.
fn stage_sum(params: &ParameterSet, ctx: &LeadTimeContext<'_>, face: f64) -> f64 {
    let transfer = params.transfer_delay as f64;
    Stage::all()
        .map(|stage| {
            let rate = face * params.capacity_factors[stage.index()];
            let wait = ctx.queue_ahead(params, stage) / rate;
            let service = 1.0 / rate;
            let hop = if stage == Stage::LAST { 0.0 } else { transfer };
            wait + service + hop
        })
        .sum()
}
