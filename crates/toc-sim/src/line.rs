//! The `Line` runner.

use std::sync::Arc;

use toc_core::{DiceRng, ParameterSet, ReleasePolicy, Round, SimulationState, Stage};
use tracing::info;

use crate::engine::{recompute_release_view, step};
use crate::{LineObserver, SimResult};

/// A production line being played.
///
/// `Line` is the single mutator of a run: it owns the parameters, the dice,
/// and the current snapshot.  Each call that advances the line computes the
/// next snapshot in full and then swaps it in, so a [`snapshot`][Self::snapshot]
/// handed to another thread is always a complete round.
///
/// Scheduling (autoplay timers, UI buttons) is the caller's business; they
/// just call [`step`][Self::step] or [`run_rounds`][Self::run_rounds].
pub struct Line {
    params: ParameterSet,
    rng:    DiceRng,
    state:  Arc<SimulationState>,

    /// `cumulative_throughput / round` after every round since the last reset.
    mean_throughput: Vec<f64>,
}

impl Line {
    /// Seed the dice from `params.seed` and set up round 0.
    pub fn new(params: ParameterSet) -> Self {
        let state = fresh_state(&params);
        Self {
            rng: DiceRng::new(params.seed),
            params,
            state: Arc::new(state),
            mean_throughput: Vec::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// A shared handle to the current snapshot, safe to keep across rounds.
    pub fn snapshot(&self) -> Arc<SimulationState> {
        Arc::clone(&self.state)
    }

    pub fn round(&self) -> Round {
        self.state.round
    }

    /// Mean throughput after each round, oldest first.
    pub fn mean_throughput_series(&self) -> &[f64] {
        &self.mean_throughput
    }

    // ── Advancing ─────────────────────────────────────────────────────────

    /// Play one round.
    pub fn step<O: LineObserver>(&mut self, observer: &mut O) -> &SimulationState {
        let next = step(&self.params, &self.state, &mut self.rng);
        self.mean_throughput.push(next.mean_throughput());
        self.state = Arc::new(next);
        observer.on_round_end(&self.state);
        &self.state
    }

    /// Play `n` rounds back to back.
    pub fn run_rounds<O: LineObserver>(&mut self, n: u64, observer: &mut O) -> &SimulationState {
        for _ in 0..n {
            self.step(observer);
        }
        &self.state
    }

    /// Play up to `max_rounds`, checking `stop` after each one.
    ///
    /// This is the autoplay model: cancellation is only observed between
    /// rounds.  Returns the number of rounds played.
    pub fn run_until<O, F>(&mut self, max_rounds: u64, observer: &mut O, mut stop: F) -> u64
    where
        O: LineObserver,
        F: FnMut(&SimulationState) -> bool,
    {
        let mut played = 0;
        while played < max_rounds {
            self.step(observer);
            played += 1;
            if stop(&self.state) {
                break;
            }
        }
        played
    }

    // ── Resetting ─────────────────────────────────────────────────────────

    /// Back to round 0 with the same parameters and a re-seeded die.
    pub fn reset<O: LineObserver>(&mut self, observer: &mut O) {
        let params = self.params.clone();
        self.reset_with(params, observer);
    }

    /// Replace the parameters and start over from round 0.
    pub fn reset_with<O: LineObserver>(&mut self, params: ParameterSet, observer: &mut O) {
        info!(seed = params.seed, method = %params.lead_time_method, "line reset");
        self.rng = DiceRng::new(params.seed);
        self.state = Arc::new(fresh_state(&params));
        self.params = params;
        self.mean_throughput.clear();
        observer.on_reset(&self.state);
    }

    // ── Soft updates ──────────────────────────────────────────────────────

    /// Swap the release policy without resetting.
    ///
    /// Round counter, accumulators and die position are untouched; the new
    /// policy governs the next round and the current snapshot's release view
    /// is refreshed to match.
    pub fn apply_policy<O: LineObserver>(&mut self, policy: ReleasePolicy, observer: &mut O) {
        info!(
            mode = %policy.mode,
            bottleneck = %policy.bottleneck,
            round = %self.state.round,
            "release policy updated"
        );
        self.params.policy = policy;
        self.state = Arc::new(recompute_release_view(&self.state, &self.params));
        observer.on_policy_change(&self.state);
    }

    /// Move the bottleneck to machine `number` (1..=6), keeping mode and target.
    pub fn set_bottleneck<O: LineObserver>(&mut self, number: u8, observer: &mut O) -> SimResult<()> {
        let bottleneck = Stage::new(number)?;
        let policy = ReleasePolicy { bottleneck, ..self.params.policy };
        self.apply_policy(policy, observer);
        Ok(())
    }
}

/// Round 0 with its release view filled in for the configured policy.
fn fresh_state(params: &ParameterSet) -> SimulationState {
    recompute_release_view(&SimulationState::initial(params), params)
}
