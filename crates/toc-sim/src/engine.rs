//! The round function.

use toc_core::{DiceRng, Ledger, NUM_STAGES, ParameterSet, SimulationState, Stock, sum_buffers};
use toc_flow::{LeadTimeContext, LeadTimeEstimator, stage_one_input};
use tracing::debug;

/// Advance `prev` by one round using the configured lead-time method.
///
/// Consumes exactly six draws from `rng`; the result depends only on
/// `params`, `prev`, and those draws.
pub fn step(params: &ParameterSet, prev: &SimulationState, rng: &mut DiceRng) -> SimulationState {
    step_with(params, prev, rng, &params.lead_time_method)
}

/// Like [`step`] but with an explicit lead-time estimator.
pub fn step_with<E: LeadTimeEstimator + ?Sized>(
    params:    &ParameterSet,
    prev:      &SimulationState,
    rng:       &mut DiceRng,
    estimator: &E,
) -> SimulationState {
    // ── Roll ──────────────────────────────────────────────────────────────
    let dice = rng.roll_line();
    let mut capacity: [u32; NUM_STAGES] = std::array::from_fn(|i| {
        // Float-to-int casts saturate, so negative or NaN products give 0.
        (dice[i] as f64 * params.capacity_factors[i]).floor() as u32
    });

    // ── Release ───────────────────────────────────────────────────────────
    let mut pre_round = prev.next_pre_round;
    pre_round[0] = stage_one_input(params, &prev.next_pre_round);
    if let Stock::Units(quota) = pre_round[0] {
        capacity[0] = capacity[0].min(quota);
    }

    // ── Produce ───────────────────────────────────────────────────────────
    //
    // Every machine works only from what was queued at round start.
    let mut production = [0u32; NUM_STAGES];
    let mut post_round = pre_round;
    for i in 0..NUM_STAGES {
        production[i] = pre_round[i].limit(capacity[i]);
        post_round[i] = pre_round[i].drain(production[i]);
    }

    // ── Carry (one-round transfer delay) ──────────────────────────────────
    let mut next_pre_round = post_round;
    for i in 1..NUM_STAGES {
        next_pre_round[i] = post_round[i].receive(production[i - 1]);
    }

    // ── Measure ───────────────────────────────────────────────────────────
    let round = prev.round.next();
    let throughput = production[NUM_STAGES - 1];
    let cumulative_throughput = prev.cumulative_throughput + throughput as u64;
    let work_in_process = sum_buffers(&post_round);
    let mean_throughput = cumulative_throughput as f64 / round.0 as f64;

    let lead_time = estimator.estimate(params, &LeadTimeContext {
        work_in_process,
        mean_throughput,
        pre_round: &pre_round,
    });

    let ledger = post_ledger(
        params,
        &prev.ledger,
        throughput,
        production[0],
        work_in_process,
        cumulative_throughput,
    );

    debug!(
        %round,
        throughput,
        cumulative_throughput,
        work_in_process,
        lead_time,
        "round complete"
    );

    SimulationState {
        round,
        dice,
        capacity,
        pre_round,
        production,
        post_round,
        next_pre_round,
        throughput,
        cumulative_throughput,
        work_in_process,
        lead_time,
        ledger,
        release_view: stage_one_input(params, &next_pre_round),
    }
}

/// Refresh the release-policy display of `state` under `params`.
///
/// Only [`SimulationState::release_view`] changes.  The round counter,
/// accumulators and recorded flows are left exactly as they were, so a new
/// bottleneck or buffer target can be previewed without advancing the line.
pub fn recompute_release_view(state: &SimulationState, params: &ParameterSet) -> SimulationState {
    SimulationState {
        release_view: stage_one_input(params, &state.next_pre_round),
        ..state.clone()
    }
}

/// Roll the ledger forward by one round.
fn post_ledger(
    params:                &ParameterSet,
    prev:                  &Ledger,
    throughput:            u32,
    released:              u32,
    work_in_process:       u64,
    cumulative_throughput: u64,
) -> Ledger {
    let revenue = prev.revenue + params.sell_price * throughput as f64;
    let fixed_cost = prev.fixed_cost + params.fixed_cost_per_round;
    let holding_cost = prev.holding_cost + params.holding_cost * work_in_process as f64;
    let invested_capital = prev.invested_capital + params.variable_cost * released as f64;

    let operating_profit = params.financial_formula.operating_profit(
        params,
        revenue,
        fixed_cost,
        holding_cost,
        cumulative_throughput,
    );
    let roi = if invested_capital > 0.0 { operating_profit / invested_capital } else { 0.0 };

    Ledger { revenue, fixed_cost, holding_cost, invested_capital, operating_profit, roi }
}
