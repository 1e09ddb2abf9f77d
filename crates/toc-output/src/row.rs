//! Plain data row written by output backends.

use toc_core::{NUM_STAGES, SimulationState};

/// The exported view of one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRow {
    pub round:        u64,
    pub dice:         [u8; NUM_STAGES],
    pub production:   [u32; NUM_STAGES],
    /// Queues in front of machines 2..=6 at the start of the round.
    pub buffers:      [u32; NUM_STAGES - 1],
    pub throughput:   u32,
    pub wip:          u64,
    pub lead_time:    f64,
    pub revenue:      f64,
    pub holding_cost: f64,
    pub fixed_cost:   f64,
    pub profit:       f64,
}

impl RoundRow {
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            round:        state.round.0,
            dice:         state.dice,
            production:   state.production,
            buffers:      std::array::from_fn(|i| state.pre_round[i + 1].units_or_zero()),
            throughput:   state.throughput,
            wip:          state.work_in_process,
            lead_time:    state.lead_time,
            revenue:      state.ledger.revenue,
            holding_cost: state.ledger.holding_cost,
            fixed_cost:   state.ledger.fixed_cost,
            profit:       state.ledger.operating_profit,
        }
    }
}

impl From<&SimulationState> for RoundRow {
    fn from(state: &SimulationState) -> Self {
        RoundRow::from_state(state)
    }
}
