//! `toc-core` — foundational types for the dice-game production line.
//!
//! This crate is a dependency of every other `toc-*` crate.  It intentionally
//! has no `toc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`stage`]       | `Stage` (1-based machine id), `Round`, `NUM_STAGES`   |
//! | [`stock`]       | `Stock` — finite or unbounded inventory level         |
//! | [`params`]      | `ParameterSet`, `ReleasePolicy`, method/formula enums |
//! | [`rng`]         | `Mulberry32`, `DiceRng`                               |
//! | [`state`]       | `SimulationState`, `Ledger`                           |
//! | [`error`]       | `TocError`, `TocResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod params;
pub mod rng;
pub mod stage;
pub mod state;
pub mod stock;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TocError, TocResult};
pub use params::{
    BufferTarget, FinancialFormula, LeadTimeMethod, ParameterSet, ReleaseMode, ReleasePolicy,
    MEAN_DIE, MIN_MONTE_CARLO_RUNS,
};
pub use rng::{DiceRng, Mulberry32};
pub use stage::{NUM_STAGES, Round, Stage};
pub use state::{Ledger, SimulationState, sum_buffers};
pub use stock::Stock;
