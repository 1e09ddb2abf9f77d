//! `toc-sim` — round engine and line runner for the dice-game simulator.
//!
//! # One round
//!
//! ```text
//! ① Roll       — one die per machine; capacity = floor(die · factor).
//! ② Release    — machine 1 sees unbounded input (push) or the DBR quota.
//! ③ Produce    — each machine makes min(capacity, queued input).
//! ④ Carry      — output of machine i joins machine i+1's queue only
//!                at the start of the next round.
//! ⑤ Measure    — throughput, WIP, lead time, ledger.
//! ```
//!
//! [`step`] is the pure round function.  [`Line`] owns parameters, dice and
//! the current snapshot and exposes the trigger surface: single step, batch,
//! run-until, reset, and soft policy updates.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use toc_core::ParameterSet;
//! use toc_sim::{Line, NoopObserver};
//!
//! let mut line = Line::new(ParameterSet::default());
//! line.run_rounds(20, &mut NoopObserver);
//! println!("TH so far: {}", line.state().cumulative_throughput);
//! ```

pub mod engine;
pub mod error;
pub mod line;
pub mod observer;


pub use engine::{recompute_release_view, step, step_with};
pub use error::{SimError, SimResult};
pub use line::Line;
pub use observer::{LineObserver, NoopObserver};
