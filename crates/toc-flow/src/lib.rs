//! `toc-flow` — the two flow rules the round engine consults every round.
//!
//! | Module           | Contents                                               |
//! |------------------|--------------------------------------------------------|
//! | [`release`]      | Drum-Buffer-Rope buffer target and release quota       |
//! | [`lead_time`]    | `LeadTimeEstimator` trait and its four implementations |
//!
//! Everything here is a pure function of a [`ParameterSet`](toc_core::ParameterSet)
//! and read-only line data.  Nothing advances the main die sequence.

pub mod lead_time;
pub mod release;


pub use lead_time::{
    LeadTimeContext, LeadTimeEstimator, LittlesLaw, MinMaxWindow, MonteCarlo, StageAnalytical,
};
pub use release::{buffer_target_pieces, release_quota, stage_one_input};
