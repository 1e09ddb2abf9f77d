//! Stage-1 release rule.
//!
//! Under push, machine 1 always sees unbounded input.  Under constrained
//! (DBR) release, the rope lets in only what is needed to bring the buffer
//! in front of the bottleneck back up to its target:
//!
//! ```text
//! target = pieces                              if set in pieces
//!        = round(days · 3.5 · factor[bottleneck])   otherwise
//! quota  = max(0, target − buffer[bottleneck])
//! ```
//!
//! The target is recomputed from the live parameters every call, so a new
//! bottleneck or target applies on the very next round.

use toc_core::{BufferTarget, NUM_STAGES, ParameterSet, Stock};
use tracing::trace;

/// Size of the bottleneck buffer target, in pieces.
pub fn buffer_target_pieces(params: &ParameterSet) -> u32 {
    match params.policy.target {
        BufferTarget::Pieces(n) => n,
        BufferTarget::Days(days) => {
            let pieces = (days * params.mean_capacity(params.policy.bottleneck)).round();
            if pieces.is_finite() && pieces > 0.0 { pieces as u32 } else { 0 }
        }
    }
}

/// Units the rope releases to machine 1 given the queues at round start.
///
/// An unbounded level at the bottleneck (only possible when machine 1 is
/// itself the bottleneck) counts as an empty buffer.
pub fn release_quota(params: &ParameterSet, pre_round: &[Stock; NUM_STAGES]) -> u32 {
    let target = buffer_target_pieces(params);
    let bottleneck = params.policy.bottleneck;
    let buffer = pre_round[bottleneck.index()].units_or_zero();
    let quota = target.saturating_sub(buffer);
    trace!(%bottleneck, target, buffer, quota, "release quota");
    quota
}

/// Input available to machine 1 this round.
pub fn stage_one_input(params: &ParameterSet, pre_round: &[Stock; NUM_STAGES]) -> Stock {
    if params.is_constrained() {
        Stock::Units(release_quota(params, pre_round))
    } else {
        Stock::Unbounded
    }
}
