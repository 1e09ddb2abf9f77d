//! Observer trait for progress reporting and data collection.

use toc_core::SimulationState;

/// Callbacks invoked by [`Line`][crate::Line] after each state change.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Every hook receives a complete snapshot;
/// no hook ever sees a half-computed round.
///
/// # Example — throughput printer
///
/// ```rust,ignore
/// struct ThPrinter;
///
/// impl LineObserver for ThPrinter {
///     fn on_round_end(&mut self, state: &SimulationState) {
///         println!("{}: TH {}", state.round, state.throughput);
///     }
/// }
/// ```
pub trait LineObserver {
    /// Called once per completed round with the new snapshot.
    fn on_round_end(&mut self, _state: &SimulationState) {}

    /// Called after the line is reinitialised (same or new parameters).
    fn on_reset(&mut self, _state: &SimulationState) {}

    /// Called after a soft release-policy update refreshed the current
    /// snapshot's release view.
    fn on_policy_change(&mut self, _state: &SimulationState) {}
}

/// A [`LineObserver`] that does nothing.
pub struct NoopObserver;

impl LineObserver for NoopObserver {}
