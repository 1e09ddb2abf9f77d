//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RoundRow};

/// Trait implemented by export backends.
///
/// Errors are stored by the observer and retrieved with
/// [`LineOutputObserver::take_error`][crate::LineOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one round.
    fn write_round(&mut self, row: &RoundRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
