//! `LineOutputObserver<W>` — bridges `LineObserver` to an `OutputWriter`.

use toc_core::SimulationState;
use toc_sim::LineObserver;

use crate::row::RoundRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`LineObserver`] that writes one row per round to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `LineObserver`
/// methods have no return value.  After the run, check with
/// [`take_error`][Self::take_error] or call [`finish`][Self::finish].
pub struct LineOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> LineOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Rows successfully handed to the writer.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, surfacing the first stored error if there was one.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        match result {
            Ok(()) => self.rows += 1,
            Err(e) => {
                // Keep only the first error.
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
            }
        }
    }
}

impl<W: OutputWriter> LineObserver for LineOutputObserver<W> {
    fn on_round_end(&mut self, state: &SimulationState) {
        let result = self.writer.write_round(&RoundRow::from_state(state));
        self.store_err(result);
    }
}
