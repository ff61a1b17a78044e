//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use hw_core::Step;
use hw_road::Road;
use hw_sim::{SimObserver, StepSummary, TransitLog, TransitRecord};

use crate::row::{StepSummaryRow, TransitRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes transit samples and step summaries to any
/// [`OutputWriter`] backend.
///
/// Exits are buffered during a step and written as one batch when the step
/// ends.  Errors from the writer are stored internally because
/// `SimObserver` methods have no return value.  After `sim.run()` returns,
/// check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<TransitRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_exit(&mut self, record: &TransitRecord) {
        self.pending.push(TransitRow::from(record));
    }

    fn on_step_end(&mut self, summary: &StepSummary, _road: &Road) {
        if !self.pending.is_empty() {
            let rows = std::mem::take(&mut self.pending);
            let result = self.writer.write_transits(&rows);
            self.store_err(result);
        }
        let result = self.writer.write_step_summary(&StepSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_step: Step, _log: &TransitLog) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
