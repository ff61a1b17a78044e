//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, StepSummaryRow, TransitRow};

/// Sink for per-exit and per-step rows.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// keeps the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of completed transits.
    fn write_transits(&mut self, rows: &[TransitRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
