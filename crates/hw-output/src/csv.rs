//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `transit_samples.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StepSummaryRow, TransitRow};

pub const TRANSIT_FILE: &str = "transit_samples.csv";
pub const SUMMARY_FILE: &str = "step_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    transits:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut transits = Writer::from_path(dir.join(TRANSIT_FILE))?;
        transits.write_record([
            "vehicle_id", "class", "lane", "arrival_step", "exit_step", "transit_steps",
        ])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record([
            "step", "vehicles", "spawned", "exited", "lane_changes", "displaced", "skipped",
        ])?;

        Ok(Self {
            transits,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_transits(&mut self, rows: &[TransitRow]) -> OutputResult<()> {
        for row in rows {
            self.transits.write_record(&[
                row.vehicle_id.to_string(),
                row.class.to_string(),
                row.lane.to_string(),
                row.arrival_step.to_string(),
                row.exit_step.to_string(),
                row.transit_steps.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.vehicles.to_string(),
            row.spawned.to_string(),
            row.exited.to_string(),
            row.lane_changes.to_string(),
            row.displaced.to_string(),
            row.skipped.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.transits.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
