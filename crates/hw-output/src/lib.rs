//! `hw-output` — simulation output for the two-lane highway simulator.
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`csv`]      | `CsvWriter` → `transit_samples.csv`, `step_summaries.csv`   |
//! | [`observer`] | `SimOutputObserver` — bridges `SimObserver` to a writer     |
//! | [`render`]   | `render_road`, `RoadPrinter` — text view of the road        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use hw_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod render;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use render::{RoadPrinter, render_road};
pub use row::{StepSummaryRow, TransitRow};
pub use writer::OutputWriter;
