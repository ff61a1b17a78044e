//! Text rendering of the road.
//!
//! One line per lane, Left first; `C` marks an occupied cell and `_` an
//! empty one.  Only the drivable length is drawn.

use std::io::Write;

use hw_core::{Lane, Step};
use hw_road::Road;
use hw_sim::{SimObserver, StepSummary, TransitLog};

use crate::{OutputError, OutputResult};

pub const OCCUPIED: char = 'C';
pub const EMPTY: char = '_';

/// Render one lane as a single line without a trailing newline.
pub fn render_lane(road: &Road, lane: Lane) -> String {
    (0..road.length())
        .map(|i| if road.is_empty_at(lane, i) { EMPTY } else { OCCUPIED })
        .collect()
}

/// Render both lanes, separated by a newline.
pub fn render_road(road: &Road) -> String {
    format!("{}\n{}", render_lane(road, Lane::Left), render_lane(road, Lane::Right))
}

/// A [`SimObserver`] that prints the road after every `interval`-th step.
///
/// Purely diagnostic.  Write errors are stored like
/// [`SimOutputObserver`][crate::SimOutputObserver] does and printing stops
/// after the first one.
pub struct RoadPrinter<W: Write> {
    out:        W,
    interval:   u64,
    last_error: Option<OutputError>,
}

impl<W: Write> RoadPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            interval:   1,
            last_error: None,
        }
    }

    /// Print only steps whose index is a multiple of `n` (0 is treated as 1).
    pub fn every(mut self, n: u64) -> Self {
        self.interval = n.max(1);
        self
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, road: &Road) -> OutputResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", render_road(road))?;
        Ok(())
    }
}

impl<W: Write> SimObserver for RoadPrinter<W> {
    fn on_step_end(&mut self, summary: &StepSummary, road: &Road) {
        if self.last_error.is_some() || summary.step.0 % self.interval != 0 {
            return;
        }
        if let Err(e) = self.print(road) {
            self.last_error = Some(e);
        }
    }

    fn on_sim_end(&mut self, _final_step: Step, _log: &TransitLog) {
        if self.last_error.is_none() {
            if let Err(e) = self.out.flush() {
                self.last_error = Some(e.into());
            }
        }
    }
}
