//! The `Simulator` struct and its step loop.

use hw_core::{Lane, SimConfig, SimRng, Step, VehicleId};
use hw_road::Road;
use tracing::{debug, info, trace};

use crate::arrivals::spawn_arrivals;
use crate::rules::{self, Advance};
use crate::{SimError, SimObserver, SimResult, TransitLog, TransitRecord};

// ── Counters ──────────────────────────────────────────────────────────────────

/// What happened during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub step:         Step,
    /// Vehicles on the road after the arrival process.
    pub vehicles:     usize,
    pub spawned:      u64,
    pub exited:       u64,
    pub lane_changes: u64,
    pub displaced:    u64,
    pub skipped:      u64,
}

/// Totals accumulated over the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimCounters {
    pub spawned:      u64,
    pub exited:       u64,
    pub lane_changes: u64,
    pub displaced:    u64,
    pub skipped:      u64,
}

impl SimCounters {
    fn absorb(&mut self, s: &StepSummary) {
        self.spawned      += s.spawned;
        self.exited       += s.exited;
        self.lane_changes += s.lane_changes;
        self.displaced    += s.displaced;
        self.skipped      += s.skipped;
    }
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Holds the road, the injected RNG, the step counter, and the transit log.
/// Create via [`SimBuilder`][crate::SimBuilder] or [`Simulator::new`].
pub struct Simulator {
    /// Run configuration (step budget, seed, highway parameters).
    pub config: SimConfig,

    pub(crate) road:    Road,
    pub(crate) rng:     SimRng,
    pub(crate) step:    Step,
    pub(crate) next_id: VehicleId,
    pub(crate) log:     TransitLog,
    pub(crate) totals:  SimCounters,
}

impl Simulator {
    /// Validate `config` and build a simulator on an empty road, seeded from
    /// `config.seed`.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        crate::SimBuilder::new(config).build()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current step until the step budget is exhausted.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = self.config.end_step();
        info!(
            from = self.step.0,
            to = end.0,
            seed = self.config.seed,
            "starting highway simulation"
        );
        while self.step < end {
            self.step_observed(observer);
        }
        observer.on_sim_end(self.step, &self.log);
        info!(
            steps = self.step.0,
            exited = self.totals.exited,
            mean_transit = ?self.log.mean(),
            "highway simulation finished"
        );
    }

    /// Run exactly `n` steps from the current position (ignores the budget).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_observed(observer);
        }
    }

    /// Execute one step without an observer.
    pub fn step(&mut self) -> StepSummary {
        self.process_step()
    }

    /// Mean transit time over every vehicle that has exited so far.
    ///
    /// Returns [`SimError::NoData`] until the first vehicle leaves the road.
    pub fn average_transit_time(&self) -> SimResult<f64> {
        self.log.mean().ok_or(SimError::NoData)
    }

    /// The step that will be processed next.
    #[inline]
    pub fn current_step(&self) -> Step {
        self.step
    }

    /// `true` once the step budget is exhausted.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.step >= self.config.end_step()
    }

    #[inline]
    pub fn road(&self) -> &Road {
        &self.road
    }

    #[inline]
    pub fn transit_log(&self) -> &TransitLog {
        &self.log
    }

    #[inline]
    pub fn counters(&self) -> SimCounters {
        self.totals
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_step_start(self.step);
        let first_new = self.log.len();
        let summary = self.process_step();
        for record in &self.log.records()[first_new..] {
            observer.on_exit(record);
        }
        observer.on_step_end(&summary, &self.road);
    }

    /// Move every vehicle once, spawn arrivals, then advance the counter.
    ///
    /// Ordering contract: indices are visited in descending order and, at
    /// each index, `Left` before `Right`.  A vehicle always ends its turn at
    /// a higher index than it started (a lane change is followed by a cruise
    /// move of at least one cell), so it is never seen twice in one step.
    /// Visiting in any other order breaks that guarantee.
    fn process_step(&mut self) -> StepSummary {
        let now = self.step;
        let mut summary = StepSummary { step: now, ..StepSummary::default() };

        for index in (0..self.road.length()).rev() {
            for lane in Lane::ALL {
                if self.road.is_empty_at(lane, index) {
                    continue;
                }
                match rules::advance(&mut self.road, lane, index) {
                    Advance::Exited(vehicle) => {
                        let record = TransitRecord {
                            vehicle: vehicle.id(),
                            class:   vehicle.class(),
                            lane,
                            arrival: vehicle.arrival(),
                            exit:    now,
                        };
                        debug!(
                            step = now.0,
                            vehicle = record.vehicle.0,
                            class = %record.class,
                            transit = record.transit_time(),
                            "vehicle exited"
                        );
                        self.log.push(record);
                        summary.exited += 1;
                    }
                    moved => {
                        if moved.changed_lane() {
                            summary.lane_changes += 1;
                        }
                    }
                }
            }
        }

        let arrivals = spawn_arrivals(
            &mut self.road,
            &self.config.highway,
            &mut self.rng,
            now,
            &mut self.next_id,
        );
        summary.spawned = arrivals.spawned;
        summary.displaced = arrivals.displaced;
        summary.skipped = arrivals.skipped;
        summary.vehicles = self.road.vehicle_count();

        trace!(
            step = now.0,
            vehicles = summary.vehicles,
            spawned = summary.spawned,
            exited = summary.exited,
            lane_changes = summary.lane_changes,
            "step complete"
        );

        self.totals.absorb(&summary);
        self.step = now.next();
        summary
    }
}
