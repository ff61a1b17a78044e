//! Plain data row types written by output backends.

use hw_core::Lane;
use hw_road::SpeedClass;
use hw_sim::{StepSummary, TransitRecord};

/// One vehicle that left the highway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitRow {
    pub vehicle_id:    u64,
    pub class:         SpeedClass,
    /// Lane at the moment of exit.
    pub lane:          Lane,
    pub arrival_step:  u64,
    pub exit_step:     u64,
    pub transit_steps: u64,
}

impl From<&TransitRecord> for TransitRow {
    fn from(r: &TransitRecord) -> Self {
        Self {
            vehicle_id:    r.vehicle.0,
            class:         r.class,
            lane:          r.lane,
            arrival_step:  r.arrival.0,
            exit_step:     r.exit.0,
            transit_steps: r.transit_time(),
        }
    }
}

/// Counts for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:         u64,
    pub vehicles:     u64,
    pub spawned:      u64,
    pub exited:       u64,
    pub lane_changes: u64,
    pub displaced:    u64,
    pub skipped:      u64,
}

impl From<&StepSummary> for StepSummaryRow {
    fn from(s: &StepSummary) -> Self {
        Self {
            step:         s.step.0,
            vehicles:     s.vehicles as u64,
            spawned:      s.spawned,
            exited:       s.exited,
            lane_changes: s.lane_changes,
            displaced:    s.displaced,
            skipped:      s.skipped,
        }
    }
}
