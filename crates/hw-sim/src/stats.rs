//! Transit-time samples collected as vehicles leave the highway.

use hw_core::{Lane, Step, VehicleId};
use hw_road::SpeedClass;

/// One completed transit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitRecord {
    pub vehicle: VehicleId,
    pub class:   SpeedClass,
    /// Lane the vehicle was in when it exited.
    pub lane:    Lane,
    pub arrival: Step,
    pub exit:    Step,
}

impl TransitRecord {
    /// `exit − arrival`, in steps.
    #[inline]
    pub fn transit_time(&self) -> u64 {
        self.exit.since(self.arrival)
    }
}

/// Append-only log of completed transits, in exit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitLog {
    records: Vec<TransitRecord>,
}

impl TransitLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, record: TransitRecord) {
        self.records.push(record);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TransitRecord] {
        &self.records
    }

    /// Transit times in exit order.
    pub fn transit_times(&self) -> impl Iterator<Item = u64> + '_ {
        self.records.iter().map(TransitRecord::transit_time)
    }

    /// Arithmetic mean of all transit times; `None` if nothing has exited.
    pub fn mean(&self) -> Option<f64> {
        mean(self.transit_times())
    }

    /// Mean transit time of vehicles of one speed class.
    pub fn mean_for(&self, class: SpeedClass) -> Option<f64> {
        mean(
            self.records
                .iter()
                .filter(|r| r.class == class)
                .map(TransitRecord::transit_time),
        )
    }

    pub fn min(&self) -> Option<u64> {
        self.transit_times().min()
    }

    pub fn max(&self) -> Option<u64> {
        self.transit_times().max()
    }
}

fn mean(times: impl Iterator<Item = u64>) -> Option<f64> {
    let (count, total) = times.fold((0u64, 0u64), |(n, sum), t| (n + 1, sum + t));
    (count > 0).then(|| total as f64 / count as f64)
}
